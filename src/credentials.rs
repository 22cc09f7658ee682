//! Keychain-backed credential cache.
//!
//! Stores one username/password pair per device in the OS keychain and
//! serves it through an in-process cache: the pair is loaded on first
//! access, subsequent reads hit memory, and [`CredentialCache::update`] /
//! [`CredentialCache::delete`] keep the cache and the keychain in step.
//!
//! The read accessors are infallible by contract, matching the credentials
//! provider interface of the consuming API client: a missing pair, a
//! keychain failure, and a corrupt payload all read as empty strings, with
//! failure detail going to the log instead of the caller.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Payload};
use crate::store::{KeychainStore, SecretStore, CREDENTIALS_SERVICE};

/// Provides a username and password for authentication.
///
/// The read operations cannot fail; implementations return empty strings
/// when no credentials are available.
pub trait CredentialsProvider: Send + Sync {
    fn username(&self) -> String;
    fn password(&self) -> String;
}

/// Wire shape of a stored credential pair.
#[derive(Debug, Serialize, Deserialize)]
struct CredentialPair {
    username: String,
    password: String,
}

#[derive(Default)]
struct CacheState {
    loaded: bool,
    username: String,
    password: String,
}

/// Credential pair stored in the OS keychain, cached in memory after the
/// first read.
///
/// All state transitions happen under one lock: no reader ever observes a
/// half-updated pair, at the cost of serializing cache operations (and the
/// keychain round-trip of a load) process-wide. Acceptable, since the pair
/// is read roughly once per process lifetime or re-authentication.
pub struct CredentialCache {
    store: Box<dyn SecretStore>,
    key: String,
    state: Mutex<CacheState>,
}

impl CredentialCache {
    /// Create a cache for the given device, backed by the OS keychain under
    /// [`CREDENTIALS_SERVICE`].
    pub fn new(device_id: Uuid) -> Self {
        Self {
            store: Box::new(KeychainStore::new(CREDENTIALS_SERVICE)),
            key: device_id.to_string(),
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Replace the backing store. Used for testing and for consumers that
    /// bring their own secret storage.
    pub fn with_store(mut self, store: impl SecretStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Load the pair from the store into `state`, which must be held locked
    /// by the caller.
    ///
    /// A missing entry and a corrupt payload both mark the cache as loaded:
    /// re-reading would not change either outcome. A store failure leaves
    /// `loaded` unset so the next accessor call retries instead of pinning
    /// empty credentials for the rest of the process.
    fn load(&self, state: &mut CacheState) {
        state.username.clear();
        state.password.clear();

        match self.store.get(&self.key) {
            Ok(None) => {
                state.loaded = true;
            }
            Ok(Some(data)) => match serde_json::from_str::<CredentialPair>(&data) {
                Ok(pair) => {
                    state.loaded = true;
                    state.username = pair.username;
                    state.password = pair.password;
                }
                Err(err) => {
                    state.loaded = true;
                    tracing::warn!(error = %err, "Stored credentials are not valid JSON");
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "Could not read credentials from keychain");
            }
        }
    }

    fn read<F: FnOnce(&CacheState) -> String>(&self, field: F) -> String {
        let mut state = self.state.lock().expect("credential lock poisoned");
        if !state.loaded {
            self.load(&mut state);
        }
        field(&state)
    }

    /// Persist a new credential pair and cache it.
    ///
    /// On failure the keychain and the cache are both left untouched.
    pub fn update(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), Error> {
        let username = username.into();
        let password = password.into();

        let mut state = self.state.lock().expect("credential lock poisoned");

        let data = serde_json::to_string(&CredentialPair {
            username: username.clone(),
            password: password.clone(),
        })
        .map_err(|source| Error::Serialize {
            what: Payload::Credentials,
            source,
        })?;

        self.store.set(&self.key, &data)?;

        state.loaded = true;
        state.username = username;
        state.password = password;

        Ok(())
    }

    /// Delete the credential pair from the keychain and drop the cached
    /// copy, forcing the next read to go back to the keychain.
    ///
    /// Deleting credentials that were never stored succeeds.
    pub fn delete(&self) -> Result<(), Error> {
        let mut state = self.state.lock().expect("credential lock poisoned");

        self.store.delete(&self.key)?;

        state.loaded = false;
        state.username.clear();
        state.password.clear();

        Ok(())
    }
}

impl CredentialsProvider for CredentialCache {
    /// Returns the stored username, or the empty string if none is stored
    /// or the keychain could not be read.
    fn username(&self) -> String {
        self.read(|state| state.username.clone())
    }

    /// Returns the stored password, or the empty string if none is stored
    /// or the keychain could not be read.
    fn password(&self) -> String {
        self.read(|state| state.password.clone())
    }
}
