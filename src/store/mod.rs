//! Secret storage abstraction.
//!
//! Provides a unified interface over the OS keychain: opaque string values
//! addressed by a service (namespace) fixed at construction and a per-entry
//! key. Absence of an entry is part of the contract, not an error: `get`
//! returns `Ok(None)` and `delete` succeeds on a missing entry, so callers
//! never have to recognize the backend's not-found signal themselves.

mod keychain;
mod memory;

pub use keychain::KeychainStore;
pub use memory::MemoryStore;

use crate::error::Error;

/// Keychain service name under which credential pairs are stored.
pub const CREDENTIALS_SERVICE: &str = "credkeep.credentials";

/// Keychain service name under which OAuth tokens are stored.
///
/// Distinct from [`CREDENTIALS_SERVICE`] so token keys can never collide
/// with credential keys.
pub const TOKEN_SERVICE: &str = "credkeep.token";

/// A key-value store for secrets.
///
/// Implementations are an opaque string pass-through: no retries, no
/// validation of the value shape. Errors other than not-found propagate
/// to the caller unmodified.
pub trait SecretStore: Send + Sync {
    /// Store a value under `key`, overwriting any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Retrieve the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the entry doesn't exist.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Remove the entry under `key`.
    ///
    /// Deleting an entry that doesn't exist is not an error.
    fn delete(&self, key: &str) -> Result<(), Error>;
}

impl<S: SecretStore + ?Sized> SecretStore for std::sync::Arc<S> {
    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).get(key)
    }

    fn delete(&self, key: &str) -> Result<(), Error> {
        (**self).delete(key)
    }
}
