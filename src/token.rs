//! Keychain-backed OAuth token storage.
//!
//! Tokens are stored one per key (an account id, or `account:device` for
//! device-scoped sessions) and every operation round-trips to the OS
//! keychain; unlike the credential cache there is no in-memory copy, since
//! the consuming client's token-refresh logic already decides when a token
//! is worth re-reading.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Payload};
use crate::store::{KeychainStore, SecretStore, TOKEN_SERVICE};

/// RFC 3339 timestamps written with whole seconds.
///
/// Readers accept both fractional and whole-second forms; writes always
/// truncate to whole seconds, so a token round-trips at second precision.
mod rfc3339_seconds {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// An OAuth access/refresh token pair with its expiry timestamps.
///
/// The default value is the "no token" state: empty token strings with
/// epoch expiries, which any expiry check treats as long expired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(with = "rfc3339_seconds")]
    pub expires_at: DateTime<Utc>,
    #[serde(with = "rfc3339_seconds")]
    pub refresh_expires_at: DateTime<Utc>,
}

/// OAuth token storage in the OS keychain.
///
/// Stateless: each call stands alone, and concurrent calls on the same key
/// race exactly as the keychain defines (last write wins).
pub struct TokenStore {
    store: Box<dyn SecretStore>,
}

impl TokenStore {
    /// Create a token store backed by the OS keychain under
    /// [`TOKEN_SERVICE`].
    pub fn new() -> Self {
        Self {
            store: Box::new(KeychainStore::new(TOKEN_SERVICE)),
        }
    }

    /// Replace the backing store. Used for testing and for consumers that
    /// bring their own secret storage.
    pub fn with_store(mut self, store: impl SecretStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Read the token stored under `key`.
    ///
    /// A key with no stored token yields [`OAuthToken::default`] with no
    /// error; an unauthenticated account is an expected state, not a
    /// failure. A stored payload that doesn't parse is an error, surfaced
    /// so the caller doesn't mistake corruption for "not logged in".
    pub fn get(&self, key: &str) -> Result<OAuthToken, Error> {
        let Some(data) = self.store.get(key)? else {
            return Ok(OAuthToken::default());
        };

        serde_json::from_str(&data).map_err(|source| Error::Deserialize {
            what: Payload::Token,
            source,
        })
    }

    /// Persist `token` under `key`, overwriting any previous token.
    ///
    /// Timestamps are written at whole-second precision; sub-second
    /// components do not survive a round-trip.
    pub fn set(&self, key: &str, token: &OAuthToken) -> Result<(), Error> {
        let data = serde_json::to_string(token).map_err(|source| Error::Serialize {
            what: Payload::Token,
            source,
        })?;

        self.store.set(key, &data)
    }

    /// Remove the token stored under `key`. Removing a token that was
    /// never stored succeeds.
    pub fn delete(&self, key: &str) -> Result<(), Error> {
        self.store.delete(key)
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
