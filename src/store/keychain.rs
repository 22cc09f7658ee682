//! OS keychain secret store.
//!
//! Backed by the platform-native credential vault (macOS Keychain, Windows
//! Credential Manager, Secret Service on Linux) via the `keyring` crate.

use keyring::Entry;

use crate::error::Error;

use super::SecretStore;

/// Secret store backed by the OS keychain.
///
/// Entries are addressed as `(service, key)` pairs, where the service name
/// is fixed at construction and partitions entries by purpose.
pub struct KeychainStore {
    service: String,
}

impl KeychainStore {
    /// Create a store scoped to the given keychain service name.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, Error> {
        Ok(Entry::new(&self.service, key)?)
    }
}

impl SecretStore for KeychainStore {
    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        Ok(self.entry(key)?.set_password(value)?)
    }

    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn delete(&self, key: &str) -> Result<(), Error> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
