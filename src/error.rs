use std::fmt;

/// Errors surfaced by the keychain-backed stores.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying OS keychain failed. Missing entries are not reported
    /// here; [`SecretStore::get`](crate::store::SecretStore::get) maps them
    /// to `Ok(None)` and delete is idempotent.
    #[error("keychain access failed: {0}")]
    Keychain(#[from] keyring::Error),

    /// A payload could not be serialized before being written.
    #[error("could not serialize {what}: {source}")]
    Serialize {
        what: Payload,
        source: serde_json::Error,
    },

    /// A stored payload did not parse back into the expected shape.
    #[error("could not deserialize {what}: {source}")]
    Deserialize {
        what: Payload,
        source: serde_json::Error,
    },
}

/// Which payload a serialization error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Credentials,
    Token,
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Credentials => f.write_str("credentials"),
            Payload::Token => f.write_str("token"),
        }
    }
}
