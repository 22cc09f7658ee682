pub mod credentials;
pub mod error;
pub mod store;
pub mod token;

pub use credentials::{CredentialCache, CredentialsProvider};
pub use error::Error;
pub use store::SecretStore;
pub use token::{OAuthToken, TokenStore};
