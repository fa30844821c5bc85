//! Credential store port
//!
//! Where per-provider API keys are kept between requests.

use searchmind_domain::{Credential, ProviderKey};
use thiserror::Error;

/// Errors from persisting a credential
#[derive(Error, Debug)]
pub enum CredentialStoreError {
    #[error("Credential store is read-only")]
    ReadOnly,

    #[error("Credential store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credential store serialization error: {0}")]
    Serialization(String),
}

/// Keyed credential storage.
///
/// Reads never fail; a store that cannot be read simply has no credential.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: ProviderKey) -> Option<Credential>;

    fn set(&self, key: ProviderKey, credential: Credential) -> Result<(), CredentialStoreError>;
}
