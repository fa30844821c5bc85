use searchmind_application::{CredentialStore, CredentialStoreError};
use searchmind_domain::{Credential, ProviderKey};
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local credentials, gone on exit.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    keys: RwLock<HashMap<ProviderKey, Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: ProviderKey) -> Option<Credential> {
        self.keys
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key)
            .cloned()
    }

    fn set(&self, key: ProviderKey, credential: Credential) -> Result<(), CredentialStoreError> {
        self.keys
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, credential);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let store = MemoryCredentialStore::new();
        assert!(store.get(ProviderKey::Perplexity).is_none());

        store
            .set(ProviderKey::Perplexity, Credential::new("pplx-1").unwrap())
            .unwrap();
        store
            .set(ProviderKey::Perplexity, Credential::new("pplx-2").unwrap())
            .unwrap();

        assert_eq!(store.get(ProviderKey::Perplexity).unwrap().expose(), "pplx-2");
        assert!(store.get(ProviderKey::Gemini).is_none());
    }
}
