use searchmind_application::{CredentialStore, CredentialStoreError};
use searchmind_domain::{Credential, ProviderKey};
use std::sync::Arc;

/// Consults stores in order.
///
/// `get` returns the first hit; `set` writes to the first store that is
/// not read-only.
#[derive(Default)]
pub struct LayeredCredentialStore {
    layers: Vec<Arc<dyn CredentialStore>>,
}

impl LayeredCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.layers.push(store);
        self
    }
}

impl CredentialStore for LayeredCredentialStore {
    fn get(&self, key: ProviderKey) -> Option<Credential> {
        self.layers.iter().find_map(|store| store.get(key))
    }

    fn set(&self, key: ProviderKey, credential: Credential) -> Result<(), CredentialStoreError> {
        for store in &self.layers {
            match store.set(key, credential.clone()) {
                Err(CredentialStoreError::ReadOnly) => continue,
                other => return other,
            }
        }
        Err(CredentialStoreError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{EnvCredentialStore, MemoryCredentialStore};

    #[test]
    fn test_first_hit_wins() {
        let front = Arc::new(MemoryCredentialStore::new());
        let back = Arc::new(MemoryCredentialStore::new());
        back.set(ProviderKey::Perplexity, Credential::new("back").unwrap())
            .unwrap();

        let store = LayeredCredentialStore::new()
            .with_layer(front.clone())
            .with_layer(back);
        assert_eq!(store.get(ProviderKey::Perplexity).unwrap().expose(), "back");

        front
            .set(ProviderKey::Perplexity, Credential::new("front").unwrap())
            .unwrap();
        assert_eq!(store.get(ProviderKey::Perplexity).unwrap().expose(), "front");
    }

    #[test]
    fn test_set_skips_read_only_layers() {
        let memory = Arc::new(MemoryCredentialStore::new());
        let store = LayeredCredentialStore::new()
            .with_layer(Arc::new(EnvCredentialStore::new()))
            .with_layer(memory.clone());

        store
            .set(ProviderKey::Gemini, Credential::new("g").unwrap())
            .unwrap();
        assert_eq!(memory.get(ProviderKey::Gemini).unwrap().expose(), "g");
    }

    #[test]
    fn test_all_read_only() {
        let store = LayeredCredentialStore::new().with_layer(Arc::new(EnvCredentialStore::new()));
        assert!(matches!(
            store.set(ProviderKey::Gemini, Credential::new("g").unwrap()),
            Err(CredentialStoreError::ReadOnly)
        ));
    }
}
