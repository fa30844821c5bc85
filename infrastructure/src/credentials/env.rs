use crate::config::FileProvidersConfig;
use searchmind_application::{CredentialStore, CredentialStoreError};
use searchmind_domain::{Credential, ProviderKey};
use std::collections::HashMap;

/// Read-only store over environment variables and inline config keys.
///
/// An inline `api_key` from the config file wins over the variable.
#[derive(Debug, Default)]
pub struct EnvCredentialStore {
    vars: HashMap<ProviderKey, String>,
    inline: HashMap<ProviderKey, Credential>,
}

impl EnvCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(providers: &FileProvidersConfig) -> Self {
        let mut store = Self::new()
            .with_var(ProviderKey::Gemini, &providers.gemini.api_key_env)
            .with_var(ProviderKey::Perplexity, &providers.perplexity.api_key_env);

        for (key, inline) in [
            (ProviderKey::Gemini, &providers.gemini.api_key),
            (ProviderKey::Perplexity, &providers.perplexity.api_key),
        ] {
            if let Some(credential) = inline.as_deref().and_then(|v| Credential::new(v).ok()) {
                store.inline.insert(key, credential);
            }
        }
        store
    }

    pub fn with_var(mut self, key: ProviderKey, var: impl Into<String>) -> Self {
        self.vars.insert(key, var.into());
        self
    }
}

impl CredentialStore for EnvCredentialStore {
    fn get(&self, key: ProviderKey) -> Option<Credential> {
        if let Some(credential) = self.inline.get(&key) {
            return Some(credential.clone());
        }
        let var = self.vars.get(&key)?;
        std::env::var(var).ok().and_then(|v| Credential::new(v).ok())
    }

    fn set(&self, _key: ProviderKey, _credential: Credential) -> Result<(), CredentialStoreError> {
        Err(CredentialStoreError::ReadOnly)
    }
}
