//! Credential value object and provider keys

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which provider family a credential belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKey {
    /// Gemini (Direct-Answer and Tool-Calling adapters)
    Gemini,
    /// Perplexity (Search-Native adapter)
    Perplexity,
}

impl ProviderKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKey::Gemini => "gemini",
            ProviderKey::Perplexity => "perplexity",
        }
    }
}

impl std::fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKey::Gemini),
            "perplexity" | "search-native" => Ok(ProviderKey::Perplexity),
            other => Err(DomainError::UnknownProviderKey(other.to_string())),
        }
    }
}

/// An opaque API key.
///
/// The value never appears in `Debug` or `Display` output, so credentials can
/// travel through structs that get logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self(value))
    }

    /// Expose the raw secret. Only HTTP adapters should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}
