//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question entered by the user (Value Object)
///
/// Always non-empty; surrounding whitespace is stripped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Query {
    content: String,
}

impl Query {
    /// Validate and create a new query.
    pub fn new(content: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the query text
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner text
    pub fn into_string(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Query {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Query::new(s)
    }
}

impl TryFrom<&str> for Query {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Query::new(s)
    }
}

impl From<Query> for String {
    fn from(q: Query) -> Self {
        q.content
    }
}
