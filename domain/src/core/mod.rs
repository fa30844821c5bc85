//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`]: a validated, trimmed user question
//! - [`credential::Credential`]: an opaque provider-scoped secret
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod query;
