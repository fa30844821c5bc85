//! Answer domain.
//!
//! - [`entities::AnswerResult`]: the normalized answer every provider returns
//! - [`citation`]: heuristic `[n]` marker scanning for providers without
//!   structured citation metadata

pub mod citation;
pub mod entities;

pub use citation::{citation_markers, resolve_citations};
pub use entities::AnswerResult;
