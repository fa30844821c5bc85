//! Web search domain.
//!
//! - [`entities::SearchHit`]: one `{title, snippet, url}` result
//! - [`entities::SearchOutcome`]: what a search returns, including the
//!   degraded "search unavailable" shape

pub mod entities;

pub use entities::{DEFAULT_NUM_RESULTS, MAX_NUM_RESULTS, MIN_NUM_RESULTS, SearchHit, SearchOutcome};
