//! Web search backends
//!
//! Implementations of the [`SearchTool`](searchmind_application::SearchTool)
//! port. There is one backend, the DuckDuckGo Instant Answer API, which
//! needs no API key.

mod duckduckgo;

pub use duckduckgo::DuckDuckGoSearch;
