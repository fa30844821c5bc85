//! Answer providers.
//!
//! The three provider variants form a closed set ([`ProviderKind`]); which one
//! serves a query is decided once, up front, by the pure [`select`] policy.

pub mod kind;
pub mod selector;

pub use kind::ProviderKind;
pub use selector::select;
