//! Simulated streaming.
//!
//! [`frame::PresentationFrame`] is one snapshot of a partially revealed answer.
//! The presenter in the application layer produces them; UIs consume them.

pub mod frame;

pub use frame::{APOLOGY_MESSAGE, PresentationFrame};
