//! Interactive chat module
//!
//! Provides a line-editor based interactive interface where every line is
//! answered as an independent query.

mod command;
mod repl;

pub use command::ChatCommand;
pub use repl::SearchRepl;
