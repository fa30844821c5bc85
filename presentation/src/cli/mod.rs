//! Command-line definitions

pub mod commands;
pub mod example_queries;
