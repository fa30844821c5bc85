//! Configuration file loading for searchmind
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SEARCHMIND_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./searchmind.toml` or `./.searchmind.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/searchmind/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileGeminiConfig, FileOutputConfig, FilePerplexityConfig,
    FilePresentationConfig, FileProvidersConfig, FileSearchConfig,
};
pub use loader::ConfigLoader;
