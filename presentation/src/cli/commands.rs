//! CLI command definitions

use clap::{Parser, ValueEnum};
use searchmind_domain::ProviderKind;
use std::path::PathBuf;

/// How answers are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Type the answer out as it arrives
    Stream,
    /// Print only the finished answer
    Plain,
    /// One JSON object per presentation frame
    Json,
}

impl From<OutputFormat> for searchmind_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Stream => searchmind_domain::OutputFormat::Stream,
            OutputFormat::Plain => searchmind_domain::OutputFormat::Plain,
            OutputFormat::Json => searchmind_domain::OutputFormat::Json,
        }
    }
}

/// Provider override for `--provider`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    /// Gemini without tools
    DirectAnswer,
    /// Gemini with one web_search round-trip
    ToolCalling,
    /// Perplexity online model
    SearchNative,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::DirectAnswer => ProviderKind::DirectAnswer,
            ProviderArg::ToolCalling => ProviderKind::ToolCalling,
            ProviderArg::SearchNative => ProviderKind::SearchNative,
        }
    }
}

/// CLI arguments for searchmind
#[derive(Parser, Debug)]
#[command(name = "searchmind")]
#[command(author, version, about = "Ask anything, get answers with real-time information and sources")]
#[command(long_about = r#"
SearchMind answers a question with an LLM and shows the answer as it is typed out,
followed by its sources.

The answer path is picked per question:
1. Search-native: a Perplexity key is available (--perplexity-key or a stored key)
2. Tool-calling:  Gemini with one DuckDuckGo web search (default)
3. Direct answer: Gemini alone (--no-web-search)

The Gemini key is read from GEMINI_API_KEY, [providers.gemini] api_key,
or the credential store.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./searchmind.toml   Project-level config
3. ~/.config/searchmind/config.toml   Global config

Example:
  searchmind "What is 2+2?"
  searchmind --no-web-search "Explain quantum computing in simple terms"
  searchmind --perplexity-key pplx-... --remember-key "Latest AI news?"
  searchmind --chat
"#)]
pub struct Cli {
    /// The question to answer (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Force a provider instead of picking one from the available keys
    #[arg(long, value_enum, value_name = "PROVIDER")]
    pub provider: Option<ProviderArg>,

    /// Perplexity API key for the search-native provider
    #[arg(long, value_name = "KEY")]
    pub perplexity_key: Option<String>,

    /// Store the --perplexity-key value for later runs
    #[arg(long, requires = "perplexity_key")]
    pub remember_key: bool,

    /// Answer without the web_search tool
    #[arg(long)]
    pub no_web_search: bool,

    /// Output format (defaults to [output] format, then stream)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print some example questions and exit
    #[arg(long)]
    pub examples: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_with_defaults() {
        let cli = Cli::try_parse_from(["searchmind", "What is 2+2?"]).unwrap();
        assert_eq!(cli.question.as_deref(), Some("What is 2+2?"));
        assert!(!cli.chat);
        assert!(cli.output.is_none());
        assert!(cli.provider.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_provider_and_output_flags() {
        let cli = Cli::try_parse_from([
            "searchmind",
            "--provider",
            "search-native",
            "--output",
            "json",
            "-vv",
            "q",
        ])
        .unwrap();
        assert_eq!(cli.provider, Some(ProviderArg::SearchNative));
        assert_eq!(
            ProviderKind::from(cli.provider.unwrap()),
            ProviderKind::SearchNative
        );
        assert_eq!(
            searchmind_domain::OutputFormat::from(cli.output.unwrap()),
            searchmind_domain::OutputFormat::Json
        );
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_remember_key_requires_key() {
        assert!(Cli::try_parse_from(["searchmind", "--remember-key", "q"]).is_err());
        let cli =
            Cli::try_parse_from(["searchmind", "--perplexity-key", "pplx", "--remember-key", "q"])
                .unwrap();
        assert!(cli.remember_key);
        assert_eq!(cli.perplexity_key.as_deref(), Some("pplx"));
    }

    #[test]
    fn test_unknown_provider_rejected() {
        assert!(Cli::try_parse_from(["searchmind", "--provider", "bing", "q"]).is_err());
    }
}
