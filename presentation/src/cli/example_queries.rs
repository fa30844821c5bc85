//! Sample questions shown by `--examples` and `/examples`

use colored::Colorize;

pub const EXAMPLE_QUERIES: [&str; 4] = [
    "What are the latest developments in AI?",
    "Explain quantum computing in simple terms",
    "What's happening in the stock market today?",
    "How does climate change affect ocean currents?",
];

/// Numbered list of the example queries, one per line.
pub fn format_examples() -> String {
    let mut output = format!("{}\n", "Try asking:".cyan().bold());
    for (i, query) in EXAMPLE_QUERIES.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, query));
    }
    output
}
