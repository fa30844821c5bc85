//! The `web_search` tool declaration and argument parsing.

use super::entities::{ToolCall, ToolDefinition, ToolParameter};
use crate::search::{DEFAULT_NUM_RESULTS, MAX_NUM_RESULTS, MIN_NUM_RESULTS, SearchOutcome};

/// Canonical tool name for the web search tool.
pub const WEB_SEARCH: &str = "web_search";

/// Create the [`ToolDefinition`] for `web_search`.
pub fn web_search_definition() -> ToolDefinition {
    ToolDefinition::new(
        WEB_SEARCH,
        "Search the web for current information when the user asks about recent events, news, \
         current data, or when you need up-to-date information to answer their question accurately.",
    )
    .with_parameter(ToolParameter::new(
        "query",
        "The search query to find current information",
        true,
    ))
    .with_parameter(
        ToolParameter::new(
            "numResults",
            "Number of search results to return (default: 5)",
            false,
        )
        .with_type("integer")
        .with_range(MIN_NUM_RESULTS as i64, MAX_NUM_RESULTS as i64)
        .with_default(DEFAULT_NUM_RESULTS),
    )
}

/// Validated arguments of a `web_search` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSearchArgs {
    pub query: String,
    pub num_results: u8,
}

impl WebSearchArgs {
    /// Extract arguments from a model's tool call.
    ///
    /// A missing or blank `query` falls back to `fallback_query` (the user's
    /// own question); `numResults` defaults to 5 and is clamped to 1..=10.
    pub fn from_call(call: &ToolCall, fallback_query: &str) -> Self {
        let query = call
            .get_string("query")
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(fallback_query)
            .to_string();

        let num_results = call
            .get_i64("numResults")
            .map(SearchOutcome::clamp_num_results)
            .unwrap_or(DEFAULT_NUM_RESULTS);

        Self { query, num_results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_shape() {
        let def = web_search_definition();
        assert_eq!(def.name, WEB_SEARCH);
        assert_eq!(def.parameters[0].name, "query");
        assert!(def.parameters[0].required);
        assert_eq!(def.parameters[1].name, "numResults");
        assert_eq!(def.parameters[1].param_type, "integer");
        assert_eq!(def.parameters[1].minimum, Some(1));
        assert_eq!(def.parameters[1].maximum, Some(10));
    }

    #[test]
    fn test_args_from_call() {
        let call = ToolCall::new(WEB_SEARCH)
            .with_arg("query", "today's headline")
            .with_arg("numResults", 5);
        let args = WebSearchArgs::from_call(&call, "ignored");
        assert_eq!(
            args,
            WebSearchArgs {
                query: "today's headline".to_string(),
                num_results: 5
            }
        );
    }

    #[test]
    fn test_args_defaults_and_clamping() {
        let call = ToolCall::new(WEB_SEARCH).with_arg("numResults", 50);
        let args = WebSearchArgs::from_call(&call, "user question");
        assert_eq!(args.query, "user question");
        assert_eq!(args.num_results, 10);

        let call = ToolCall::new(WEB_SEARCH).with_arg("query", "  ");
        let args = WebSearchArgs::from_call(&call, "fallback");
        assert_eq!(args.query, "fallback");
        assert_eq!(args.num_results, 5);
    }
}
