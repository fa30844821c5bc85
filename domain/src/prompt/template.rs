//! Prompt templates for the answer providers

/// Templates for the fixed instructions each provider sends
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction wrapping the question for the direct and tool-calling paths
    pub fn answer_query(question: &str) -> String {
        format!(
            r#"You are an AI search assistant similar to Perplexity. Answer the following question with detailed, accurate, and up-to-date information. Provide comprehensive explanations and include relevant context. If you mention specific facts, data, or recent events, try to be as accurate as possible.

Question: {}

Please provide a thorough, well-structured response that directly answers the question."#,
            question
        )
    }

    /// Extra guidance appended when the `web_search` tool is declared
    pub fn tool_guidance() -> &'static str {
        "If the question concerns recent events, news, or current data, call the web_search tool \
         before answering and base your answer on its results."
    }

    /// System prompt for the search-native chat completion
    pub fn search_native_system() -> &'static str {
        r#"You are an AI search assistant. Provide comprehensive, accurate, and up-to-date information with relevant sources. Structure your response clearly and include citations when referencing specific facts or recent events."#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_query_embeds_question() {
        let prompt = PromptTemplate::answer_query("What is 2+2?");
        assert!(prompt.contains("Question: What is 2+2?"));
        assert!(prompt.starts_with("You are an AI search assistant"));
    }

    #[test]
    fn test_search_native_system_mentions_citations() {
        assert!(PromptTemplate::search_native_system().contains("citations"));
    }
}
