//! Slash commands understood by the chat REPL

/// A parsed `/command` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Help,
    /// Drop the current answer and start over
    New,
    Examples,
    Quit,
    Unknown(String),
}

impl ChatCommand {
    /// Parse a line starting with `/`. Returns `None` for ordinary input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        let name = line.split_whitespace().next().unwrap_or(line);
        Some(match name {
            "/help" | "/h" | "/?" => ChatCommand::Help,
            "/new" | "/clear" => ChatCommand::New,
            "/examples" => ChatCommand::Examples,
            "/quit" | "/exit" | "/q" => ChatCommand::Quit,
            other => ChatCommand::Unknown(other.to_string()),
        })
    }

    pub fn help_text() -> &'static str {
        "Commands:\n  /help, /h, /?     - Show this help\n  /new              - Start a fresh search\n  /examples         - Show example questions\n  /quit, /exit, /q  - Exit chat\n"
    }
}
