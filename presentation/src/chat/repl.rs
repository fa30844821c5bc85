//! REPL (Read-Eval-Print Loop) for interactive search

use super::command::ChatCommand;
use crate::cli::example_queries::format_examples;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use searchmind_application::{AnswerOrchestrator, SubmissionOutcome};
use searchmind_domain::Credential;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Interactive search REPL
pub struct SearchRepl {
    orchestrator: AnswerOrchestrator,
    credential: Option<Credential>,
    history_path: Option<PathBuf>,
}

/// Load line history, or run without it when the file is unusable.
fn open_history(path: &Path) -> Option<FileBackedHistory> {
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!("Cannot create history directory {}: {}", parent.display(), e);
        return None;
    }
    match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
        Ok(history) => {
            debug!("Chat history at {}", path.display());
            Some(history)
        }
        Err(e) => {
            warn!("Chat history disabled, {} is unusable: {}", path.display(), e);
            None
        }
    }
}

/// What the loop should do after a line.
enum Flow {
    Continue,
    Exit,
}

impl SearchRepl {
    pub fn new(orchestrator: AnswerOrchestrator) -> Self {
        Self {
            orchestrator,
            credential: None,
            history_path: dirs::data_dir().map(|p| p.join("searchmind").join("history.txt")),
        }
    }

    /// Search-native key sent with every query.
    pub fn with_credential(mut self, credential: Option<Credential>) -> Self {
        self.credential = credential;
        self
    }

    /// Where line history is kept; `None` disables it.
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        match self.history_path.as_deref().and_then(open_history) {
            Some(history) => editor.with_history(Box::new(history)),
            None => editor,
        }
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D.
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("searchmind".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if let Flow::Exit = self.handle_line(&line).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│             SearchMind - Chat Mode          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Provider: {}",
            self.orchestrator
                .provider_for(self.credential.is_some())
                .to_string()
                .cyan()
        );
        println!();
        print!("{}", ChatCommand::help_text());
        println!();
    }

    async fn handle_line(&self, line: &str) -> Flow {
        let line = line.trim();
        if line.is_empty() {
            return Flow::Continue;
        }

        match ChatCommand::parse(line) {
            Some(command) => self.handle_command(command),
            None => {
                self.process_question(line).await;
                Flow::Continue
            }
        }
    }

    fn handle_command(&self, command: ChatCommand) -> Flow {
        match command {
            ChatCommand::Quit => {
                println!("Bye!");
                return Flow::Exit;
            }
            ChatCommand::Help => {
                println!();
                print!("{}", ChatCommand::help_text());
                println!();
            }
            ChatCommand::New => {
                self.orchestrator.reset();
                println!("{}", "Ready for a new search.".dimmed());
            }
            ChatCommand::Examples => {
                println!();
                print!("{}", format_examples());
                println!();
            }
            ChatCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        Flow::Continue
    }

    async fn process_question(&self, question: &str) {
        println!();

        match self.orchestrator.submit(question, self.credential.clone()) {
            Ok(submission) => {
                if submission.wait().await == SubmissionOutcome::Errored {
                    eprintln!("{}", "(run with -v for details)".dimmed());
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
