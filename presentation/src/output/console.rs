//! Console rendering of presentation frames

use crate::progress::ThinkingSpinner;
use colored::Colorize;
use searchmind_application::FrameSink;
use searchmind_domain::{APOLOGY_MESSAGE, PresentationFrame};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// Whether intermediate frames are typed out or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Print each frame's new characters as they arrive
    Stream,
    /// Print only the final frame
    Plain,
}

struct ConsoleState {
    writer: Box<dyn Write + Send>,
    /// What is already on screen for the current answer.
    shown: String,
}

impl ConsoleState {
    fn write(&mut self, text: &str) {
        // A closed stdout (e.g. `| head`) is not worth failing the query for.
        let _ = self.writer.write_all(text.as_bytes());
        let _ = self.writer.flush();
    }
}

/// Renders frames to a terminal.
///
/// The pending frame starts a spinner; content frames print only the part
/// not already shown; the final frame adds the numbered source list.
pub struct ConsoleFrameSink {
    mode: RenderMode,
    spinner: ThinkingSpinner,
    state: Mutex<ConsoleState>,
}

impl ConsoleFrameSink {
    /// Render to stdout with a spinner on stderr.
    pub fn stdout(mode: RenderMode, show_progress: bool) -> Self {
        let spinner = if show_progress {
            ThinkingSpinner::new()
        } else {
            ThinkingSpinner::hidden()
        };
        Self::with_writer(mode, Box::new(std::io::stdout()), spinner)
    }

    pub fn with_writer(
        mode: RenderMode,
        writer: Box<dyn Write + Send>,
        spinner: ThinkingSpinner,
    ) -> Self {
        Self {
            mode,
            spinner,
            state: Mutex::new(ConsoleState {
                writer,
                shown: String::new(),
            }),
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn render_final(&self, state: &mut ConsoleState, frame: &PresentationFrame) {
        if frame.is_apology() {
            if !state.shown.is_empty() {
                state.write("\n");
            }
            state.write(&format!("{}\n", APOLOGY_MESSAGE.red()));
        } else {
            let rest = unshown(&state.shown, &frame.visible_content);
            state.write(&format!("{}\n", rest));
        }
        state.write(&format_sources(&frame.sources));
        state.shown.clear();
    }
}

/// The part of `content` that is not on screen yet.
///
/// Frames of one answer are prefixes of each other. Anything else starts
/// over on a fresh line.
fn unshown(shown: &str, content: &str) -> String {
    match content.strip_prefix(shown) {
        Some(rest) => rest.to_string(),
        None => format!("\n{}", content),
    }
}

impl FrameSink for ConsoleFrameSink {
    fn on_frame(&self, frame: PresentationFrame) {
        let mut state = self.lock();

        if frame.is_streaming && frame.visible_content.is_empty() {
            self.spinner.start("Searching...");
            return;
        }
        self.spinner.finish();

        if frame.is_final() {
            self.render_final(&mut state, &frame);
            return;
        }

        if self.mode == RenderMode::Stream {
            let rest = unshown(&state.shown, &frame.visible_content);
            state.write(&rest);
            state.shown = frame.visible_content;
        }
    }

    fn on_new_query(&self) {
        self.spinner.finish();
        let mut state = self.lock();
        if !state.shown.is_empty() {
            state.write("\n");
            state.shown.clear();
        }
    }
}

/// Numbered source list printed under a finished answer.
///
/// Empty when there are no sources.
pub fn format_sources(sources: &[String]) -> String {
    if sources.is_empty() {
        return String::new();
    }
    let mut output = format!("\n{}\n", "Sources:".cyan().bold());
    for (i, source) in sources.iter().enumerate() {
        output.push_str(&format!("  [{}] {}\n", i + 1, source.dimmed()));
    }
    output
}
