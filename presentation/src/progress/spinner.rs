//! Loading spinner shown while an answer is being fetched

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// A spinner on stderr, started by the pending frame and cleared by the
/// first frame with content.
pub struct ThinkingSpinner {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl ThinkingSpinner {
    pub fn new() -> Self {
        Self {
            enabled: true,
            bar: Mutex::new(None),
        }
    }

    /// A spinner that never draws (`--quiet`, tests).
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start spinning. A second call while running only updates the message.
    pub fn start(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let mut bar = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        match bar.as_ref() {
            Some(pb) => pb.set_message(message.to_string()),
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::style());
                pb.set_message(message.to_string());
                pb.enable_steady_tick(Duration::from_millis(80));
                *bar = Some(pb);
            }
        }
    }

    /// Remove the spinner from the terminal.
    pub fn finish(&self) {
        if let Some(pb) = self.bar.lock().unwrap_or_else(|e| e.into_inner()).take() {
            pb.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.bar.lock().unwrap_or_else(|e| e.into_inner()).is_some()
    }
}

impl Default for ThinkingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ThinkingSpinner {
    fn drop(&mut self) {
        self.finish();
    }
}
