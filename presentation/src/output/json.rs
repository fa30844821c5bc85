//! JSON lines rendering of presentation frames

use searchmind_application::FrameSink;
use searchmind_domain::PresentationFrame;
use std::io::Write;
use std::sync::Mutex;

/// Writes every frame as one JSON object per line.
///
/// With `final_only` set, intermediate frames are skipped and each answer
/// produces exactly one line.
pub struct JsonFrameSink {
    final_only: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonFrameSink {
    pub fn stdout(final_only: bool) -> Self {
        Self::with_writer(final_only, Box::new(std::io::stdout()))
    }

    pub fn with_writer(final_only: bool, writer: Box<dyn Write + Send>) -> Self {
        Self {
            final_only,
            writer: Mutex::new(writer),
        }
    }
}

impl FrameSink for JsonFrameSink {
    fn on_frame(&self, frame: PresentationFrame) {
        if self.final_only && !frame.is_final() {
            return;
        }
        let Ok(line) = serde_json::to_string(&frame) else {
            return;
        };
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;
    use searchmind_domain::AnswerResult;

    #[test]
    fn test_every_frame_is_one_line() {
        let buffer = SharedBuffer::default();
        let sink = JsonFrameSink::with_writer(false, Box::new(buffer.clone()));
        sink.on_frame(PresentationFrame::pending());
        sink.on_frame(PresentationFrame::partial("4"));
        sink.on_frame(PresentationFrame::complete(&AnswerResult::new("4", vec![])));

        let output = buffer.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);

        let last: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last["visible_content"], "4");
        assert_eq!(last["is_streaming"], false);
        assert_eq!(last["sources"], serde_json::json!([]));
    }

    #[test]
    fn test_final_only() {
        let buffer = SharedBuffer::default();
        let sink = JsonFrameSink::with_writer(true, Box::new(buffer.clone()));
        sink.on_frame(PresentationFrame::pending());
        sink.on_frame(PresentationFrame::partial("He"));
        sink.on_frame(PresentationFrame::apology());

        let output = buffer.contents();
        assert_eq!(output.lines().count(), 1);
        let frame: PresentationFrame = serde_json::from_str(output.trim()).unwrap();
        assert!(frame.is_final());
    }
}
