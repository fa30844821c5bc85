//! Frame sink port
//!
//! The UI boundary: everything the user sees arrives as a
//! [`PresentationFrame`].

use searchmind_domain::PresentationFrame;
use std::sync::{Arc, Mutex, MutexGuard};

/// Receives presentation frames.
///
/// Implementations live in the presentation layer (console, JSON, etc.)
pub trait FrameSink: Send + Sync {
    /// Called for every frame, in emission order.
    fn on_frame(&self, frame: PresentationFrame);

    /// Called when the UI goes back to a fresh input view.
    fn on_new_query(&self) {}
}

/// A closable forwarder in front of a [`FrameSink`].
///
/// Each submission gets its own gate. Closing it under the same lock that
/// emission takes guarantees no frame passes after `close` returns.
pub struct FrameGate {
    sink: Mutex<Option<Arc<dyn FrameSink>>>,
}

impl FrameGate {
    pub fn new(sink: Arc<dyn FrameSink>) -> Self {
        Self {
            sink: Mutex::new(Some(sink)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<dyn FrameSink>>> {
        self.sink.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Forward a frame. Returns `false` if the gate is closed.
    pub fn emit(&self, frame: PresentationFrame) -> bool {
        let guard = self.lock();
        match guard.as_ref() {
            Some(sink) => {
                sink.on_frame(frame);
                true
            }
            None => false,
        }
    }

    pub fn close(&self) {
        self.lock().take();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }
}

/// Sink that keeps every frame it receives.
///
/// Used by the JSON output mode and by tests.
#[derive(Default)]
pub struct FrameRecorder {
    frames: Mutex<Vec<PresentationFrame>>,
    new_queries: Mutex<usize>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<PresentationFrame> {
        self.frames.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last_frame(&self) -> Option<PresentationFrame> {
        self.frames
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn new_query_count(&self) -> usize {
        *self.new_queries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FrameSink for FrameRecorder {
    fn on_frame(&self, frame: PresentationFrame) {
        self.frames
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(frame);
    }

    fn on_new_query(&self) {
        *self.new_queries.lock().unwrap_or_else(|e| e.into_inner()) += 1;
    }
}
