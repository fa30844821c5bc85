//! Present Answer use case.
//!
//! Replays a finished [`AnswerResult`] as a sequence of growing
//! [`PresentationFrame`]s so the UI can render a typing effect. Provider
//! responses are not streamed over the network; the cadence is simulated
//! here on a tokio interval.

use crate::ports::frame_sink::{FrameGate, FrameSink};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use searchmind_domain::{AnswerResult, PresentationFrame};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Largest number of characters revealed per tick.
const MAX_STEP: usize = 3;

/// Shortest tick; `tokio::time::interval` rejects a zero period.
const MIN_TICK: Duration = Duration::from_millis(1);

/// How a presentation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationOutcome {
    /// The final frame was emitted.
    Completed,
    /// Cancelled (or the gate closed) before the final frame.
    Cancelled,
}

/// Emits an answer a few characters per tick, then one final frame.
#[derive(Debug, Clone)]
pub struct StreamPresenter {
    tick: Duration,
    seed: Option<u64>,
}

impl StreamPresenter {
    /// A zero `tick` is raised to 1 ms.
    pub fn new(tick: Duration) -> Self {
        Self {
            tick: tick.max(MIN_TICK),
            seed: None,
        }
    }

    /// Fix the RNG seed so the frame sequence is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }

    /// Spawn the presentation on the current runtime.
    pub fn present(&self, result: AnswerResult, sink: Arc<dyn FrameSink>) -> PresentationHandle {
        let gate = Arc::new(FrameGate::new(sink));
        let token = CancellationToken::new();

        let presenter = self.clone();
        let task_gate = Arc::clone(&gate);
        let task_token = token.clone();
        let join = tokio::spawn(async move {
            presenter
                .play(&result, &task_token, |frame| task_gate.emit(frame))
                .await
        });

        PresentationHandle { gate, token, join }
    }

    /// Run the presentation inline.
    ///
    /// `emit` returns `false` when the receiver is gone, which ends the
    /// presentation the same way cancellation does. Every intermediate frame
    /// ends on a char boundary and carries no sources.
    pub async fn play<F>(
        &self,
        result: &AnswerResult,
        token: &CancellationToken,
        mut emit: F,
    ) -> PresentationOutcome
    where
        F: FnMut(PresentationFrame) -> bool,
    {
        let content = result.content();
        let ends: Vec<usize> = content
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();

        let mut rng = self.rng();
        let mut interval = tokio::time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;

        let mut shown = 0;
        while shown < ends.len() {
            tokio::select! {
                biased;
                _ = token.cancelled() => return PresentationOutcome::Cancelled,
                _ = interval.tick() => {}
            }

            shown = (shown + rng.gen_range(1..=MAX_STEP)).min(ends.len());
            if token.is_cancelled() || !emit(PresentationFrame::partial(&content[..ends[shown - 1]])) {
                return PresentationOutcome::Cancelled;
            }
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => return PresentationOutcome::Cancelled,
            _ = interval.tick() => {}
        }
        if token.is_cancelled() || !emit(PresentationFrame::complete(result)) {
            return PresentationOutcome::Cancelled;
        }

        debug!(
            "Presented {} chars with {} sources",
            ends.len(),
            result.sources().len()
        );
        PresentationOutcome::Completed
    }
}

impl Default for StreamPresenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(30))
    }
}

/// Handle to a spawned presentation.
pub struct PresentationHandle {
    gate: Arc<FrameGate>,
    token: CancellationToken,
    join: JoinHandle<PresentationOutcome>,
}

impl PresentationHandle {
    /// Stop emitting. No frame reaches the sink after this returns.
    pub fn cancel(&self) {
        self.gate.close();
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    pub async fn wait(self) -> PresentationOutcome {
        self.join.await.unwrap_or(PresentationOutcome::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::frame_sink::FrameRecorder;

    const TICK: Duration = Duration::from_millis(30);

    fn answer(content: &str, sources: &[&str]) -> AnswerResult {
        AnswerResult::new(content, sources.iter().map(|s| s.to_string()).collect())
    }

    #[tokio::test(start_paused = true)]
    async fn test_prefixes_grow_and_end_with_full_content() {
        let recorder = Arc::new(FrameRecorder::new());
        let result = answer("Rust is a systems programming language [1].", &["https://rust-lang.org"]);

        let handle = StreamPresenter::new(TICK)
            .with_seed(42)
            .present(result.clone(), recorder.clone());
        assert_eq!(handle.wait().await, PresentationOutcome::Completed);

        let frames = recorder.frames();
        let (last, partials) = frames.split_last().unwrap();
        assert!(!partials.is_empty());

        let mut previous = String::new();
        for frame in partials {
            assert!(frame.is_streaming);
            assert!(frame.sources.is_empty());
            assert!(frame.visible_content.starts_with(&previous));
            let added = frame.visible_content.chars().count() - previous.chars().count();
            assert!((1..=MAX_STEP).contains(&added), "step of {added} chars");
            previous = frame.visible_content.clone();
        }
        assert_eq!(previous, result.content());

        assert_eq!(*last, PresentationFrame::complete(&result));
    }

    #[tokio::test(start_paused = true)]
    async fn test_multibyte_content_splits_on_char_boundaries() {
        let recorder = Arc::new(FrameRecorder::new());
        let result = answer("héllo wörld 🌍 日本語", &[]);

        let handle = StreamPresenter::new(TICK).present(result.clone(), recorder.clone());
        assert_eq!(handle.wait().await, PresentationOutcome::Completed);

        for frame in recorder.frames() {
            assert!(result.content().starts_with(&frame.visible_content));
        }
        assert_eq!(recorder.last_frame().unwrap().visible_content, result.content());
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_seed_same_frames() {
        let result = answer("deterministic cadence for tests", &[]);

        let first = Arc::new(FrameRecorder::new());
        let second = Arc::new(FrameRecorder::new());
        let presenter = StreamPresenter::new(TICK).with_seed(7);
        presenter.present(result.clone(), first.clone()).wait().await;
        presenter.present(result, second.clone()).wait().await;

        assert_eq!(first.frames(), second.frames());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_content_emits_only_final_frame() {
        let recorder = Arc::new(FrameRecorder::new());
        let handle = StreamPresenter::new(TICK).present(AnswerResult::uncited(""), recorder.clone());
        assert_eq!(handle.wait().await, PresentationOutcome::Completed);

        let frames = recorder.frames();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_final());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_tick_is_raised_to_minimum() {
        let presenter = StreamPresenter::new(Duration::ZERO).with_seed(3);
        assert_eq!(presenter.tick(), MIN_TICK);

        let recorder = Arc::new(FrameRecorder::new());
        let handle = presenter.present(answer("Hello", &[]), recorder.clone());
        assert_eq!(handle.wait().await, PresentationOutcome::Completed);
        assert_eq!(recorder.last_frame().unwrap().visible_content, "Hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_emission() {
        let recorder = Arc::new(FrameRecorder::new());
        let result = answer(&"x".repeat(300), &["https://example.com"]);

        let handle = StreamPresenter::new(TICK).present(result, recorder.clone());
        tokio::time::sleep(TICK * 5).await;
        handle.cancel();
        let emitted = recorder.frames().len();

        assert_eq!(handle.wait().await, PresentationOutcome::Cancelled);
        tokio::time::sleep(TICK * 50).await;

        let frames = recorder.frames();
        assert_eq!(frames.len(), emitted);
        assert!(frames.iter().all(|f| f.is_streaming));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_stops_when_receiver_refuses() {
        let token = CancellationToken::new();
        let mut accepted = 0;
        let outcome = StreamPresenter::new(TICK)
            .play(&answer("a longer answer", &[]), &token, |_| {
                accepted += 1;
                accepted < 2
            })
            .await;

        assert_eq!(outcome, PresentationOutcome::Cancelled);
        assert_eq!(accepted, 2);
    }
}
