//! Orchestrate Answer use case.
//!
//! The facade the UI talks to. [`AnswerOrchestrator::submit`] validates the
//! query, picks a provider, calls it and replays the answer through the
//! [`StreamPresenter`]. Failures of any kind end in a single apology frame.
//!
//! Each submission owns a generation number, a [`CancellationToken`] and a
//! [`FrameGate`]. A newer submission (or [`reset`](AnswerOrchestrator::reset))
//! closes the previous gate and cancels the previous token under one lock,
//! so a superseded query never reaches the sink again and its outstanding
//! provider future is dropped.

use crate::config::OrchestrationParams;
use crate::ports::answer_provider::ProviderSet;
use crate::ports::frame_sink::{FrameGate, FrameSink};
use crate::use_cases::present_answer::{PresentationOutcome, StreamPresenter};
use searchmind_domain::provider::select;
use searchmind_domain::{
    Credential, DomainError, OrchestrationEvent, OrchestrationState, PresentationFrame,
    ProviderKind, Query,
};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors returned synchronously by [`AnswerOrchestrator::submit`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrchestrationError {
    #[error("Invalid query: {0}")]
    Validation(#[from] DomainError),
}

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The final answer frame was emitted.
    Done,
    /// The provider failed and the apology frame was emitted.
    Errored,
    /// A newer submission or a reset took over first.
    Superseded,
}

/// A running submission.
#[derive(Debug)]
pub struct Submission {
    generation: u64,
    provider: ProviderKind,
    join: JoinHandle<SubmissionOutcome>,
}

impl Submission {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The provider the selector chose for this query.
    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    pub async fn wait(self) -> SubmissionOutcome {
        match self.join.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Submission {} task failed: {}", self.generation, e);
                SubmissionOutcome::Errored
            }
        }
    }
}

#[derive(Default)]
struct Inflight {
    state: OrchestrationState,
    generation: u64,
    gate: Option<Arc<FrameGate>>,
    token: Option<CancellationToken>,
}

impl Inflight {
    /// Silence and cancel whatever is in flight.
    fn supersede(&mut self) {
        if let Some(gate) = self.gate.take() {
            gate.close();
        }
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }
}

fn lock(inner: &Mutex<Inflight>) -> MutexGuard<'_, Inflight> {
    inner.lock().unwrap_or_else(|e| e.into_inner())
}

/// Facade over provider selection, the provider call and presentation.
pub struct AnswerOrchestrator {
    providers: ProviderSet,
    presenter: StreamPresenter,
    sink: Arc<dyn FrameSink>,
    params: OrchestrationParams,
    inner: Arc<Mutex<Inflight>>,
}

impl AnswerOrchestrator {
    pub fn new(providers: ProviderSet, sink: Arc<dyn FrameSink>, params: OrchestrationParams) -> Self {
        let mut presenter = StreamPresenter::new(params.tick);
        if let Some(seed) = params.seed {
            presenter = presenter.with_seed(seed);
        }
        Self {
            providers,
            presenter,
            sink,
            params,
            inner: Arc::new(Mutex::new(Inflight::default())),
        }
    }

    pub fn state(&self) -> OrchestrationState {
        lock(&self.inner).state
    }

    pub fn params(&self) -> &OrchestrationParams {
        &self.params
    }

    /// Which provider a submission with or without a credential would use.
    pub fn provider_for(&self, has_credential: bool) -> ProviderKind {
        self.params
            .forced_provider
            .unwrap_or_else(|| select(self.params.tool_calling_enabled, has_credential))
    }

    /// Start answering `query`, superseding anything in flight.
    ///
    /// An empty query is rejected without touching the current state or the
    /// in-flight submission. Must be called from within a tokio runtime.
    pub fn submit(
        &self,
        query: &str,
        credential: Option<Credential>,
    ) -> Result<Submission, OrchestrationError> {
        let query = Query::new(query)?;
        let kind = self.provider_for(credential.is_some());
        let provider = self.providers.get(kind);

        let gate = Arc::new(FrameGate::new(Arc::clone(&self.sink)));
        let token = CancellationToken::new();

        let generation = {
            let mut inner = lock(&self.inner);
            inner.supersede();
            inner.generation += 1;
            inner.state = inner
                .state
                .transition(OrchestrationEvent::Submit)
                .unwrap_or(OrchestrationState::AwaitingAnswer);
            inner.gate = Some(Arc::clone(&gate));
            inner.token = Some(token.clone());
            inner.generation
        };

        info!(
            "Submission {} using {} provider ({} chars)",
            generation,
            kind,
            query.as_str().chars().count()
        );

        let run = Run {
            generation,
            kind,
            gate,
            token,
            inner: Arc::clone(&self.inner),
        };
        let recovery = Recovery {
            generation,
            gate: Arc::clone(&run.gate),
            inner: Arc::clone(&self.inner),
        };
        let presenter = self.presenter.clone();
        let thinking_delay = self.params.thinking_delay;
        let task = tokio::spawn(async move {
            run.execute(provider, query, credential, presenter, thinking_delay)
                .await
        });
        let join = tokio::spawn(async move {
            match task.await {
                Ok(outcome) => outcome,
                Err(e) => recovery.fail(e),
            }
        });

        Ok(Submission {
            generation,
            provider: kind,
            join,
        })
    }

    /// Abandon the current query and go back to the input view.
    pub fn reset(&self) {
        {
            let mut inner = lock(&self.inner);
            inner.supersede();
            inner.generation += 1;
            inner.state = inner
                .state
                .transition(OrchestrationEvent::Reset)
                .unwrap_or_default();
        }
        debug!("Orchestrator reset");
        self.sink.on_new_query();
    }
}

/// Ends a submission whose task died before emitting its final frame.
struct Recovery {
    generation: u64,
    gate: Arc<FrameGate>,
    inner: Arc<Mutex<Inflight>>,
}

impl Recovery {
    /// Mark the submission `Errored` and emit the apology, unless a newer
    /// submission has taken over or the run already finished.
    fn fail(self, err: tokio::task::JoinError) -> SubmissionOutcome {
        warn!("Submission {} task failed: {}", self.generation, err);
        {
            let mut inner = lock(&self.inner);
            if inner.generation != self.generation || !inner.state.is_busy() {
                return SubmissionOutcome::Superseded;
            }
            inner.state = OrchestrationState::Errored;
        }
        if self.gate.emit(PresentationFrame::apology()) {
            SubmissionOutcome::Errored
        } else {
            SubmissionOutcome::Superseded
        }
    }
}

/// The per-submission side of the facade, moved into the spawned task.
struct Run {
    generation: u64,
    kind: ProviderKind,
    gate: Arc<FrameGate>,
    token: CancellationToken,
    inner: Arc<Mutex<Inflight>>,
}

impl Run {
    async fn execute(
        self,
        provider: Arc<dyn crate::ports::answer_provider::AnswerProvider>,
        query: Query,
        credential: Option<Credential>,
        presenter: StreamPresenter,
        thinking_delay: Duration,
    ) -> SubmissionOutcome {
        if !self.gate.emit(PresentationFrame::pending()) {
            return SubmissionOutcome::Superseded;
        }

        if !thinking_delay.is_zero() {
            tokio::select! {
                biased;
                _ = self.token.cancelled() => return SubmissionOutcome::Superseded,
                _ = tokio::time::sleep(thinking_delay) => {}
            }
        }

        let result = tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!("Submission {} cancelled while awaiting provider", self.generation);
                return SubmissionOutcome::Superseded;
            }
            result = provider.answer(&query, credential.as_ref()) => result,
        };

        match result {
            Ok(answer) => {
                if !self.advance(OrchestrationEvent::AnswerReady) {
                    return SubmissionOutcome::Superseded;
                }
                info!(
                    "Submission {} answered: {} chars, {} sources",
                    self.generation,
                    answer.char_len(),
                    answer.sources().len()
                );

                let outcome = presenter
                    .play(&answer, &self.token, |frame| self.gate.emit(frame))
                    .await;
                match outcome {
                    PresentationOutcome::Completed => {
                        self.advance(OrchestrationEvent::FinalFrameEmitted);
                        SubmissionOutcome::Done
                    }
                    PresentationOutcome::Cancelled => SubmissionOutcome::Superseded,
                }
            }
            Err(err) => {
                warn!(
                    "Submission {} failed in {} provider: {}",
                    self.generation, self.kind, err
                );
                if !self.advance(OrchestrationEvent::AnswerFailed) {
                    return SubmissionOutcome::Superseded;
                }
                if self.gate.emit(PresentationFrame::apology()) {
                    SubmissionOutcome::Errored
                } else {
                    SubmissionOutcome::Superseded
                }
            }
        }
    }

    /// Apply `event` if this run is still the current generation.
    fn advance(&self, event: OrchestrationEvent) -> bool {
        let mut inner = lock(&self.inner);
        if inner.generation != self.generation {
            return false;
        }
        match inner.state.transition(event) {
            Some(next) => {
                inner.state = next;
                true
            }
            None => {
                warn!(
                    "Ignoring {:?} in state {} for submission {}",
                    event, inner.state, self.generation
                );
                false
            }
        }
    }
}
