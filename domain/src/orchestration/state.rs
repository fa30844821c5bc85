//! Orchestration state machine

use serde::{Deserialize, Serialize};

/// Where the current query is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrchestrationState {
    /// Nothing submitted yet, or the UI went back to the input view.
    #[default]
    Idle,
    /// A provider call is outstanding.
    AwaitingAnswer,
    /// The answer arrived and frames are being replayed.
    Presenting,
    /// The final frame was emitted.
    Done,
    /// The provider failed and the apology frame was emitted.
    Errored,
}

/// Inputs that move the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestrationEvent {
    /// A new, valid query was submitted. Accepted from every state: a new
    /// query supersedes whatever was in flight.
    Submit,
    AnswerReady,
    AnswerFailed,
    FinalFrameEmitted,
    /// The UI asked for a fresh input view.
    Reset,
}

impl OrchestrationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrchestrationState::Idle => "idle",
            OrchestrationState::AwaitingAnswer => "awaiting_answer",
            OrchestrationState::Presenting => "presenting",
            OrchestrationState::Done => "done",
            OrchestrationState::Errored => "errored",
        }
    }

    /// Apply `event`, returning the next state, or `None` if the event is not
    /// valid in the current state.
    pub fn transition(self, event: OrchestrationEvent) -> Option<Self> {
        use OrchestrationEvent as E;
        use OrchestrationState as S;

        match (self, event) {
            (_, E::Submit) => Some(S::AwaitingAnswer),
            (_, E::Reset) => Some(S::Idle),
            (S::AwaitingAnswer, E::AnswerReady) => Some(S::Presenting),
            (S::AwaitingAnswer, E::AnswerFailed) => Some(S::Errored),
            (S::Presenting, E::FinalFrameEmitted) => Some(S::Done),
            _ => None,
        }
    }

    /// Whether a query is currently in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            OrchestrationState::AwaitingAnswer | OrchestrationState::Presenting
        )
    }

    /// Whether the last query has reached an end state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrchestrationState::Done | OrchestrationState::Errored)
    }
}

impl std::fmt::Display for OrchestrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrchestrationEvent as E;
    use OrchestrationState as S;

    #[test]
    fn happy_path() {
        let state = S::Idle;
        let state = state.transition(E::Submit).unwrap();
        assert_eq!(state, S::AwaitingAnswer);
        let state = state.transition(E::AnswerReady).unwrap();
        assert_eq!(state, S::Presenting);
        let state = state.transition(E::FinalFrameEmitted).unwrap();
        assert_eq!(state, S::Done);
        assert!(state.is_terminal());
    }

    #[test]
    fn failure_path() {
        let state = S::AwaitingAnswer.transition(E::AnswerFailed).unwrap();
        assert_eq!(state, S::Errored);
        assert!(state.is_terminal());
    }

    #[test]
    fn submit_restarts_from_any_state() {
        for state in [S::Idle, S::AwaitingAnswer, S::Presenting, S::Done, S::Errored] {
            assert_eq!(state.transition(E::Submit), Some(S::AwaitingAnswer));
        }
    }

    #[test]
    fn errored_only_reachable_from_awaiting() {
        assert_eq!(S::Idle.transition(E::AnswerFailed), None);
        assert_eq!(S::Presenting.transition(E::AnswerFailed), None);
        assert_eq!(S::Done.transition(E::AnswerFailed), None);
    }

    #[test]
    fn final_frame_only_while_presenting() {
        assert_eq!(S::AwaitingAnswer.transition(E::FinalFrameEmitted), None);
        assert_eq!(S::Errored.transition(E::FinalFrameEmitted), None);
    }

    #[test]
    fn busy_states() {
        assert!(S::AwaitingAnswer.is_busy());
        assert!(S::Presenting.is_busy());
        assert!(!S::Idle.is_busy());
        assert!(!S::Done.is_busy());
    }
}
