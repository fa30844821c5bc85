//! Application layer for searchmind
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::OrchestrationParams;
pub use ports::{
    answer_provider::{AnswerProvider, ProviderError, ProviderErrorKind, ProviderSet},
    credential_store::{CredentialStore, CredentialStoreError},
    frame_sink::{FrameGate, FrameRecorder, FrameSink},
    search_tool::SearchTool,
};
pub use use_cases::orchestrate_answer::{
    AnswerOrchestrator, OrchestrationError, Submission, SubmissionOutcome,
};
pub use use_cases::present_answer::{PresentationHandle, PresentationOutcome, StreamPresenter};
