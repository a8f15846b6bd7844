//! Error types for the studio store.

use thiserror::Error;

/// Errors that can occur while talking to the store actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The store's request channel is closed.
    #[error("Store closed")]
    ActorClosed,

    /// The store dropped the response channel before answering.
    #[error("Store dropped response channel")]
    ActorDropped,

    /// No job with the given id.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// No account with the given id.
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// A pipeline is already running; new jobs are rejected until it
    /// completes or resets.
    #[error("Pipeline busy: job {0} is still running")]
    PipelineBusy(String),
}
