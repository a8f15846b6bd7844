//! Error types for the job orchestrator.

use crate::ai::AnalysisError;
use crate::store::StoreError;
use thiserror::Error;

/// Why a job trigger was refused. No job is created in either case.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TriggerError {
    /// No usable video credential is selected; the credential prompt has
    /// been surfaced to the shell.
    #[error("no video credential selected")]
    CredentialRequired,

    /// Another job is mid-pipeline; triggers are rejected, not queued.
    #[error("pipeline busy: job {0} is still running")]
    PipelineBusy(String),

    /// The store could not be reached.
    #[error(transparent)]
    Store(StoreError),
}

/// Why a running pipeline was abandoned. The job is reset to idle; fees
/// charged before the failure point stay charged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PipelineError {
    /// Video generation reported an invalid credential. Distinguished so
    /// the run aborts and the shell is prompted; every other generation
    /// failure degrades to a clip without media.
    #[error("video credential invalid, operator intervention required")]
    CredentialRequired,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
