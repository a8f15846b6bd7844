//! Error types for the AI collaborators.

use thiserror::Error;

/// Errors from content analysis or budget planning.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// The provider call itself failed.
    #[error("analysis provider error: {0}")]
    Provider(String),

    /// The provider answered with something the contract can't use.
    #[error("malformed analysis response: {0}")]
    Malformed(String),
}

/// Errors from video generation.
///
/// `CredentialInvalid` is a structured classification of what the original
/// provider reports as "requested entity was not found"; the orchestrator
/// matches on the variant, never on message text.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VideoGenError {
    /// The selected credential is missing or not usable for generation.
    /// Aborts the whole run and triggers the credential prompt.
    #[error("video credential missing or invalid")]
    CredentialInvalid,

    /// Any other provider failure. Non-fatal: the run continues without
    /// generated media.
    #[error("video provider error: {0}")]
    Provider(String),
}
