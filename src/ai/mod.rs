//! Collaborator contracts for the AI-backed operations the pipeline
//! consumes.
//!
//! The engine never talks to a real provider; these traits are the seams
//! where one would plug in. The pipeline only depends on the contracts:
//!
//! - [`ContentAnalyzer`]: free-text description in, ordered clip
//!   suggestions out.
//! - [`VideoGenerator`]: short prompt in, optional media reference out,
//!   with a structured credential failure the orchestrator must react to.
//! - [`CredentialGate`]: gates every job trigger and surfaces the
//!   credential-selection prompt to the surrounding shell.
//! - [`BudgetPlanner`]: campaign stats in, per-platform budget
//!   recommendations out.
//!
//! See [`mock`] for expectation-queue test doubles and [`crate::sim`] for
//! the in-process implementations used by the demo binary.

pub mod error;
pub mod mock;

pub use error::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One suggested short-form clip from content analysis.
///
/// `start`/`end` are opaque timestamp labels; the core never parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipSuggestion {
    pub title: String,
    pub hook: String,
    pub start: String,
    pub end: String,
    /// Provider rationale; carried through but unused by the pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// One entry of a suggested ad-budget allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecommendation {
    pub platform: String,
    pub suggested_budget: f64,
    pub rationale: String,
}

/// Analyzes content metadata and suggests clips to cut.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Returns an ordered list of suggestions. Any error aborts the run
    /// that requested it.
    async fn suggest_clips(&self, description: &str) -> Result<Vec<ClipSuggestion>, AnalysisError>;
}

/// Generates a short video for a text prompt.
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    /// `Ok(Some)` is a resolvable media reference, `Ok(None)` means the
    /// provider produced nothing usable. [`VideoGenError::CredentialInvalid`]
    /// is the one failure the orchestrator must not swallow.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, VideoGenError>;
}

/// Availability check and selection prompt for the video credential.
#[async_trait]
pub trait CredentialGate: Send + Sync {
    /// Whether a usable credential is currently selected.
    async fn has_credential(&self) -> bool;

    /// Asks the surrounding shell to collect a credential. Fire-and-forget;
    /// the core never waits for the outcome.
    async fn request_selection(&self);
}

/// Suggests an ad-budget allocation across platforms.
#[async_trait]
pub trait BudgetPlanner: Send + Sync {
    async fn plan_budget(&self, stats: &str) -> Result<Vec<BudgetRecommendation>, AnalysisError>;
}
