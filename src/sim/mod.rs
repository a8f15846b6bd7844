//! In-process simulated collaborators.
//!
//! These stand in for the real analysis and generation providers in the
//! demo binary. They model latency with short sleeps and fabricate
//! plausible responses; nothing leaves the process.

use crate::ai::{
    AnalysisError, BudgetPlanner, BudgetRecommendation, ClipSuggestion, ContentAnalyzer,
    CredentialGate, VideoGenError, VideoGenerator,
};
use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Canned content analysis: three suggestions per request.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedAnalyzer;

#[async_trait]
impl ContentAnalyzer for SimulatedAnalyzer {
    async fn suggest_clips(&self, _description: &str) -> Result<Vec<ClipSuggestion>, AnalysisError> {
        sleep(Duration::from_millis(400)).await;
        Ok(vec![
            ClipSuggestion {
                title: "The 10-second rule".to_string(),
                hook: "You lose most viewers before the first cut".to_string(),
                start: "00:12".to_string(),
                end: "00:41".to_string(),
                reasoning: Some("Strong cold open with a concrete claim".to_string()),
            },
            ClipSuggestion {
                title: "Nobody reads the caption".to_string(),
                hook: "Your caption is doing nothing and here is proof".to_string(),
                start: "03:05".to_string(),
                end: "03:38".to_string(),
                reasoning: None,
            },
            ClipSuggestion {
                title: "Post at the wrong time".to_string(),
                hook: "The best posting hour is the one everyone avoids".to_string(),
                start: "07:44".to_string(),
                end: "08:12".to_string(),
                reasoning: None,
            },
        ])
    }
}

/// Fabricates a local media reference after a longer generation pause.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedVideoGenerator;

#[async_trait]
impl VideoGenerator for SimulatedVideoGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, VideoGenError> {
        sleep(Duration::from_millis(800)).await;
        let token: String = rand::thread_rng()
            .sample_iter(Alphanumeric)
            .take(10)
            .map(char::from)
            .collect();
        Ok(Some(format!("sim://media/{}.mp4", token.to_lowercase())))
    }
}

/// A credential gate with a fixed in-memory answer. The selection prompt
/// just logs; in a real shell it would open the key picker.
#[derive(Debug)]
pub struct StaticCredentialGate {
    available: AtomicBool,
}

impl StaticCredentialGate {
    pub fn new(available: bool) -> Self {
        Self {
            available: AtomicBool::new(available),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }
}

#[async_trait]
impl CredentialGate for StaticCredentialGate {
    async fn has_credential(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn request_selection(&self) {
        info!("Credential selection requested");
    }
}

/// Splits the plausible budget evenly-ish across the big platforms.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedPlanner;

#[async_trait]
impl BudgetPlanner for SimulatedPlanner {
    async fn plan_budget(&self, _stats: &str) -> Result<Vec<BudgetRecommendation>, AnalysisError> {
        sleep(Duration::from_millis(300)).await;
        Ok(vec![
            BudgetRecommendation {
                platform: "youtube".to_string(),
                suggested_budget: 1_200.0,
                rationale: "Longest watch time per follower".to_string(),
            },
            BudgetRecommendation {
                platform: "tiktok".to_string(),
                suggested_budget: 900.0,
                rationale: "Cheapest reach for short-form".to_string(),
            },
            BudgetRecommendation {
                platform: "instagram".to_string(),
                suggested_budget: 400.0,
                rationale: "Retargeting pool only".to_string(),
            },
        ])
    }
}
