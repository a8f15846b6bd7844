//! # Collaborator Mocks
//!
//! Expectation-queue test doubles for the AI contracts.
//!
//! Each mock holds a queue of scripted responses. Calls pop the queue in
//! order; a call with an empty queue panics, and [`verify`](MockAnalyzer::verify)
//! panics if scripted responses were never consumed.
//!
//! # Example
//! ```ignore
//! let analyzer = Arc::new(MockAnalyzer::new());
//! analyzer.expect_suggest_clips().return_ok(suggestions);
//!
//! // Use the mock through the trait...
//! analyzer.verify(); // Ensures every scripted response was consumed
//! ```

use crate::ai::{
    AnalysisError, BudgetPlanner, BudgetRecommendation, ClipSuggestion, ContentAnalyzer,
    CredentialGate, VideoGenError, VideoGenerator,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Builder that scripts the next response for one mock call.
pub struct ResponseBuilder<'a, T, E> {
    queue: &'a Mutex<VecDeque<Result<T, E>>>,
}

impl<'a, T, E> ResponseBuilder<'a, T, E> {
    /// Scripts a successful response.
    pub fn return_ok(self, value: T) {
        self.queue.lock().unwrap().push_back(Ok(value));
    }

    /// Scripts an error response.
    pub fn return_err(self, error: E) {
        self.queue.lock().unwrap().push_back(Err(error));
    }
}

/// Mock [`ContentAnalyzer`] with scripted responses and request capture.
#[derive(Default)]
pub struct MockAnalyzer {
    responses: Mutex<VecDeque<Result<Vec<ClipSuggestion>, AnalysisError>>>,
    requests: Mutex<Vec<String>>,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one `suggest_clips` call.
    pub fn expect_suggest_clips(&self) -> ResponseBuilder<'_, Vec<ClipSuggestion>, AnalysisError> {
        ResponseBuilder {
            queue: &self.responses,
        }
    }

    /// The descriptions received so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Panics unless every scripted response was consumed.
    pub fn verify(&self) {
        let remaining = self.responses.lock().unwrap().len();
        if remaining > 0 {
            panic!(
                "MockAnalyzer: {} scripted responses were never consumed",
                remaining
            );
        }
    }
}

#[async_trait]
impl ContentAnalyzer for MockAnalyzer {
    async fn suggest_clips(&self, description: &str) -> Result<Vec<ClipSuggestion>, AnalysisError> {
        self.requests.lock().unwrap().push(description.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockAnalyzer: unexpected suggest_clips call")
    }
}

/// Mock [`VideoGenerator`] with scripted responses and prompt capture.
#[derive(Default)]
pub struct MockVideoGenerator {
    responses: Mutex<VecDeque<Result<Option<String>, VideoGenError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockVideoGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one `generate` call.
    pub fn expect_generate(&self) -> ResponseBuilder<'_, Option<String>, VideoGenError> {
        ResponseBuilder {
            queue: &self.responses,
        }
    }

    /// The prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Panics unless every scripted response was consumed.
    pub fn verify(&self) {
        let remaining = self.responses.lock().unwrap().len();
        if remaining > 0 {
            panic!(
                "MockVideoGenerator: {} scripted responses were never consumed",
                remaining
            );
        }
    }
}

#[async_trait]
impl VideoGenerator for MockVideoGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, VideoGenError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockVideoGenerator: unexpected generate call")
    }
}

/// Mock [`CredentialGate`] with a switchable answer and a prompt counter.
pub struct MockCredentialGate {
    available: AtomicBool,
    prompts: AtomicUsize,
}

impl MockCredentialGate {
    /// A gate that reports a usable credential.
    pub fn available() -> Self {
        Self {
            available: AtomicBool::new(true),
            prompts: AtomicUsize::new(0),
        }
    }

    /// A gate that reports no credential.
    pub fn unavailable() -> Self {
        Self {
            available: AtomicBool::new(false),
            prompts: AtomicUsize::new(0),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// How many times the credential-selection prompt was requested.
    pub fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialGate for MockCredentialGate {
    async fn has_credential(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn request_selection(&self) {
        self.prompts.fetch_add(1, Ordering::SeqCst);
    }
}

/// Mock [`BudgetPlanner`] with scripted responses.
#[derive(Default)]
pub struct MockPlanner {
    responses: Mutex<VecDeque<Result<Vec<BudgetRecommendation>, AnalysisError>>>,
}

impl MockPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one `plan_budget` call.
    pub fn expect_plan_budget(
        &self,
    ) -> ResponseBuilder<'_, Vec<BudgetRecommendation>, AnalysisError> {
        ResponseBuilder {
            queue: &self.responses,
        }
    }

    /// Panics unless every scripted response was consumed.
    pub fn verify(&self) {
        let remaining = self.responses.lock().unwrap().len();
        if remaining > 0 {
            panic!(
                "MockPlanner: {} scripted responses were never consumed",
                remaining
            );
        }
    }
}

#[async_trait]
impl BudgetPlanner for MockPlanner {
    async fn plan_budget(&self, _stats: &str) -> Result<Vec<BudgetRecommendation>, AnalysisError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockPlanner: unexpected plan_budget call")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(title: &str) -> ClipSuggestion {
        ClipSuggestion {
            title: title.to_string(),
            hook: "hook".to_string(),
            start: "00:00".to_string(),
            end: "00:30".to_string(),
            reasoning: None,
        }
    }

    #[tokio::test]
    async fn mock_analyzer_pops_responses_in_order() {
        let analyzer = MockAnalyzer::new();
        analyzer
            .expect_suggest_clips()
            .return_ok(vec![suggestion("first")]);
        analyzer
            .expect_suggest_clips()
            .return_err(AnalysisError::Provider("down".to_string()));

        let first = analyzer.suggest_clips("a").await.unwrap();
        assert_eq!(first[0].title, "first");

        let second = analyzer.suggest_clips("b").await;
        assert_eq!(second, Err(AnalysisError::Provider("down".to_string())));

        assert_eq!(analyzer.requests(), vec!["a", "b"]);
        analyzer.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "never consumed")]
    async fn verify_panics_on_unconsumed_responses() {
        let generator = MockVideoGenerator::new();
        generator.expect_generate().return_ok(None);
        generator.verify();
    }

    #[tokio::test]
    async fn mock_gate_counts_prompts() {
        let gate = MockCredentialGate::unavailable();
        assert!(!gate.has_credential().await);
        gate.request_selection().await;
        gate.request_selection().await;
        assert_eq!(gate.prompt_count(), 2);

        gate.set_available(true);
        assert!(gate.has_credential().await);
    }
}
