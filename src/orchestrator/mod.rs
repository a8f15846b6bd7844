//! The job orchestrator: drives one job at a time through the fixed phase
//! sequence, charging fees and attaching clips as it goes.
//!
//! The phase sequence is
//! `idle → analyzing → clipping → generating_visuals → exporting → posting
//! → completed`, with no skipping and no branching except the failure
//! exit back to `idle`. Each transition and its fee are one store message,
//! so observers never see one without the other. Collaborator calls are
//! awaited without a bounding timeout; a hung collaborator stalls that job
//! indefinitely.

pub mod error;
pub mod scheduler;

pub use error::*;

use crate::ai::{ClipSuggestion, ContentAnalyzer, CredentialGate, VideoGenError, VideoGenerator};
use crate::config::EngineConfig;
use crate::metrics::EngagementSimulator;
use crate::model::{Clip, JobCreate, JobStatus, TransactionKind};
use crate::store::{Fee, StoreClient, StoreError};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

const ANALYSIS_FEE_LABEL: &str = "AI analysis fee";
const VISUAL_FEE_LABEL: &str = "Visual generation fee";
const RENDER_FEE_LABEL: &str = "Render server credits";

/// Drives jobs through the automation pipeline.
///
/// Cheap to clone; clones share the same store and collaborators. One
/// phase-advancement task runs per opened job, and the store's pipeline
/// claim keeps the system at one active job overall.
#[derive(Clone)]
pub struct Orchestrator {
    store: StoreClient,
    analyzer: Arc<dyn ContentAnalyzer>,
    video: Arc<dyn VideoGenerator>,
    gate: Arc<dyn CredentialGate>,
    metrics: Arc<dyn EngagementSimulator>,
    config: Arc<EngineConfig>,
}

impl Orchestrator {
    pub fn new(
        store: StoreClient,
        analyzer: Arc<dyn ContentAnalyzer>,
        video: Arc<dyn VideoGenerator>,
        gate: Arc<dyn CredentialGate>,
        metrics: Arc<dyn EngagementSimulator>,
        config: Arc<EngineConfig>,
    ) -> Self {
        Self {
            store,
            analyzer,
            video,
            gate,
            metrics,
            config,
        }
    }

    /// Triggers a job for `source_url` and begins phase advancement for it.
    ///
    /// Preconditions, checked in order: a usable credential (otherwise the
    /// selection prompt is surfaced and no job is created), and no job
    /// currently mid-pipeline (otherwise the trigger is rejected).
    #[instrument(skip(self))]
    pub async fn start_job(&self, source_url: &str) -> Result<String, TriggerError> {
        if !self.gate.has_credential().await {
            info!("No credential selected, surfacing prompt");
            self.gate.request_selection().await;
            return Err(TriggerError::CredentialRequired);
        }

        let job = match self
            .store
            .open_job(JobCreate {
                source_url: source_url.to_string(),
            })
            .await
        {
            Ok(job) => job,
            Err(StoreError::PipelineBusy(active)) => {
                return Err(TriggerError::PipelineBusy(active))
            }
            Err(err) => return Err(TriggerError::Store(err)),
        };

        info!(job_id = %job.id, title = %job.title, "Job triggered");
        let pipeline = self.clone();
        let job_id = job.id.clone();
        tokio::spawn(async move { pipeline.run_pipeline(job_id).await });
        Ok(job.id)
    }

    /// Runs one job's pipeline to completion or failure. Failures are
    /// isolated here: the job resets to idle and the engine keeps running.
    async fn run_pipeline(&self, job_id: String) {
        match self.advance(&job_id).await {
            Ok(()) => info!(job_id = %job_id, "Pipeline completed"),
            Err(PipelineError::CredentialRequired) => {
                warn!(job_id = %job_id, "Run aborted, credential required");
                self.abandon(&job_id).await;
            }
            Err(err) => {
                error!(job_id = %job_id, error = %err, "Run failed");
                self.abandon(&job_id).await;
            }
        }
    }

    async fn advance(&self, job_id: &str) -> Result<(), PipelineError> {
        let fees = &self.config.fees;
        let delays = &self.config.delays;

        self.store
            .advance_job(
                job_id.to_string(),
                JobStatus::Analyzing,
                10,
                Some(Fee {
                    label: ANALYSIS_FEE_LABEL.to_string(),
                    amount: fees.analysis,
                }),
            )
            .await?;
        let description = format!("Processing new content for job {}", job_id);
        let suggestions = self.analyzer.suggest_clips(&description).await?;

        self.store
            .advance_job(job_id.to_string(), JobStatus::Clipping, 30, None)
            .await?;
        sleep(delays.clipping).await;

        self.store
            .advance_job(
                job_id.to_string(),
                JobStatus::GeneratingVisuals,
                50,
                Some(Fee {
                    label: VISUAL_FEE_LABEL.to_string(),
                    amount: fees.visual_generation,
                }),
            )
            .await?;
        // Only the first suggestion gets generated media; the fee above is
        // charged before the call and is sunk if the call fails.
        let media_url = match suggestions.first() {
            Some(first) => match self.video.generate(&first.hook).await {
                Ok(url) => url,
                Err(VideoGenError::CredentialInvalid) => {
                    self.gate.request_selection().await;
                    return Err(PipelineError::CredentialRequired);
                }
                Err(err) => {
                    warn!(job_id = %job_id, error = %err, "Video generation failed, continuing without media");
                    None
                }
            },
            None => None,
        };
        let clips = self.build_clips(job_id, &suggestions, media_url);

        self.store
            .advance_job(
                job_id.to_string(),
                JobStatus::Exporting,
                80,
                Some(Fee {
                    label: RENDER_FEE_LABEL.to_string(),
                    amount: fees.render_credits,
                }),
            )
            .await?;
        sleep(delays.exporting).await;

        self.store
            .advance_job(job_id.to_string(), JobStatus::Posting, 95, None)
            .await?;
        sleep(delays.posting).await;

        self.store.complete_job(job_id.to_string(), clips).await?;
        self.schedule_payout(job_id);
        Ok(())
    }

    /// One clip per suggestion; only the first carries the media
    /// reference, when there is one.
    fn build_clips(
        &self,
        job_id: &str,
        suggestions: &[ClipSuggestion],
        media_url: Option<String>,
    ) -> Vec<Clip> {
        suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| Clip {
                id: format!("{}_clip_{}", job_id, i + 1),
                title: s.title.clone(),
                hook: s.hook.clone(),
                start: s.start.clone(),
                end: s.end.clone(),
                views: self.metrics.clip_views(),
                likes: self.metrics.clip_likes(),
                revenue: self.metrics.clip_revenue(),
                media_url: if i == 0 { media_url.clone() } else { None },
            })
            .collect()
    }

    /// Schedules the completed job's ad revenue. Detached on purpose: once
    /// scheduled it is not cancellable and lands exactly once.
    fn schedule_payout(&self, job_id: &str) {
        let store = self.store.clone();
        let delay = self.config.delays.payout;
        let label = format!("Revenue from job {}", job_id);
        let amount = self.metrics.ad_revenue();
        tokio::spawn(async move {
            sleep(delay).await;
            match store
                .record_transaction(label, amount, TransactionKind::Income)
                .await
            {
                Ok(txn) => info!(txn_id = %txn.id, amount, "Job revenue recorded"),
                Err(err) => warn!(error = %err, "Failed to record job revenue"),
            }
        });
    }

    async fn abandon(&self, job_id: &str) {
        if let Err(err) = self.store.reset_job(job_id.to_string()).await {
            error!(job_id = %job_id, error = %err, "Failed to reset job");
        }
    }
}
