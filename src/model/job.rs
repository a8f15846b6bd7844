use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The fixed, ordered phase set of the automation pipeline.
///
/// A job only ever moves forward through this sequence, one phase at a
/// time, or resets to [`Idle`](JobStatus::Idle) when a run is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Idle,
    Analyzing,
    Clipping,
    GeneratingVisuals,
    Exporting,
    Posting,
    Completed,
}

impl Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobStatus::Idle => "idle",
            JobStatus::Analyzing => "analyzing",
            JobStatus::Clipping => "clipping",
            JobStatus::GeneratingVisuals => "generating_visuals",
            JobStatus::Exporting => "exporting",
            JobStatus::Posting => "posting",
            JobStatus::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}

/// One produced short-form artifact from a completed job.
///
/// Clips are built exactly once, when the pipeline completes, and are
/// immutable afterwards. `media_url` is present only when visual
/// generation succeeded, and only ever on the first suggestion's clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub id: String,
    pub title: String,
    /// Short promotional hook line.
    pub hook: String,
    pub start: String,
    pub end: String,
    pub views: u32,
    pub likes: u32,
    pub revenue: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// One run of the automation pipeline for a given source reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub source_url: String,
    pub title: String,
    pub status: JobStatus,
    /// 0..=100, pinned to the phase the job is in.
    pub progress: u8,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
    /// Empty until the pipeline reaches completion.
    pub clips: Vec<Clip>,
}

impl Job {
    pub fn new(id: impl Into<String>, source_url: impl Into<String>, timestamp: i64) -> Self {
        let source_url = source_url.into();
        let title = title_for_source(&source_url);
        Self {
            id: id.into(),
            source_url,
            title,
            status: JobStatus::Idle,
            progress: 0,
            timestamp,
            clips: Vec::new(),
        }
    }
}

/// Payload for opening a new job.
#[derive(Debug, Clone)]
pub struct JobCreate {
    pub source_url: String,
}

/// Derives a display title from the source URL: the `v=` query parameter
/// when present, `Import` otherwise.
pub fn title_for_source(url: &str) -> String {
    let video_id = url.split("v=").nth(1).filter(|rest| !rest.is_empty());
    format!("Manual Job: {}", video_id.unwrap_or("Import"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_uses_video_id_when_present() {
        assert_eq!(
            title_for_source("https://youtube.com/watch?v=abc123"),
            "Manual Job: abc123"
        );
        assert_eq!(
            title_for_source("https://example.com/upload.mp4"),
            "Manual Job: Import"
        );
    }

    #[test]
    fn new_job_starts_idle() {
        let job = Job::new("job_1", "https://youtube.com/watch?v=xyz", 1_000);
        assert_eq!(job.status, JobStatus::Idle);
        assert_eq!(job.progress, 0);
        assert!(job.clips.is_empty());
        assert_eq!(job.title, "Manual Job: xyz");
    }
}
