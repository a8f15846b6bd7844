//! Full end-to-end tests of the assembled [`StudioSystem`].

use std::sync::Arc;
use std::time::Duration;
use vinci_engine::ai::mock::{MockAnalyzer, MockCredentialGate, MockPlanner, MockVideoGenerator};
use vinci_engine::ai::{BudgetRecommendation, ClipSuggestion};
use vinci_engine::config::{EngineConfig, PhaseDelays, ScannerConfig, WalletSeed};
use vinci_engine::lifecycle::{Collaborators, StudioSystem};
use vinci_engine::metrics::FixedMetrics;
use vinci_engine::model::{JobStatus, Platform};

fn fast_config(trigger_probability: f64) -> EngineConfig {
    EngineConfig {
        delays: PhaseDelays {
            clipping: Duration::from_millis(5),
            exporting: Duration::from_millis(5),
            posting: Duration::from_millis(5),
            payout: Duration::from_millis(40),
        },
        scanner: ScannerConfig {
            interval: Duration::from_millis(25),
            trigger_probability,
        },
        wallet_seed: WalletSeed::bare(25_000.0),
        ..EngineConfig::default()
    }
}

fn suggestions() -> Vec<ClipSuggestion> {
    vec![
        ClipSuggestion {
            title: "Cold open".to_string(),
            hook: "Watch this before you post again".to_string(),
            start: "00:05".to_string(),
            end: "00:35".to_string(),
            reasoning: None,
        },
        ClipSuggestion {
            title: "The reveal".to_string(),
            hook: "The metric nobody tracks".to_string(),
            start: "04:20".to_string(),
            end: "04:55".to_string(),
            reasoning: None,
        },
        ClipSuggestion {
            title: "Call to action".to_string(),
            hook: "Do this tonight".to_string(),
            start: "09:10".to_string(),
            end: "09:30".to_string(),
            reasoning: None,
        },
    ]
}

/// Full session with mocked collaborators: connect an account, top up the
/// wallet, run a job, ask for a budget plan, and check the wallet
/// invariant at the end.
#[tokio::test]
async fn test_full_studio_session() {
    let analyzer = Arc::new(MockAnalyzer::new());
    let video = Arc::new(MockVideoGenerator::new());
    let gate = Arc::new(MockCredentialGate::available());
    let planner = Arc::new(MockPlanner::new());

    // The scanner runs but never fires at probability 0.0.
    let system = StudioSystem::new(
        fast_config(0.0),
        Collaborators {
            analyzer: analyzer.clone(),
            video: video.clone(),
            gate: gate.clone(),
            planner: planner.clone(),
            metrics: Arc::new(FixedMetrics::default()),
        },
    );

    // Connect an account: handle normalized, followers from the metrics
    // source, a zero-amount marker entry in the ledger.
    let account = system
        .connect_account(Platform::Tiktok, "tech.master")
        .await
        .expect("Failed to connect account");
    assert_eq!(account.username, "@tech.master");
    assert_eq!(account.followers, 4_500);
    assert!(!account.auto_scan);

    let wallet = system.store.wallet_snapshot().await.unwrap();
    assert_eq!(wallet.balance, 25_000.0);
    assert_eq!(wallet.transactions[0].label, "Connected tiktok account");
    assert_eq!(wallet.transactions[0].amount, 0.0);

    // Manual top-up.
    system.top_up(5_000.0).await.expect("Failed to top up");
    let wallet = system.store.wallet_snapshot().await.unwrap();
    assert_eq!(wallet.balance, 30_000.0);
    assert_eq!(wallet.total_revenue, 5_000.0);

    // One manual job through the whole pipeline.
    analyzer.expect_suggest_clips().return_ok(suggestions());
    video
        .expect_generate()
        .return_ok(Some("sim://media/session.mp4".to_string()));

    let job_id = system
        .start_job("https://youtube.com/watch?v=sess1")
        .await
        .expect("Failed to trigger job");

    let mut completed = None;
    for _ in 0..600 {
        if let Some(job) = system.store.get_job(job_id.clone()).await.unwrap() {
            if job.status == JobStatus::Completed {
                completed = Some(job);
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let job = completed.expect("Job never completed");
    assert_eq!(job.clips.len(), 3);
    assert_eq!(
        job.clips[0].media_url.as_deref(),
        Some("sim://media/session.mp4")
    );
    assert_eq!(job.title, "Manual Job: sess1");

    // Budget plan passes through the planner contract.
    planner.expect_plan_budget().return_ok(vec![BudgetRecommendation {
        platform: "tiktok".to_string(),
        suggested_budget: 800.0,
        rationale: "cheapest reach".to_string(),
    }]);
    let plan = system.budget_plan().await.expect("Failed to plan budget");
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].platform, "tiktok");

    // Let the scheduled ad revenue land, then pin the invariant:
    // balance == seed + Σ income − Σ expense.
    tokio::time::sleep(Duration::from_millis(150)).await;
    let wallet = system.store.wallet_snapshot().await.unwrap();
    assert_eq!(wallet.total_spent, 105.50);
    assert_eq!(wallet.total_revenue, 5_000.0 + 150.0);
    assert_eq!(wallet.balance, 25_000.0 + 5_000.0 + 150.0 - 105.50);

    analyzer.verify();
    video.verify();
    planner.verify();
    assert_eq!(gate.prompt_count(), 0);

    system.shutdown().await.expect("Failed to shutdown system");
}

/// The same engine wired with the fully simulated collaborators the demo
/// binary uses.
#[tokio::test]
async fn test_simulated_session_completes() {
    let system = StudioSystem::new(fast_config(0.0), Collaborators::simulated());

    let account = system
        .connect_account(Platform::Youtube, "DemoChannel")
        .await
        .expect("Failed to connect account");
    assert_eq!(account.username, "@DemoChannel");

    let job_id = system
        .start_job("https://youtube.com/watch?v=demo42")
        .await
        .expect("Failed to trigger job");

    // The simulated analyzer and generator model latency, so give this
    // run a few seconds.
    let mut completed = None;
    for _ in 0..1_000 {
        if let Some(job) = system.store.get_job(job_id.clone()).await.unwrap() {
            if job.status == JobStatus::Completed {
                completed = Some(job);
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let job = completed.expect("Job never completed");
    assert_eq!(job.clips.len(), 3);
    let with_media: Vec<_> = job
        .clips
        .iter()
        .filter(|c| c.media_url.is_some())
        .collect();
    assert_eq!(with_media.len(), 1);
    assert!(with_media[0].media_url.as_deref().unwrap().starts_with("sim://media/"));

    // Wait for the payout so shutdown drains cleanly.
    tokio::time::sleep(Duration::from_millis(150)).await;
    let wallet = system.store.wallet_snapshot().await.unwrap();
    assert_eq!(wallet.total_spent, 105.50);
    assert!(wallet
        .transactions
        .iter()
        .any(|t| t.label == format!("Revenue from job {}", job_id)));

    system.shutdown().await.expect("Failed to shutdown system");
}
