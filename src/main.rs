//! Demo session: starts the engine with simulated collaborators, connects
//! an account, runs one manual job to completion, and prints the wallet.

use std::time::Duration;
use tracing::{error, info, Instrument};
use vinci_engine::config::EngineConfig;
use vinci_engine::lifecycle::{setup_tracing, Collaborators, StudioSystem};
use vinci_engine::model::{JobStatus, Platform};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting studio with simulated collaborators");

    // Shorter pauses than the defaults so the demo finishes quickly.
    let mut config = EngineConfig::default();
    config.delays.clipping = Duration::from_millis(500);
    config.delays.exporting = Duration::from_millis(500);
    config.delays.posting = Duration::from_millis(400);
    config.delays.payout = Duration::from_millis(1500);

    let system = StudioSystem::new(config, Collaborators::simulated());

    let span = tracing::info_span!("account_setup");
    let account = async {
        info!("Connecting demo account");
        system
            .connect_account(Platform::Youtube, "TechMaster")
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(account_id = %account.id, username = %account.username, "Account connected");

    let span = tracing::info_span!("manual_job");
    let job_id = async {
        info!("Triggering manual job");
        system
            .start_job("https://youtube.com/watch?v=demo42")
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // Poll until the pipeline lands.
    loop {
        tokio::time::sleep(Duration::from_millis(200)).await;
        let job = system
            .store
            .get_job(job_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        match job {
            Some(job) if job.status == JobStatus::Completed => {
                info!(job_id = %job.id, clips = job.clips.len(), "Job finished");
                break;
            }
            Some(job) if job.status == JobStatus::Idle && job.progress == 0 => {
                error!(job_id = %job.id, "Job was abandoned");
                break;
            }
            _ => {}
        }
    }

    // Let the scheduled ad revenue land before reading the wallet.
    tokio::time::sleep(Duration::from_millis(2000)).await;

    match system.budget_plan().await {
        Ok(plan) => {
            for rec in plan {
                info!(platform = %rec.platform, budget = rec.suggested_budget, "Budget recommendation");
            }
        }
        Err(e) => error!(error = %e, "Budget planning failed"),
    }

    let wallet = system.store.wallet_snapshot().await.map_err(|e| e.to_string())?;
    info!(
        balance = wallet.balance,
        total_spent = wallet.total_spent,
        total_revenue = wallet.total_revenue,
        entries = wallet.transactions.len(),
        "Final wallet"
    );

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
