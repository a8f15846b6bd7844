//! The opportunistic scheduler: a timer-driven loop that may start a
//! synthetic job for an auto-scan account without user action.

use crate::orchestrator::Orchestrator;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

impl Orchestrator {
    /// One scan tick. Fires a synthetic job only when every gate passes:
    /// at least one auto-scan account, the probability roll, a usable
    /// credential (checked silently, no prompt), and no job mid-pipeline
    /// anywhere in the system. Returns the new job id when one started.
    pub async fn scan_once(&self) -> Option<String> {
        let accounts = match self.store.list_accounts().await {
            Ok(accounts) => accounts,
            Err(err) => {
                warn!(error = %err, "Scan skipped, store unavailable");
                return None;
            }
        };
        let scanners: Vec<_> = accounts.into_iter().filter(|a| a.auto_scan).collect();
        if scanners.is_empty() {
            return None;
        }

        let fired = {
            let mut rng = rand::thread_rng();
            rng.gen::<f64>() < self.config.scanner.trigger_probability
        };
        if !fired {
            return None;
        }

        if !self.gate.has_credential().await {
            debug!("Scan skipped, no credential");
            return None;
        }
        match self.store.active_job().await {
            Ok(None) => {}
            Ok(Some(active)) => {
                debug!(active_job = %active, "Scan skipped, pipeline busy");
                return None;
            }
            Err(err) => {
                warn!(error = %err, "Scan skipped, store unavailable");
                return None;
            }
        }

        let (username, source_url) = {
            let mut rng = rand::thread_rng();
            // The picked account attributes the trigger; the source itself
            // is synthetic.
            let account = scanners.choose(&mut rng)?;
            let suffix: String = (&mut rng)
                .sample_iter(Alphanumeric)
                .take(5)
                .map(char::from)
                .collect::<String>()
                .to_lowercase();
            (
                account.username.clone(),
                format!("https://youtube.com/watch?v=auto_{}", suffix),
            )
        };

        match self.start_job(&source_url).await {
            Ok(job_id) => {
                info!(job_id = %job_id, account = %username, "Auto-scan job started");
                Some(job_id)
            }
            Err(err) => {
                debug!(error = %err, "Auto-scan trigger rejected");
                None
            }
        }
    }
}

/// Spawns the scan loop on its own task. The first scan happens one full
/// interval after startup.
pub fn spawn_scanner(orchestrator: Orchestrator) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(orchestrator.config.scanner.interval);
        // An interval's first tick resolves immediately; consume it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            orchestrator.scan_once().await;
        }
    })
}
