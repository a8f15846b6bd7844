use crate::ai::{
    AnalysisError, BudgetPlanner, BudgetRecommendation, ContentAnalyzer, CredentialGate,
    VideoGenerator,
};
use crate::config::EngineConfig;
use crate::metrics::{EngagementSimulator, RandomMetrics};
use crate::model::{Account, AccountCreate, Platform, Transaction, TransactionKind};
use crate::orchestrator::{scheduler, Orchestrator, TriggerError};
use crate::sim::{SimulatedAnalyzer, SimulatedPlanner, SimulatedVideoGenerator, StaticCredentialGate};
use crate::store::{self, StoreClient, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors surfaced by the system's user-action methods.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StudioError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// The external collaborators and the metrics source injected into the
/// engine. Swap any of them for mocks in tests or real providers in a
/// shell.
#[derive(Clone)]
pub struct Collaborators {
    pub analyzer: Arc<dyn ContentAnalyzer>,
    pub video: Arc<dyn VideoGenerator>,
    pub gate: Arc<dyn CredentialGate>,
    pub planner: Arc<dyn BudgetPlanner>,
    pub metrics: Arc<dyn EngagementSimulator>,
}

impl Collaborators {
    /// The fully simulated set used by the demo binary: in-process
    /// analysis/generation, a credential that is always selected, and
    /// random engagement numbers.
    pub fn simulated() -> Self {
        Self {
            analyzer: Arc::new(SimulatedAnalyzer),
            video: Arc::new(SimulatedVideoGenerator),
            gate: Arc::new(StaticCredentialGate::new(true)),
            planner: Arc::new(SimulatedPlanner),
            metrics: Arc::new(RandomMetrics),
        }
    }
}

/// The running engine: store actor, orchestrator, and scan loop.
///
/// `StudioSystem` is responsible for:
/// - **Lifecycle management**: starting the store task and the scanner,
///   and shutting both down.
/// - **Dependency wiring**: handing the orchestrator its store client and
///   collaborators.
/// - **The user-action surface**: the operations a dashboard shell calls
///   (connect/remove accounts, toggle auto-scan, top up, trigger jobs,
///   ask for a budget plan, read snapshots).
pub struct StudioSystem {
    /// Client for reading and mutating engine state.
    pub store: StoreClient,

    /// The job pipeline driver.
    pub orchestrator: Orchestrator,

    planner: Arc<dyn BudgetPlanner>,
    metrics: Arc<dyn EngagementSimulator>,
    store_handle: tokio::task::JoinHandle<()>,
    scanner_handle: tokio::task::JoinHandle<()>,
}

impl StudioSystem {
    /// Creates and starts the engine: spawns the store actor, wires the
    /// orchestrator, and starts the auto-scan loop.
    pub fn new(config: EngineConfig, collaborators: Collaborators) -> Self {
        let config = Arc::new(config);
        let (store_actor, store) = store::new(&config);
        let store_handle = tokio::spawn(store_actor.run());

        let orchestrator = Orchestrator::new(
            store.clone(),
            collaborators.analyzer,
            collaborators.video,
            collaborators.gate,
            collaborators.metrics.clone(),
            config,
        );
        let scanner_handle = scheduler::spawn_scanner(orchestrator.clone());

        Self {
            store,
            orchestrator,
            planner: collaborators.planner,
            metrics: collaborators.metrics,
            store_handle,
            scanner_handle,
        }
    }

    /// Connects an account: handle normalized, followers seeded from the
    /// metrics source, auto-scan off.
    pub async fn connect_account(
        &self,
        platform: Platform,
        username: &str,
    ) -> Result<Account, StudioError> {
        let followers = self.metrics.starting_followers();
        let account = self
            .store
            .connect_account(AccountCreate {
                platform,
                username: username.to_string(),
                followers,
            })
            .await?;
        Ok(account)
    }

    pub async fn remove_account(&self, id: &str) -> Result<(), StudioError> {
        self.store.remove_account(id.to_string()).await?;
        Ok(())
    }

    pub async fn set_auto_scan(&self, id: &str, enabled: bool) -> Result<Account, StudioError> {
        let account = self.store.set_auto_scan(id.to_string(), enabled).await?;
        Ok(account)
    }

    /// Manual wallet top-up.
    pub async fn top_up(&self, amount: f64) -> Result<Transaction, StudioError> {
        let txn = self
            .store
            .record_transaction("Manual top-up".to_string(), amount, TransactionKind::Income)
            .await?;
        Ok(txn)
    }

    /// Triggers a manual job for `source_url`.
    pub async fn start_job(&self, source_url: &str) -> Result<String, TriggerError> {
        self.orchestrator.start_job(source_url).await
    }

    /// Asks the planner for an ad-budget allocation derived from the
    /// current wallet and account list.
    pub async fn budget_plan(&self) -> Result<Vec<BudgetRecommendation>, StudioError> {
        let wallet = self.store.wallet_snapshot().await?;
        let accounts = self.store.list_accounts().await?;
        let stats = format!(
            "balance {:.2}, total spent {:.2}, total revenue {:.2}, {} connected accounts",
            wallet.balance,
            wallet.total_spent,
            wallet.total_revenue,
            accounts.len()
        );
        let plan = self.planner.plan_budget(&stats).await?;
        Ok(plan)
    }

    /// Gracefully shuts the engine down: stops the scanner, drops the
    /// clients, and waits for the store loop to drain.
    ///
    /// A payout scheduled by a just-completed job holds its own store
    /// client until it lands, so shutdown waits for pending payouts too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down studio...");

        self.scanner_handle.abort();
        if let Err(err) = self.scanner_handle.await {
            if !err.is_cancelled() {
                return Err(format!("Scanner task failed: {:?}", err));
            }
        }

        // Dropping the clients closes the store's channel once every
        // outstanding task (pipelines, payouts) has finished with it.
        drop(self.orchestrator);
        drop(self.store);
        if let Err(err) = self.store_handle.await {
            return Err(format!("Store task failed: {:?}", err));
        }

        info!("Studio shutdown complete.");
        Ok(())
    }
}
