//! The store actor: owns the application state and processes mutation
//! requests sequentially.
//!
//! # Concurrency Model
//! The store runs in its own task and handles one message at a time, so no
//! locks guard the state. Requests that must be observed together (a phase
//! transition and its fee) are a single message and therefore atomic with
//! respect to every other observer.

use crate::config::EngineConfig;
use crate::model::{
    Account, AccountCreate, Clip, Job, JobCreate, JobStatus, Transaction, TransactionKind, Wallet,
};
use crate::store::{StoreClient, StoreError};
use chrono::Utc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// One-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// An expense applied atomically with a job phase transition.
#[derive(Debug, Clone)]
pub struct Fee {
    pub label: String,
    pub amount: f64,
}

/// Requests the store processes. Each carries its own responder.
#[derive(Debug)]
pub enum StoreRequest {
    ConnectAccount {
        params: AccountCreate,
        respond_to: Response<Account>,
    },
    RemoveAccount {
        id: String,
        respond_to: Response<()>,
    },
    SetAutoScan {
        id: String,
        enabled: bool,
        respond_to: Response<Account>,
    },
    ListAccounts {
        respond_to: Response<Vec<Account>>,
    },
    /// Creates a job and claims the single pipeline slot; rejected with
    /// [`StoreError::PipelineBusy`] while another job holds it.
    OpenJob {
        params: JobCreate,
        respond_to: Response<Job>,
    },
    GetJob {
        id: String,
        respond_to: Response<Option<Job>>,
    },
    ListJobs {
        respond_to: Response<Vec<Job>>,
    },
    ActiveJob {
        respond_to: Response<Option<String>>,
    },
    /// Moves a job to a new phase, charging the fee (if any) in the same
    /// step.
    AdvanceJob {
        id: String,
        status: JobStatus,
        progress: u8,
        fee: Option<Fee>,
        respond_to: Response<Job>,
    },
    /// Terminal transition: `completed`, progress 100, clips attached.
    CompleteJob {
        id: String,
        clips: Vec<Clip>,
        respond_to: Response<Job>,
    },
    /// Failure exit: back to `idle`, progress 0, pipeline slot released.
    ResetJob {
        id: String,
        respond_to: Response<Job>,
    },
    RecordTransaction {
        label: String,
        amount: f64,
        kind: TransactionKind,
        respond_to: Response<Transaction>,
    },
    WalletSnapshot {
        respond_to: Response<Wallet>,
    },
}

/// The actor that owns accounts, jobs, and the wallet.
pub struct StudioStore {
    receiver: mpsc::Receiver<StoreRequest>,
    accounts: Vec<Account>,
    /// Most recent first.
    jobs: Vec<Job>,
    wallet: Wallet,
    /// The single mid-pipeline job, if any. Claimed by `OpenJob`, released
    /// by `CompleteJob` and `ResetJob`.
    active_job: Option<String>,
    ledger_cap: usize,
    next_account: u64,
    next_job: u64,
    next_txn: u64,
}

impl StudioStore {
    pub fn new(buffer_size: usize, config: &EngineConfig) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);

        let seed = &config.wallet_seed;
        let mut wallet = Wallet::new(seed.balance, seed.total_spent, seed.total_revenue);
        let mut next_txn = 1;
        if let Some(amount) = seed.opening_deposit {
            // Display-only history: the seeded counters already account
            // for it.
            wallet.transactions.push(Transaction {
                id: format!("txn_{}", next_txn),
                label: "Initial deposit".to_string(),
                amount,
                kind: TransactionKind::Income,
                timestamp: Utc::now().timestamp_millis() - 86_400_000,
            });
            next_txn += 1;
        }

        let store = Self {
            receiver,
            accounts: Vec::new(),
            jobs: Vec::new(),
            wallet,
            active_job: None,
            ledger_cap: config.ledger_cap,
            next_account: 1,
            next_job: 1,
            next_txn,
        };
        let client = StoreClient::new(sender);
        (store, client)
    }

    /// Runs the store's event loop until every client is dropped.
    pub async fn run(mut self) {
        info!("Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::ConnectAccount { params, respond_to } => {
                    debug!(?params, "ConnectAccount");
                    let id = format!("acct_{}", self.next_account);
                    self.next_account += 1;
                    let account =
                        Account::new(id, params.platform, params.username, params.followers);
                    self.accounts.push(account.clone());
                    // Zero-amount marker entry, applied with the insertion.
                    let label = format!("Connected {} account", account.platform);
                    self.record(label, 0.0, TransactionKind::Income);
                    info!(account_id = %account.id, username = %account.username, size = self.accounts.len(), "Account connected");
                    let _ = respond_to.send(Ok(account));
                }
                StoreRequest::RemoveAccount { id, respond_to } => {
                    debug!(%id, "RemoveAccount");
                    let before = self.accounts.len();
                    self.accounts.retain(|a| a.id != id);
                    if self.accounts.len() < before {
                        info!(account_id = %id, size = self.accounts.len(), "Account removed");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(account_id = %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::AccountNotFound(id)));
                    }
                }
                StoreRequest::SetAutoScan {
                    id,
                    enabled,
                    respond_to,
                } => {
                    debug!(%id, enabled, "SetAutoScan");
                    match self.accounts.iter_mut().find(|a| a.id == id) {
                        Some(account) => {
                            account.auto_scan = enabled;
                            let _ = respond_to.send(Ok(account.clone()));
                        }
                        None => {
                            warn!(account_id = %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::AccountNotFound(id)));
                        }
                    }
                }
                StoreRequest::ListAccounts { respond_to } => {
                    let _ = respond_to.send(Ok(self.accounts.clone()));
                }
                StoreRequest::OpenJob { params, respond_to } => {
                    debug!(?params, "OpenJob");
                    if let Some(active) = &self.active_job {
                        warn!(active_job = %active, "Pipeline busy");
                        let _ = respond_to.send(Err(StoreError::PipelineBusy(active.clone())));
                        continue;
                    }
                    let id = format!("job_{}", self.next_job);
                    self.next_job += 1;
                    let job = Job::new(id, params.source_url, Utc::now().timestamp_millis());
                    self.active_job = Some(job.id.clone());
                    // Most recent first.
                    self.jobs.insert(0, job.clone());
                    info!(job_id = %job.id, size = self.jobs.len(), "Job opened");
                    let _ = respond_to.send(Ok(job));
                }
                StoreRequest::GetJob { id, respond_to } => {
                    let job = self.jobs.iter().find(|j| j.id == id).cloned();
                    debug!(%id, found = job.is_some(), "GetJob");
                    let _ = respond_to.send(Ok(job));
                }
                StoreRequest::ListJobs { respond_to } => {
                    let _ = respond_to.send(Ok(self.jobs.clone()));
                }
                StoreRequest::ActiveJob { respond_to } => {
                    let _ = respond_to.send(Ok(self.active_job.clone()));
                }
                StoreRequest::AdvanceJob {
                    id,
                    status,
                    progress,
                    fee,
                    respond_to,
                } => {
                    debug!(%id, %status, progress, fee = fee.is_some(), "AdvanceJob");
                    let updated = self.jobs.iter_mut().find(|j| j.id == id).map(|job| {
                        job.status = status;
                        job.progress = progress;
                        job.clone()
                    });
                    match updated {
                        Some(job) => {
                            if let Some(fee) = fee {
                                self.record(fee.label, fee.amount, TransactionKind::Expense);
                            }
                            info!(job_id = %id, %status, progress, "Job advanced");
                            let _ = respond_to.send(Ok(job));
                        }
                        None => {
                            warn!(job_id = %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::JobNotFound(id)));
                        }
                    }
                }
                StoreRequest::CompleteJob {
                    id,
                    clips,
                    respond_to,
                } => {
                    debug!(%id, clips = clips.len(), "CompleteJob");
                    let updated = self.jobs.iter_mut().find(|j| j.id == id).map(|job| {
                        job.status = JobStatus::Completed;
                        job.progress = 100;
                        job.clips = clips;
                        job.clone()
                    });
                    match updated {
                        Some(job) => {
                            if self.active_job.as_deref() == Some(id.as_str()) {
                                self.active_job = None;
                            }
                            info!(job_id = %id, clips = job.clips.len(), "Job completed");
                            let _ = respond_to.send(Ok(job));
                        }
                        None => {
                            warn!(job_id = %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::JobNotFound(id)));
                        }
                    }
                }
                StoreRequest::ResetJob { id, respond_to } => {
                    debug!(%id, "ResetJob");
                    let updated = self.jobs.iter_mut().find(|j| j.id == id).map(|job| {
                        job.status = JobStatus::Idle;
                        job.progress = 0;
                        job.clone()
                    });
                    match updated {
                        Some(job) => {
                            if self.active_job.as_deref() == Some(id.as_str()) {
                                self.active_job = None;
                            }
                            info!(job_id = %id, "Job reset");
                            let _ = respond_to.send(Ok(job));
                        }
                        None => {
                            warn!(job_id = %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::JobNotFound(id)));
                        }
                    }
                }
                StoreRequest::RecordTransaction {
                    label,
                    amount,
                    kind,
                    respond_to,
                } => {
                    debug!(%label, amount, %kind, "RecordTransaction");
                    let txn = self.record(label, amount, kind);
                    let _ = respond_to.send(Ok(txn));
                }
                StoreRequest::WalletSnapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.wallet.clone()));
                }
            }
        }

        info!(
            accounts = self.accounts.len(),
            jobs = self.jobs.len(),
            balance = self.wallet.balance,
            "Store shutdown"
        );
    }

    fn record(&mut self, label: String, amount: f64, kind: TransactionKind) -> Transaction {
        let txn = Transaction {
            id: format!("txn_{}", self.next_txn),
            label,
            amount,
            kind,
            timestamp: Utc::now().timestamp_millis(),
        };
        self.next_txn += 1;
        self.wallet.apply(txn.clone(), self.ledger_cap);
        txn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalletSeed;
    use crate::model::Platform;

    fn start_store(config: EngineConfig) -> StoreClient {
        let (store, client) = crate::store::new(&config);
        tokio::spawn(store.run());
        client
    }

    fn bare_config(balance: f64) -> EngineConfig {
        EngineConfig {
            wallet_seed: WalletSeed::bare(balance),
            ..EngineConfig::default()
        }
    }

    #[tokio::test]
    async fn advance_applies_transition_and_fee_atomically() {
        let client = start_store(bare_config(1_000.0));
        let job = client
            .open_job(JobCreate {
                source_url: "https://youtube.com/watch?v=abc".to_string(),
            })
            .await
            .unwrap();

        let advanced = client
            .advance_job(
                job.id.clone(),
                JobStatus::Analyzing,
                10,
                Some(Fee {
                    label: "AI analysis fee".to_string(),
                    amount: 15.0,
                }),
            )
            .await
            .unwrap();
        assert_eq!(advanced.status, JobStatus::Analyzing);
        assert_eq!(advanced.progress, 10);

        let wallet = client.wallet_snapshot().await.unwrap();
        assert_eq!(wallet.balance, 985.0);
        assert_eq!(wallet.total_spent, 15.0);
        assert_eq!(wallet.transactions[0].label, "AI analysis fee");
    }

    #[tokio::test]
    async fn open_job_rejects_while_pipeline_is_claimed() {
        let client = start_store(bare_config(0.0));
        let first = client
            .open_job(JobCreate {
                source_url: "https://youtube.com/watch?v=one".to_string(),
            })
            .await
            .unwrap();

        let busy = client
            .open_job(JobCreate {
                source_url: "https://youtube.com/watch?v=two".to_string(),
            })
            .await;
        assert_eq!(busy, Err(StoreError::PipelineBusy(first.id.clone())));

        // Resetting the active job releases the claim.
        client.reset_job(first.id.clone()).await.unwrap();
        assert_eq!(client.active_job().await.unwrap(), None);
        let second = client
            .open_job(JobCreate {
                source_url: "https://youtube.com/watch?v=two".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(second.id, "job_2");
        // Most recent first.
        let jobs = client.list_jobs().await.unwrap();
        assert_eq!(jobs[0].id, "job_2");
        assert_eq!(jobs[1].id, "job_1");
    }

    #[tokio::test]
    async fn connect_account_records_zero_amount_marker() {
        let client = start_store(bare_config(500.0));
        let account = client
            .connect_account(AccountCreate {
                platform: Platform::Instagram,
                username: "creator".to_string(),
                followers: 777,
            })
            .await
            .unwrap();
        assert_eq!(account.username, "@creator");
        assert_eq!(account.followers, 777);
        assert!(!account.auto_scan);

        let wallet = client.wallet_snapshot().await.unwrap();
        assert_eq!(wallet.balance, 500.0);
        assert_eq!(wallet.total_revenue, 0.0);
        assert_eq!(wallet.transactions[0].label, "Connected instagram account");
        assert_eq!(wallet.transactions[0].amount, 0.0);
    }

    #[tokio::test]
    async fn seeded_wallet_carries_opening_deposit_entry() {
        let client = start_store(EngineConfig::default());
        let wallet = client.wallet_snapshot().await.unwrap();
        assert_eq!(wallet.balance, 24_580.42);
        assert_eq!(wallet.total_spent, 4_200.00);
        assert_eq!(wallet.total_revenue, 12_400.00);
        assert_eq!(wallet.transactions.len(), 1);
        assert_eq!(wallet.transactions[0].label, "Initial deposit");
        assert_eq!(wallet.transactions[0].amount, 25_000.00);
    }

    #[tokio::test]
    async fn remove_account_leaves_jobs_untouched() {
        let client = start_store(bare_config(0.0));
        let account = client
            .connect_account(AccountCreate {
                platform: Platform::Youtube,
                username: "gone".to_string(),
                followers: 1,
            })
            .await
            .unwrap();
        let job = client
            .open_job(JobCreate {
                source_url: "https://youtube.com/watch?v=keep".to_string(),
            })
            .await
            .unwrap();

        client.remove_account(account.id.clone()).await.unwrap();
        assert!(client.list_accounts().await.unwrap().is_empty());
        assert_eq!(
            client.remove_account(account.id.clone()).await,
            Err(StoreError::AccountNotFound(account.id))
        );

        let kept = client.get_job(job.id).await.unwrap().unwrap();
        assert_eq!(kept.source_url, "https://youtube.com/watch?v=keep");
    }
}
