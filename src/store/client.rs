//! Typed async facade over the store actor.

use crate::model::{
    Account, AccountCreate, Clip, Job, JobCreate, JobStatus, Transaction, TransactionKind, Wallet,
};
use crate::store::actor::{Fee, StoreRequest};
use crate::store::StoreError;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the [`StudioStore`](crate::store::StudioStore).
///
/// Cheap to clone; every clone talks to the same store task.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> StoreRequest,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    #[instrument(skip(self))]
    pub async fn connect_account(&self, params: AccountCreate) -> Result<Account, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::ConnectAccount { params, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_account(&self, id: String) -> Result<(), StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::RemoveAccount { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_auto_scan(&self, id: String, enabled: bool) -> Result<Account, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::SetAutoScan {
            id,
            enabled,
            respond_to,
        })
        .await
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>, StoreError> {
        self.request(|respond_to| StoreRequest::ListAccounts { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn open_job(&self, params: JobCreate) -> Result<Job, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::OpenJob { params, respond_to })
            .await
    }

    pub async fn get_job(&self, id: String) -> Result<Option<Job>, StoreError> {
        self.request(|respond_to| StoreRequest::GetJob { id, respond_to })
            .await
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>, StoreError> {
        self.request(|respond_to| StoreRequest::ListJobs { respond_to })
            .await
    }

    /// The id of the job currently holding the pipeline slot, if any.
    pub async fn active_job(&self) -> Result<Option<String>, StoreError> {
        self.request(|respond_to| StoreRequest::ActiveJob { respond_to })
            .await
    }

    /// Advances a job to `status`/`progress`, charging `fee` in the same
    /// store step when present.
    pub async fn advance_job(
        &self,
        id: String,
        status: JobStatus,
        progress: u8,
        fee: Option<Fee>,
    ) -> Result<Job, StoreError> {
        self.request(|respond_to| StoreRequest::AdvanceJob {
            id,
            status,
            progress,
            fee,
            respond_to,
        })
        .await
    }

    pub async fn complete_job(&self, id: String, clips: Vec<Clip>) -> Result<Job, StoreError> {
        self.request(|respond_to| StoreRequest::CompleteJob {
            id,
            clips,
            respond_to,
        })
        .await
    }

    pub async fn reset_job(&self, id: String) -> Result<Job, StoreError> {
        self.request(|respond_to| StoreRequest::ResetJob { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn record_transaction(
        &self,
        label: String,
        amount: f64,
        kind: TransactionKind,
    ) -> Result<Transaction, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::RecordTransaction {
            label,
            amount,
            kind,
            respond_to,
        })
        .await
    }

    pub async fn wallet_snapshot(&self) -> Result<Wallet, StoreError> {
        self.request(|respond_to| StoreRequest::WalletSnapshot { respond_to })
            .await
    }
}
