//! The studio state container.
//!
//! All shared mutable state — accounts, jobs, the wallet — is owned by a
//! single [`StudioStore`] actor and mutated only through its message loop,
//! so every transition is serialized and a phase change travels with its
//! fee transaction in one message. The [`StoreClient`] is the typed async
//! facade the rest of the engine uses.

pub mod actor;
pub mod client;
pub mod error;

pub use actor::{Fee, StudioStore};
pub use client::StoreClient;
pub use error::StoreError;

use crate::config::EngineConfig;

/// Creates the store actor and its client.
pub fn new(config: &EngineConfig) -> (StudioStore, StoreClient) {
    StudioStore::new(32, config)
}
