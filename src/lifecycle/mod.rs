//! Runtime wiring and lifecycle management.
//!
//! - **System orchestration**: [`StudioSystem`] spawns the store actor,
//!   builds the job orchestrator, and runs the auto-scan loop.
//! - **Observability setup**: [`setup_tracing`] initializes the
//!   tracing/logging infrastructure.

pub mod studio;
pub mod tracing;

pub use studio::*;
pub use tracing::*;
