//! # Observability & Tracing
//!
//! Structured logging for the whole engine via the `tracing` crate.
//!
//! Log levels are configured through `RUST_LOG`:
//!
//! ```bash
//! # Lifecycle and phase transitions
//! RUST_LOG=info cargo run
//!
//! # Full store request payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the store only
//! RUST_LOG=vinci_engine::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a manual job looks like:
//!
//! ```text
//! INFO Job triggered job_id="job_1" title="Manual Job: abc123"
//! INFO Job advanced job_id="job_1" status=analyzing progress=10
//! INFO Job advanced job_id="job_1" status=clipping progress=30
//! ...
//! INFO Job completed job_id="job_1" clips=3
//! INFO Job revenue recorded txn_id="txn_5" amount=132.7
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Keep lines short; the fields carry the context
        .compact()
        .init();
}
