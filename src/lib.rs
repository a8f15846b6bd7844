//! # Vinci Engine
//!
//! > **A simulated social-media automation engine.**
//!
//! This crate implements the headless core of an automation dashboard:
//! connected creator accounts, a five-phase clip pipeline
//! (`analyzing → clipping → generating_visuals → exporting → posting`),
//! and a simulated wallet whose balance is driven by the fees and revenue
//! the pipeline produces. Rendering is someone else's job; everything here
//! is the state a UI shell consumes.
//!
//! ## 🏗️ Design Philosophy
//!
//! All shared mutable state lives in one **store actor**. Every mutation —
//! a phase transition, a fee, an account toggle — is a message processed
//! sequentially by that actor, so there are no locks and no interleaved
//! updates. A phase transition and the fee it charges travel in the same
//! message and are therefore observed together or not at all.
//!
//! The AI collaborators (content analysis, video generation, the
//! credential gate, budget planning) are trait seams. The engine ships
//! simulated implementations and expectation-queue mocks; a real shell
//! would plug providers into the same traits.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: Pure data structures (accounts, jobs, clips, the wallet).
//! - [`store`]: The state container actor and its typed client.
//! - [`orchestrator`]: The pipeline driver and the opportunistic scheduler.
//! - [`ai`]: Collaborator contracts, structured errors, and mocks.
//! - [`metrics`]: The simulated engagement numbers, behind one seam.
//! - [`sim`]: In-process collaborator implementations for the demo.
//! - [`lifecycle`]: System wiring ([`StudioSystem`](lifecycle::StudioSystem))
//!   and tracing setup.
//! - [`config`]: Fees, delays, scanner cadence, and the wallet seed.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo session with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod ai;
pub mod config;
pub mod lifecycle;
pub mod metrics;
pub mod model;
pub mod orchestrator;
pub mod sim;
pub mod store;
