//! Pure data structures shared across the engine: accounts, jobs, clips,
//! and the wallet ledger.

pub mod account;
pub mod job;
pub mod wallet;

pub use account::*;
pub use job::*;
pub use wallet::*;
