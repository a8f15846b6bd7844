//! Engine configuration.
//!
//! Plain structs with [`Default`] implementations matching the reference
//! behavior. Tests shrink the delays to milliseconds instead of mocking
//! time.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed fees charged as pipeline phases are entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub analysis: f64,
    pub visual_generation: f64,
    pub render_credits: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            analysis: 15.00,
            visual_generation: 85.00,
            render_credits: 5.50,
        }
    }
}

/// Simulated latencies between phase transitions, plus the delay before
/// a completed job's ad revenue lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseDelays {
    pub clipping: Duration,
    pub exporting: Duration,
    pub posting: Duration,
    pub payout: Duration,
}

impl Default for PhaseDelays {
    fn default() -> Self {
        Self {
            clipping: Duration::from_secs(2),
            exporting: Duration::from_secs(2),
            posting: Duration::from_millis(1500),
            payout: Duration::from_secs(5),
        }
    }
}

/// Opportunistic scheduler settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Polling interval between scan ticks.
    pub interval: Duration,
    /// Probability that an eligible tick actually triggers a job, in
    /// `[0.0, 1.0]`.
    pub trigger_probability: f64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(20),
            trigger_probability: 0.2,
        }
    }
}

/// Initial wallet state.
///
/// `opening_deposit` seeds one display-only ledger entry; it is not
/// re-applied to the balance or the counters, which are taken as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSeed {
    pub balance: f64,
    pub total_spent: f64,
    pub total_revenue: f64,
    pub opening_deposit: Option<f64>,
}

impl Default for WalletSeed {
    fn default() -> Self {
        Self {
            balance: 24_580.42,
            total_spent: 4_200.00,
            total_revenue: 12_400.00,
            opening_deposit: Some(25_000.00),
        }
    }
}

impl WalletSeed {
    /// A bare seed with the given balance and zeroed counters, convenient
    /// for tests pinning wallet arithmetic.
    pub fn bare(balance: f64) -> Self {
        Self {
            balance,
            total_spent: 0.0,
            total_revenue: 0.0,
            opening_deposit: None,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub fees: FeeSchedule,
    pub delays: PhaseDelays,
    pub scanner: ScannerConfig,
    pub wallet_seed: WalletSeed,
    /// Most recent ledger entries retained for display.
    pub ledger_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fees: FeeSchedule::default(),
            delays: PhaseDelays::default(),
            scanner: ScannerConfig::default(),
            wallet_seed: WalletSeed::default(),
            ledger_cap: 20,
        }
    }
}
