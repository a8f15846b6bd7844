use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Whether a transaction credits or debits the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// One entry in the wallet's append-only ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub label: String,
    /// Non-negative; the sign is carried by `kind`.
    pub amount: f64,
    pub kind: TransactionKind,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

/// The simulated wallet: running balance, cumulative counters, and the
/// capped display ledger.
///
/// Invariant: `balance` equals the seed balance plus the net of all signed
/// transaction amounts ever applied, and `total_spent`/`total_revenue`
/// equal the cumulative expense/income sums. The ledger cap trims display
/// history only; the counters are never recomputed from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: f64,
    pub total_spent: f64,
    pub total_revenue: f64,
    /// Most recent first, at most the configured cap retained.
    pub transactions: Vec<Transaction>,
}

impl Wallet {
    pub fn new(balance: f64, total_spent: f64, total_revenue: f64) -> Self {
        Self {
            balance,
            total_spent,
            total_revenue,
            transactions: Vec::new(),
        }
    }

    /// Applies one transaction: balance, counters, and ledger move together
    /// in this single call so they cannot drift apart.
    pub fn apply(&mut self, txn: Transaction, cap: usize) {
        match txn.kind {
            TransactionKind::Income => {
                self.balance += txn.amount;
                self.total_revenue += txn.amount;
            }
            TransactionKind::Expense => {
                self.balance -= txn.amount;
                self.total_spent += txn.amount;
            }
        }
        self.transactions.insert(0, txn);
        self.transactions.truncate(cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(id: u64, amount: f64, kind: TransactionKind) -> Transaction {
        Transaction {
            id: format!("txn_{}", id),
            label: "test".to_string(),
            amount,
            kind,
            timestamp: id as i64,
        }
    }

    #[test]
    fn apply_moves_balance_and_counters_together() {
        let mut wallet = Wallet::new(100.0, 0.0, 0.0);
        wallet.apply(txn(1, 15.0, TransactionKind::Expense), 20);
        wallet.apply(txn(2, 40.0, TransactionKind::Income), 20);

        assert_eq!(wallet.balance, 125.0);
        assert_eq!(wallet.total_spent, 15.0);
        assert_eq!(wallet.total_revenue, 40.0);
        assert_eq!(wallet.transactions.len(), 2);
        // Newest first.
        assert_eq!(wallet.transactions[0].id, "txn_2");
    }

    #[test]
    fn cap_trims_ledger_but_not_totals() {
        let mut wallet = Wallet::new(0.0, 0.0, 0.0);
        for i in 0..25 {
            wallet.apply(txn(i, 1.0, TransactionKind::Income), 20);
        }
        assert_eq!(wallet.transactions.len(), 20);
        assert_eq!(wallet.total_revenue, 25.0);
        assert_eq!(wallet.balance, 25.0);
        // The most recent entries survive the trim.
        assert_eq!(wallet.transactions[0].id, "txn_24");
        assert_eq!(wallet.transactions[19].id, "txn_5");
    }
}
