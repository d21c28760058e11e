//! Ledger record — one end-of-day (date, balance) pair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Balance after all occurrences due on `date` have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub date: NaiveDate,
    pub balance: f64,
}
