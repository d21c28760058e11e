//! Transaction — one named recurring cash-flow line.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Recurrence;

/// A recurring deposit (positive amount) or withdrawal (negative amount).
///
/// `date` is the next occurrence not yet applied. The simulation works on
/// value copies and advances `date` in place as occurrences are consumed;
/// the transactions held by a parsed plan are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique name within the configuration.
    pub name: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub recurrence: Recurrence,
}

impl Transaction {
    /// Copy of this transaction fast-forwarded to its first occurrence on or
    /// after `reference`.
    pub fn aligned_to(&self, reference: NaiveDate) -> Transaction {
        Transaction {
            date: self.recurrence.first_on_or_after(self.date, reference),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rent() -> Transaction {
        Transaction {
            name: "rent".into(),
            date: d(2024, 1, 1),
            amount: -500.0,
            recurrence: Recurrence::Monthly,
        }
    }

    #[test]
    fn aligned_to_earlier_reference_is_unchanged() {
        let txn = rent();
        assert_eq!(txn.aligned_to(d(2023, 6, 1)), txn);
    }

    #[test]
    fn aligned_to_later_reference_fast_forwards() {
        let aligned = rent().aligned_to(d(2024, 3, 15));
        assert_eq!(aligned.date, d(2024, 4, 1));
        assert_eq!(aligned.amount, -500.0);
    }

    #[test]
    fn serialization_roundtrip() {
        let txn = rent();
        let json = serde_json::to_string(&txn).unwrap();
        let deser: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deser);
        assert!(json.contains("\"monthly\""));
    }
}
