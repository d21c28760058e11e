//! Mutable simulation state — evolves one calendar day at a time.

use chrono::{Duration, NaiveDate};

use crate::config::ForecastPlan;
use crate::domain::Transaction;

/// Day-by-day projection state.
///
/// `pending` holds one value-copied entry per configured transaction, each
/// carrying its next due date, kept sorted ascending by (date, name). The
/// earliest entry is always `pending.first()`, so the due-check is a safe
/// no-op on a plan with no transactions.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Monotonically non-decreasing through the run.
    pub current_date: NaiveDate,
    pub balance: f64,
    pending: Vec<Transaction>,
}

impl SimulationState {
    /// Build the initial state from a plan: every transaction fast-forwarded
    /// to its first occurrence on or after the starting date, then sorted by
    /// due date.
    pub fn new(plan: &ForecastPlan) -> Self {
        let mut pending: Vec<Transaction> = plan
            .transactions
            .iter()
            .map(|txn| txn.aligned_to(plan.start_date))
            .collect();
        sort_by_due(&mut pending);

        Self {
            current_date: plan.start_date,
            balance: plan.opening_balance,
            pending,
        }
    }

    /// Apply every occurrence due on `current_date` and advance each applied
    /// transaction to its next date. Returns the number applied.
    ///
    /// No recurrence kind has a period shorter than one day, so each
    /// transaction applies at most once per call. Applications only ever add
    /// amounts into the balance, so same-day ordering cannot change the
    /// result.
    pub fn apply_due(&mut self) -> usize {
        let mut applied = 0;
        while let Some(next) = self.pending.first_mut() {
            if next.date != self.current_date {
                break;
            }
            self.balance += next.amount;
            next.date = next.recurrence.next_occurrence(next.date);
            applied += 1;
            sort_by_due(&mut self.pending);
        }
        applied
    }

    /// Step to the next calendar day.
    pub fn advance_day(&mut self) {
        self.current_date += Duration::days(1);
    }

    /// Pending transactions, earliest due first.
    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }
}

/// Ties on the due date are broken by name — arbitrary but deterministic.
fn sort_by_due(pending: &mut [Transaction]) {
    pending.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
}
