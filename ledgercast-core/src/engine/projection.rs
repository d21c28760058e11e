//! The projection loop — one ledger record per calendar day until the horizon.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::ForecastPlan;
use crate::domain::LedgerRecord;

use super::state::SimulationState;

/// Length of the projection horizon in calendar months.
pub const HORIZON_MONTHS: u32 = 24;

/// The day after the last simulated day: `start` plus two calendar years.
pub fn horizon_end(start: NaiveDate) -> NaiveDate {
    start + Months::new(HORIZON_MONTHS)
}

/// Complete result of a projection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub start_date: NaiveDate,
    /// Exclusive — no record is emitted for this date.
    pub end_date: NaiveDate,
    pub opening_balance: f64,
    pub closing_balance: f64,
    /// Total transaction occurrences applied across the horizon.
    pub occurrences_applied: usize,
    /// One record per calendar day in `[start_date, end_date)`.
    pub records: Vec<LedgerRecord>,
}

/// Project the plan's balance forward day by day over the two-year horizon.
///
/// Each emitted record carries the balance after that day's occurrences
/// were applied. A plan with no transactions produces a flat ledger at the
/// opening balance.
pub fn run_projection(plan: &ForecastPlan) -> ProjectionResult {
    let end_date = horizon_end(plan.start_date);
    let horizon_days = (end_date - plan.start_date).num_days().max(0) as usize;

    let mut state = SimulationState::new(plan);
    let mut records = Vec::with_capacity(horizon_days);
    let mut occurrences_applied = 0;

    while state.current_date < end_date {
        occurrences_applied += state.apply_due();
        records.push(LedgerRecord {
            date: state.current_date,
            balance: state.balance,
        });
        state.advance_day();
    }

    ProjectionResult {
        start_date: plan.start_date,
        end_date,
        opening_balance: plan.opening_balance,
        closing_balance: state.balance,
        occurrences_applied,
        records,
    }
}
