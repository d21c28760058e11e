//! Ledgercast Core — recurrence expansion and balance projection.
//!
//! This crate contains everything below the binary surface:
//! - Domain types (recurrence kinds, transactions, ledger records)
//! - The occurrence advancer (fast-forward to the simulation start)
//! - The day-by-day projection loop over a fixed two-year horizon
//! - TOML configuration loading and validation
//! - CSV export of the resulting ledger
//!
//! The whole run is one synchronous pass: parse a `ForecastConfig`, validate
//! it into a `ForecastPlan`, feed the plan to `run_projection`, and hand the
//! resulting records to `write_ledger_csv`.

pub mod config;
pub mod domain;
pub mod engine;
pub mod reporting;

pub use config::{ConfigError, ForecastConfig, ForecastPlan};
pub use domain::{LedgerRecord, Recurrence, Transaction, UnknownRecurrence};
pub use engine::{run_projection, ProjectionResult, SimulationState};
pub use reporting::write_ledger_csv;
