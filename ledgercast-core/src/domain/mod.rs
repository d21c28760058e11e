//! Domain types for Ledgercast

pub mod ledger;
pub mod recurrence;
pub mod transaction;

pub use ledger::LedgerRecord;
pub use recurrence::{Recurrence, UnknownRecurrence};
pub use transaction::Transaction;
