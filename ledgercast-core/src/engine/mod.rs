//! Simulation engine — mutable projection state and the day-by-day loop.
//!
//! Each simulated day runs the same transition: apply every occurrence due
//! today, advance each applied transaction to its next date, emit one
//! ledger record, step one calendar day forward.

pub mod projection;
pub mod state;

pub use projection::{horizon_end, run_projection, ProjectionResult, HORIZON_MONTHS};
pub use state::SimulationState;
