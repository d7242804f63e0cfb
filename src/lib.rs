//! Loan Simulator - day-stepped lending simulation
//!
//! This library provides:
//! - Fixed-principal loans with hand-coded repayment schedules
//! - A lender that issues loans under a per-day cap and collects repayments
//! - Daily portfolio records over a fixed horizon
//! - CSV / JSON export and batch scenario runs

pub mod error;
pub mod loan;
pub mod simulation;
pub mod scenario;

// Re-export commonly used types
pub use error::{ExportError, SimulationError};
pub use loan::{Loan, Schedule, ScheduleKind, PRINCIPAL};
pub use simulation::{simulate, Loaner, Record, SimulationConfig, SimulationEngine, SimulationResult};
pub use scenario::ScenarioRunner;
