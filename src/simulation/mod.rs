//! Day-stepped lending simulation

mod records;
mod state;
mod engine;
pub mod export;

pub use records::{PortfolioSnapshot, Record, RecordBuilder, SimulationResult, SimulationSummary};
pub use state::Loaner;
pub use engine::{
    simulate, SimulationConfig, SimulationEngine, DEFAULT_HORIZON_DAYS, DEFAULT_INITIAL_CASH,
};
pub use export::ExportRow;
