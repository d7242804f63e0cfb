//! Error types for simulation runs and result export

use thiserror::Error;

/// Errors raised while configuring or running a simulation
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Caller supplied a configuration value outside its domain
    #[error("Invalid argument: {field} - {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// A loan was issued without enough cash to fund it.
    /// The lending policy checks cash before every issuance, so this means
    /// the policy and the issuance path disagree.
    #[error("can't lend: only have {available:.2} but need {required:.2}")]
    InsufficientFunds { available: f64, required: f64 },
}

impl SimulationError {
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// True for logic errors inside the simulator, false for bad input
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, SimulationError::InsufficientFunds { .. })
    }
}

/// Errors raised while writing records out
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
