//! Simulation driver: runs a lender over a fixed horizon

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::loan::ScheduleKind;
use super::records::{Record, SimulationResult};
use super::state::Loaner;

/// Number of simulated days in a standard run
pub const DEFAULT_HORIZON_DAYS: u32 = 365;

/// Cash the lender starts with in a standard run
pub const DEFAULT_INITIAL_CASH: f64 = 1000.0;

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

fn default_initial_cash() -> f64 {
    DEFAULT_INITIAL_CASH
}

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Repayment schedule for every loan issued (1 or 2)
    #[serde(default)]
    pub schedule: ScheduleKind,

    /// Maximum issuance attempts per day
    #[serde(default)]
    pub max_lend_per_day: u32,

    /// Stop lending while future principal outstanding exceeds initial cash
    #[serde(default)]
    pub cap_to_initial_cash: bool,

    /// Number of days to simulate
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,

    /// Starting cash balance
    #[serde(default = "default_initial_cash")]
    pub initial_cash: f64,
}

impl SimulationConfig {
    /// Standard 365-day run starting from 1000.0 cash
    pub fn new(schedule: ScheduleKind, max_lend_per_day: u32, cap_to_initial_cash: bool) -> Self {
        Self {
            schedule,
            max_lend_per_day,
            cap_to_initial_cash,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.initial_cash.is_finite() || self.initial_cash < 0.0 {
            return Err(SimulationError::invalid_argument(
                "initial_cash",
                format!("must be finite and non-negative but input is {}", self.initial_cash),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            schedule: ScheduleKind::default(),
            max_lend_per_day: 0,
            cap_to_initial_cash: false,
            horizon_days: DEFAULT_HORIZON_DAYS,
            initial_cash: DEFAULT_INITIAL_CASH,
        }
    }
}

/// Main simulation engine
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the configured number of days
    ///
    /// Each day lends up to `max_lend_per_day` loans, then collects cash
    /// flows and closes the day. Any error aborts the run with no result.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        let config = &self.config;
        let schedule = config.schedule.schedule();

        info!(
            "Simulating {} days: schedule {}, max {} loans/day, cap to initial cash {}",
            config.horizon_days, config.schedule, config.max_lend_per_day, config.cap_to_initial_cash
        );

        let mut loaner = Loaner::new(config.initial_cash);
        for _ in 0..config.horizon_days {
            loaner.lend_batch(config.max_lend_per_day, schedule, config.cap_to_initial_cash)?;
            loaner.advance_day();
        }

        info!(
            "Simulation complete: {} loans issued, final cash {:.2}",
            loaner.loan_count(),
            loaner.cash()
        );

        Ok(SimulationResult::new(config.clone(), loaner.into_records()))
    }
}

/// Run a standard 365-day simulation and return its daily records
///
/// `schedule_kind` must be 1 or 2.
pub fn simulate(
    schedule_kind: i64,
    max_lend_per_day: u32,
    cap_to_initial_cash: bool,
) -> Result<Vec<Record>, SimulationError> {
    let schedule = ScheduleKind::try_from(schedule_kind)?;
    let config = SimulationConfig::new(schedule, max_lend_per_day, cap_to_initial_cash);
    let result = SimulationEngine::new(config)?.run()?;
    Ok(result.records)
}
