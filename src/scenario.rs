//! Scenario runner for batches of simulations
//!
//! Every run owns its own lender, so configurations can be run in parallel
//! without sharing any state.

use log::debug;
use rayon::prelude::*;

use crate::error::SimulationError;
use crate::loan::ScheduleKind;
use crate::simulation::{SimulationConfig, SimulationEngine, SimulationResult};

/// Runs many simulation configurations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.sweep_max_lend(ScheduleKind::Bullet, false, &[10, 25, 50]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Horizon and starting cash applied to every generated config
    base: SimulationConfig,
}

impl ScenarioRunner {
    /// Runner using the standard 365-day horizon and 1000.0 starting cash
    pub fn new() -> Self {
        Self {
            base: SimulationConfig::default(),
        }
    }

    /// Runner whose generated configs inherit `base`'s horizon and cash
    pub fn with_base(base: SimulationConfig) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &SimulationConfig {
        &self.base
    }

    /// Run a single simulation
    pub fn run(&self, config: SimulationConfig) -> Result<SimulationResult, SimulationError> {
        debug!(
            "Running scenario: schedule {}, max {}, cap {}",
            config.schedule, config.max_lend_per_day, config.cap_to_initial_cash
        );
        SimulationEngine::new(config)?.run()
    }

    /// Run several configurations in parallel; results keep input order
    pub fn run_scenarios(
        &self,
        configs: &[SimulationConfig],
    ) -> Vec<Result<SimulationResult, SimulationError>> {
        configs
            .par_iter()
            .map(|config| self.run(config.clone()))
            .collect()
    }

    /// Same schedule and cap, varying the daily lending limit
    pub fn sweep_max_lend(
        &self,
        schedule: ScheduleKind,
        cap_to_initial_cash: bool,
        limits: &[u32],
    ) -> Vec<Result<SimulationResult, SimulationError>> {
        let configs: Vec<_> = limits
            .iter()
            .map(|&max_lend_per_day| self.config_for(schedule, max_lend_per_day, cap_to_initial_cash))
            .collect();
        self.run_scenarios(&configs)
    }

    /// Run both catalog schedules under the same policy, schedule 1 first
    pub fn compare_schedules(
        &self,
        max_lend_per_day: u32,
        cap_to_initial_cash: bool,
    ) -> Result<Vec<SimulationResult>, SimulationError> {
        let configs: Vec<_> = ScheduleKind::ALL
            .iter()
            .map(|&schedule| self.config_for(schedule, max_lend_per_day, cap_to_initial_cash))
            .collect();
        self.run_scenarios(&configs).into_iter().collect()
    }

    fn config_for(
        &self,
        schedule: ScheduleKind,
        max_lend_per_day: u32,
        cap_to_initial_cash: bool,
    ) -> SimulationConfig {
        SimulationConfig {
            schedule,
            max_lend_per_day,
            cap_to_initial_cash,
            ..self.base.clone()
        }
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::simulate;

    #[test]
    fn test_scenario_runner_sweep() {
        let runner = ScenarioRunner::new();

        let results = runner.sweep_max_lend(ScheduleKind::Bullet, false, &[0, 1, 50]);
        assert_eq!(results.len(), 3);

        let finals: Vec<_> = results
            .iter()
            .map(|r| r.as_ref().unwrap().summary())
            .collect();
        assert_eq!(finals[0].final_cash, 1000.0);
        assert_eq!(finals[0].total_issued, 0);
        assert_eq!(finals[1].final_cash, 1939.0);
        assert_eq!(finals[1].final_loan_num, 365);
        assert_eq!(finals[2].final_cash, 39490.0);
    }

    #[test]
    fn test_parallel_results_match_sequential() {
        let runner = ScenarioRunner::new();
        let results = runner.compare_schedules(50, true).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].config.schedule, ScheduleKind::Bullet);
        assert_eq!(results[1].config.schedule, ScheduleKind::Installment);
        assert_eq!(results[0].records, simulate(1, 50, true).unwrap());
        assert_eq!(results[1].records, simulate(2, 50, true).unwrap());
    }

    #[test]
    fn test_base_config_is_inherited() {
        let runner = ScenarioRunner::with_base(SimulationConfig {
            horizon_days: 30,
            initial_cash: 100.0,
            ..Default::default()
        });

        let results = runner.compare_schedules(5, false).unwrap();
        for result in &results {
            assert_eq!(result.records.len(), 30);
            assert_eq!(result.records[0].money0, 100.0);
        }
    }

    #[test]
    fn test_invalid_config_reported_per_scenario() {
        let runner = ScenarioRunner::new();
        let configs = vec![
            SimulationConfig::new(ScheduleKind::Bullet, 10, false),
            SimulationConfig {
                initial_cash: -5.0,
                ..Default::default()
            },
        ];

        let results = runner.run_scenarios(&configs);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(SimulationError::InvalidArgument { field: "initial_cash", .. })
        ));
    }
}
