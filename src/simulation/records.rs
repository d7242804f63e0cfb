//! Daily record structures for simulation output

use serde::{Deserialize, Serialize};

use super::engine::SimulationConfig;

/// Portfolio snapshot for one finished day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Day index (1-based)
    pub day: u32,

    /// Cash at start of day, before any issuance
    pub money0: f64,

    // Issuance
    pub new_loan_num: u32,
    pub new_loan_amt: f64,

    // Collections
    pub cf_received: f64,

    /// Cash at end of day, after issuance and collections
    pub money: f64,

    // Portfolio
    pub loan_num: u32,
    pub loan_expired_num: u32,
    pub loan_unexpired_num: u32,
    pub loan_principal: f64,
    pub loan_future_cf: f64,
}

/// End-of-day portfolio totals used to close a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioSnapshot {
    pub money: f64,
    pub loan_num: u32,
    pub loan_expired_num: u32,
    pub loan_principal: f64,
    pub loan_future_cf: f64,
}

/// Accumulator for the day in progress
///
/// Collects issuance and collection totals while the day runs, then is
/// consumed by [`RecordBuilder::finalize`] to produce an immutable [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBuilder {
    day: u32,
    money0: f64,
    new_loan_num: u32,
    new_loan_amt: f64,
    cf_received: f64,
}

impl RecordBuilder {
    /// Start accumulating for simulation day `sim_day` (0-based)
    pub fn new(sim_day: u32, money0: f64) -> Self {
        Self {
            day: sim_day + 1,
            money0,
            new_loan_num: 0,
            new_loan_amt: 0.0,
            cf_received: 0.0,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn new_loan_num(&self) -> u32 {
        self.new_loan_num
    }

    pub fn cf_received(&self) -> f64 {
        self.cf_received
    }

    pub fn record_issue(&mut self, amount: f64) {
        self.new_loan_num += 1;
        self.new_loan_amt += amount;
    }

    pub fn record_cash_flow(&mut self, amount: f64) {
        self.cf_received += amount;
    }

    pub fn finalize(self, snapshot: PortfolioSnapshot) -> Record {
        Record {
            day: self.day,
            money0: self.money0,
            new_loan_num: self.new_loan_num,
            new_loan_amt: self.new_loan_amt,
            cf_received: self.cf_received,
            money: snapshot.money,
            loan_num: snapshot.loan_num,
            loan_expired_num: snapshot.loan_expired_num,
            loan_unexpired_num: snapshot.loan_num - snapshot.loan_expired_num,
            loan_principal: snapshot.loan_principal,
            loan_future_cf: snapshot.loan_future_cf,
        }
    }
}

/// Complete simulation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Configuration the run used
    pub config: SimulationConfig,

    /// One record per simulated day, in day order
    pub records: Vec<Record>,
}

impl SimulationResult {
    pub fn new(config: SimulationConfig, records: Vec<Record>) -> Self {
        Self { config, records }
    }

    pub fn final_record(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> SimulationSummary {
        let total_issued: u32 = self.records.iter().map(|r| r.new_loan_num).sum();
        let total_lent: f64 = self.records.iter().map(|r| r.new_loan_amt).sum();
        let total_received: f64 = self.records.iter().map(|r| r.cf_received).sum();

        let peak_principal = self
            .records
            .iter()
            .map(|r| r.loan_principal)
            .fold(0.0, f64::max);
        let min_cash = self
            .records
            .iter()
            .map(|r| r.money)
            .fold(self.config.initial_cash, f64::min);

        let last = self.final_record();

        SimulationSummary {
            days: self.records.len() as u32,
            total_issued,
            total_lent,
            total_received,
            final_cash: last.map(|r| r.money).unwrap_or(self.config.initial_cash),
            final_loan_num: last.map(|r| r.loan_num).unwrap_or(0),
            final_expired_num: last.map(|r| r.loan_expired_num).unwrap_or(0),
            peak_principal,
            min_cash,
        }
    }
}

/// Summary statistics for a simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationSummary {
    pub days: u32,
    pub total_issued: u32,
    pub total_lent: f64,
    pub total_received: f64,
    pub final_cash: f64,
    pub final_loan_num: u32,
    pub final_expired_num: u32,
    pub peak_principal: f64,
    pub min_cash: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
            money: 470.0,
            loan_num: 7,
            loan_expired_num: 2,
            loan_principal: 50.0,
            loan_future_cf: 65.0,
        }
    }

    #[test]
    fn test_builder_day_is_one_based() {
        let builder = RecordBuilder::new(0, 1000.0);
        assert_eq!(builder.day(), 1);
        assert_eq!(RecordBuilder::new(364, 0.0).day(), 365);
    }

    #[test]
    fn test_builder_accumulates_and_finalizes() {
        let mut builder = RecordBuilder::new(4, 500.0);
        builder.record_issue(10.0);
        builder.record_issue(10.0);
        builder.record_issue(10.0);
        builder.record_cash_flow(13.0);
        builder.record_cash_flow(0.0);

        let record = builder.finalize(snapshot());

        assert_eq!(record.day, 5);
        assert_eq!(record.money0, 500.0);
        assert_eq!(record.new_loan_num, 3);
        assert_eq!(record.new_loan_amt, 30.0);
        assert_eq!(record.cf_received, 13.0);
        assert_eq!(record.money, 470.0);
        assert_eq!(record.loan_num, 7);
        assert_eq!(record.loan_expired_num, 2);
        assert_eq!(record.loan_unexpired_num, 5);
        assert_eq!(record.loan_principal, 50.0);
        assert_eq!(record.loan_future_cf, 65.0);
    }

    #[test]
    fn test_summary_cash_roll_forward() {
        use crate::simulation::{SimulationConfig, SimulationEngine};
        use crate::loan::ScheduleKind;
        use approx::assert_relative_eq;

        let config = SimulationConfig::new(ScheduleKind::Installment, 50, false);
        let result = SimulationEngine::new(config).unwrap().run().unwrap();
        let summary = result.summary();

        assert_eq!(summary.days, 365);
        assert_eq!(summary.final_loan_num, summary.total_issued);
        assert_relative_eq!(summary.total_lent, summary.total_issued as f64 * 10.0);
        assert_relative_eq!(
            summary.final_cash,
            1000.0 - summary.total_lent + summary.total_received
        );
        assert_relative_eq!(summary.peak_principal, 3100.0);
        assert_eq!(summary.min_cash, 0.0);
    }

    #[test]
    fn test_summary_of_empty_result() {
        let result = SimulationResult::new(SimulationConfig::default(), Vec::new());
        let summary = result.summary();

        assert_eq!(summary.days, 0);
        assert_eq!(summary.total_issued, 0);
        assert_eq!(summary.final_cash, 1000.0);
        assert_eq!(summary.min_cash, 1000.0);
        assert!(result.final_record().is_none());
    }
}
