//! Lender state and the per-day lending policy

use log::trace;

use crate::error::SimulationError;
use crate::loan::{Loan, Schedule, PRINCIPAL};
use super::records::{PortfolioSnapshot, Record, RecordBuilder};

/// Lender holding cash and every loan it has issued
///
/// One day runs as: [`Loaner::lend_batch`] any number of times, then a
/// single [`Loaner::advance_day`]. After every `advance_day`,
/// `current_day == records.len()`.
#[derive(Debug, Clone)]
pub struct Loaner {
    cash: f64,
    initial_cash: f64,
    current_day: u32,
    loans: Vec<Loan>,
    records: Vec<Record>,
    pending: RecordBuilder,
}

impl Loaner {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            cash: initial_cash,
            initial_cash,
            current_day: 0,
            loans: Vec::new(),
            records: Vec::new(),
            pending: RecordBuilder::new(0, initial_cash),
        }
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn initial_cash(&self) -> f64 {
        self.initial_cash
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Accumulator for the day in progress
    pub fn pending(&self) -> &RecordBuilder {
        &self.pending
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Attempt up to `quantity` issuances today, returning how many succeeded.
    ///
    /// Each attempt is checked on its own: an attempt is skipped when cash is
    /// below the principal, or when `cap_to_initial_cash` is set and future
    /// principal outstanding already exceeds the initial cash.
    pub fn lend_batch(
        &mut self,
        quantity: u32,
        schedule: Schedule,
        cap_to_initial_cash: bool,
    ) -> Result<u32, SimulationError> {
        let mut issued = 0;
        for _ in 0..quantity {
            let over_cap = cap_to_initial_cash && self.future_principal() > self.initial_cash;
            let short_of_cash = PRINCIPAL > self.cash;
            if over_cap || short_of_cash {
                trace!(
                    "day {}: skip issuance (over_cap={}, short_of_cash={})",
                    self.current_day,
                    over_cap,
                    short_of_cash
                );
                continue;
            }
            self.issue_loan(schedule)?;
            issued += 1;
        }
        Ok(issued)
    }

    /// Issue one loan originated today
    pub fn issue_loan(&mut self, schedule: Schedule) -> Result<(), SimulationError> {
        if self.cash < PRINCIPAL {
            return Err(SimulationError::InsufficientFunds {
                available: self.cash,
                required: PRINCIPAL,
            });
        }

        self.cash -= PRINCIPAL;
        self.loans.push(Loan::new(self.current_day, schedule));
        self.pending.record_issue(PRINCIPAL);
        Ok(())
    }

    /// Collect today's cash flows, close today's record and move to the next day
    pub fn advance_day(&mut self) -> &Record {
        let now = self.current_day;
        for loan in &self.loans {
            let cf = loan.cash_flow_due(now);
            self.pending.record_cash_flow(cf);
            self.cash += cf;
        }

        let snapshot = PortfolioSnapshot {
            money: self.cash,
            loan_num: self.loan_count(),
            loan_expired_num: self.expired_loan_count(),
            loan_principal: self.future_principal(),
            loan_future_cf: self.future_cash_flow(),
        };

        self.current_day += 1;

        let finished = std::mem::replace(
            &mut self.pending,
            RecordBuilder::new(self.current_day, self.cash),
        );
        trace!(
            "day {}: issued {}, received {:.2}, cash {:.2}",
            finished.day(),
            finished.new_loan_num(),
            finished.cf_received(),
            self.cash
        );
        self.records.push(finished.finalize(snapshot));

        &self.records[self.records.len() - 1]
    }

    /// Future cash flow across all loans, excluding today
    pub fn future_cash_flow(&self) -> f64 {
        self.loans
            .iter()
            .map(|loan| loan.future_cash_flow(self.current_day))
            .sum()
    }

    /// Future principal across all loans, excluding today
    pub fn future_principal(&self) -> f64 {
        self.loans
            .iter()
            .map(|loan| loan.future_principal(self.current_day))
            .sum()
    }

    pub fn loan_count(&self) -> u32 {
        self.loans.len() as u32
    }

    pub fn expired_loan_count(&self) -> u32 {
        self.loans
            .iter()
            .filter(|loan| loan.is_expired(self.current_day))
            .count() as u32
    }

    pub fn unexpired_loan_count(&self) -> u32 {
        self.loan_count() - self.expired_loan_count()
    }
}
