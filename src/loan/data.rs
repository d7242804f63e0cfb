//! Loan data structure and per-loan cash flow queries

use super::schedule::Schedule;

/// Principal lent out by every loan
pub const PRINCIPAL: f64 = 10.0;

/// A single originated loan
///
/// All queries take an absolute simulation day `now`. "Future" quantities
/// exclude the payment due on `now` itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    origination_day: u32,
    schedule: Schedule,
}

impl Loan {
    pub fn new(origination_day: u32, schedule: Schedule) -> Self {
        Self {
            origination_day,
            schedule,
        }
    }

    pub fn origination_day(&self) -> u32 {
        self.origination_day
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Absolute days and amounts of every scheduled payment
    fn payments(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.origination_day;
        self.schedule
            .payments()
            .map(move |(offset, amount)| (start + offset, amount))
    }

    /// Cash flow paid on day `now` (0 when nothing is scheduled)
    pub fn cash_flow_due(&self, now: u32) -> f64 {
        now.checked_sub(self.origination_day)
            .and_then(|offset| self.schedule.payment_at(offset))
            .unwrap_or(0.0)
    }

    /// Sum of payments due strictly after `now`
    pub fn future_cash_flow(&self, now: u32) -> f64 {
        self.payments()
            .filter(|&(day, _)| day > now)
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Sum of payments due on or before `now`
    pub fn received_to_date(&self, now: u32) -> f64 {
        self.payments()
            .filter(|&(day, _)| day <= now)
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Principal not yet recovered after `now`, floored at zero
    pub fn future_principal(&self, now: u32) -> f64 {
        (PRINCIPAL - self.received_to_date(now)).max(0.0)
    }

    /// Expired once nothing remains to be paid.
    ///
    /// Exact comparison against zero: holds for the catalog schedules, whose
    /// amounts are small integers and accumulate without rounding.
    pub fn is_expired(&self, now: u32) -> bool {
        self.future_cash_flow(now) == 0.0
    }
}
