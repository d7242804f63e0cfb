//! Repayment schedule catalog
//!
//! Each schedule maps "days since origination" to a payment amount. The
//! catalog is fixed: a bullet repayment and a two-payment installment plan.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimulationError;

/// Single repayment of 13.0 twelve days after origination
pub const BULLET: Schedule = Schedule {
    name: "bullet",
    payments: &[(12, 13.0)],
};

/// 9.0 after three days, 4.0 after thirty-five days
pub const INSTALLMENT: Schedule = Schedule {
    name: "installment",
    payments: &[(3, 9.0), (35, 4.0)],
};

/// Immutable repayment schedule
///
/// Payments are `(offset_days, amount)` pairs sorted by offset with unique
/// offsets. Amounts are non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    name: &'static str,
    payments: &'static [(u32, f64)],
}

impl Schedule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Payment due `offset` days after origination, if any
    pub fn payment_at(&self, offset: u32) -> Option<f64> {
        self.payments
            .binary_search_by_key(&offset, |&(day, _)| day)
            .ok()
            .map(|idx| self.payments[idx].1)
    }

    pub fn payments(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.payments.iter().copied()
    }

    /// Sum of all scheduled payments
    pub fn total(&self) -> f64 {
        self.payments.iter().map(|&(_, amount)| amount).sum()
    }

    /// Offset of the last payment (0 for an empty schedule)
    pub fn term(&self) -> u32 {
        self.payments.last().map(|&(day, _)| day).unwrap_or(0)
    }
}

/// Selector for one of the two catalog schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ScheduleKind {
    /// Schedule 1
    Bullet,
    /// Schedule 2
    Installment,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 2] = [ScheduleKind::Bullet, ScheduleKind::Installment];

    pub fn schedule(&self) -> Schedule {
        match self {
            ScheduleKind::Bullet => BULLET,
            ScheduleKind::Installment => INSTALLMENT,
        }
    }

    /// Numeric code used by callers and in serialized configs
    pub fn code(&self) -> i64 {
        match self {
            ScheduleKind::Bullet => 1,
            ScheduleKind::Installment => 2,
        }
    }
}

impl TryFrom<i64> for ScheduleKind {
    type Error = SimulationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ScheduleKind::Bullet),
            2 => Ok(ScheduleKind::Installment),
            other => Err(SimulationError::invalid_argument(
                "schedule",
                format!("must be one of 1 and 2 but input is {}", other),
            )),
        }
    }
}

impl From<ScheduleKind> for i64 {
    fn from(kind: ScheduleKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.schedule().name())
    }
}

impl Default for ScheduleKind {
    fn default() -> Self {
        ScheduleKind::Bullet
    }
}
