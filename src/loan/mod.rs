//! Loan data structures and the repayment schedule catalog

mod data;
pub mod schedule;

pub use data::{Loan, PRINCIPAL};
pub use schedule::{Schedule, ScheduleKind, BULLET, INSTALLMENT};
