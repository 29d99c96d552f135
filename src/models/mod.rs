//! Core data models for the voucher engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod holiday;
mod policy;
mod reference_month;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, PeriodResult, ReceiptBatch, ReceiptRecord, SkippedRow,
};
pub use employee::EmployeeInput;
pub use holiday::HolidaySet;
pub use policy::Policy;
pub use reference_month::{ReferenceMonth, month_name_pt};
