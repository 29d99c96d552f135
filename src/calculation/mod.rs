//! Calculation logic for the voucher engine.
//!
//! This module contains the business-day predicate, the payment period
//! calculator (compensable day count and issue date), the Portuguese amount
//! formatter, per-employee receipt assembly, and batch processing of a roster.

mod amount_words;
mod batch;
mod business_day;
mod period;
mod receipt;

pub use amount_words::{MAX_AMOUNT_IN_WORDS, amount_in_words};
pub use batch::{BatchInput, calculate_batch};
pub use business_day::{BusinessDayPredicate, alternating_saturdays, is_issue_day, is_weekday};
pub use period::{
    adjust_issue_date_for_departure, calculate_period, clamp_period, compute_day_count,
    compute_issue_date, previous_business_day,
};
pub use receipt::{ReceiptCalculation, VOUCHERS_PER_DAY, build_receipt, format_issue_date};
