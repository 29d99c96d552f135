//! Calculation result models for the voucher engine.
//!
//! This module contains the per-employee [`ReceiptRecord`], the
//! [`PeriodResult`] it is derived from, and the [`ReceiptBatch`] returned for a
//! whole roster together with its audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ReferenceMonth;

/// Compensable day count and receipt issue date for one employee and month.
///
/// # Example
///
/// ```
/// use vt_engine::models::PeriodResult;
/// use chrono::NaiveDate;
///
/// let result = PeriodResult {
///     compensable_days: 13,
///     issue_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// };
/// assert_eq!(result.compensable_days, 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// Number of compensable days in the clamped period.
    pub compensable_days: u32,
    /// The date printed on the receipt.
    pub issue_date: NaiveDate,
}

/// Everything a receipt renderer needs for one employee.
///
/// The total covers two vouchers (outbound and return) per compensable day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// The employee's name.
    pub name: String,
    /// The reference month the receipt covers.
    pub reference_month: ReferenceMonth,
    /// Transport value per voucher.
    pub daily_value: Decimal,
    /// Number of compensable days.
    pub compensable_days: u32,
    /// Total amount payable (`days * 2 * daily_value`).
    pub total: Decimal,
    /// The total written out in Portuguese.
    pub total_in_words: String,
    /// Portuguese name of the reference month (e.g. "Março").
    pub month_name: String,
    /// Year of the reference month.
    pub reference_year: i32,
    /// The receipt issue date.
    pub issue_date: NaiveDate,
    /// The issue date formatted for print (e.g. "15 de Março de 2024").
    pub issue_date_text: String,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The employee the step applies to.
    pub employee: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a batch.
///
/// # Example
///
/// ```
/// use vt_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A roster row that was not turned into a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based data row number (the header is not counted).
    pub line: usize,
    /// Why the row was skipped.
    pub reason: String,
}

/// The result of processing a whole roster for one reference month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptBatch {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The reference month for every receipt in the batch.
    pub reference_month: ReferenceMonth,
    /// One receipt per valid roster row, in input order.
    pub receipts: Vec<ReceiptRecord>,
    /// Rows that were skipped, in input order.
    pub skipped_rows: Vec<SkippedRow>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl ReceiptBatch {
    /// Sum of the totals of every receipt in the batch.
    pub fn grand_total(&self) -> Decimal {
        self.receipts.iter().map(|r| r.total).sum()
    }
}
