//! Receipt assembly.
//!
//! Combines the period calculation and the amount formatter into a
//! [`ReceiptRecord`] for one employee, recording each decision as an audit step.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, EmployeeInput, HolidaySet, Policy, ReceiptRecord, ReferenceMonth, month_name_pt,
};

use super::amount_words::amount_in_words;
use super::period::{
    adjust_issue_date_for_departure, clamp_period, compute_day_count, compute_issue_date,
};

/// Vouchers per compensable day: one outbound trip and one return trip.
pub const VOUCHERS_PER_DAY: u32 = 2;

/// The receipt for one employee together with the audit steps behind it.
#[derive(Debug, Clone)]
pub struct ReceiptCalculation {
    /// The assembled receipt.
    pub record: ReceiptRecord,
    /// Audit steps, numbered from the `step_number` passed to [`build_receipt`].
    pub audit_steps: Vec<AuditStep>,
}

/// Formats an issue date the way it is printed on receipts.
///
/// # Example
///
/// ```
/// use vt_engine::calculation::format_issue_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(format_issue_date(date), "05 de Março de 2024");
/// ```
pub fn format_issue_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {} de {:04}",
        date.day(),
        month_name_pt(date.month()),
        date.year()
    )
}

/// Builds the receipt for one employee.
///
/// # Arguments
///
/// * `employee` - The validated employee record
/// * `month` - The reference month
/// * `holidays` - Holidays for the reference year
/// * `policy` - The alternating-Saturday policy for this run
/// * `step_number` - The number given to the first audit step
///
/// # Returns
///
/// The receipt, whose total is `days * 2 * daily_value`, plus three or four
/// audit steps (day count, issue date, an optional departure adjustment, and
/// the total).
///
/// # Example
///
/// ```
/// use vt_engine::calculation::build_receipt;
/// use vt_engine::models::{EmployeeInput, HolidaySet, Policy, ReferenceMonth};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = EmployeeInput::new(
///     "Ana",
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///     None,
///     Decimal::from_str("5.20").unwrap(),
/// )
/// .unwrap();
/// let month = ReferenceMonth::new(2024, 3).unwrap();
///
/// let calc = build_receipt(&employee, month, &HolidaySet::empty(2024), Policy::default(), 1).unwrap();
/// assert_eq!(calc.record.compensable_days, 11);
/// // 11 days * 2 vouchers * 5.20
/// assert_eq!(calc.record.total, Decimal::from_str("114.40").unwrap());
/// assert_eq!(calc.record.total_in_words, "cento e quatorze reais e quarenta centavos");
/// assert_eq!(calc.record.issue_date_text, "15 de Março de 2024");
/// ```
pub fn build_receipt(
    employee: &EmployeeInput,
    month: ReferenceMonth,
    holidays: &HolidaySet,
    policy: Policy,
    step_number: u32,
) -> EngineResult<ReceiptCalculation> {
    let mut steps = Vec::with_capacity(4);
    let mut step = step_number;

    // Day count
    let period = clamp_period(employee.admission_date, month, employee.departure_date);
    let compensable_days = compute_day_count(
        employee.admission_date,
        month,
        holidays,
        policy,
        employee.departure_date,
    );
    steps.push(AuditStep {
        step_number: step,
        rule_id: "compensable_days".to_string(),
        rule_name: "Compensable Day Count".to_string(),
        employee: employee.name.clone(),
        input: serde_json::json!({
            "admission_date": employee.admission_date.to_string(),
            "departure_date": employee.departure_date.map(|d| d.to_string()),
            "reference_month": month.to_string(),
            "holidays": holidays.len(),
            "consider_alternating_saturdays": policy.consider_alternating_saturdays,
        }),
        output: serde_json::json!({
            "period_start": period.map(|(start, _)| start.to_string()),
            "period_end": period.map(|(_, end)| end.to_string()),
            "compensable_days": compensable_days,
        }),
        reasoning: match period {
            Some((start, end)) => format!(
                "{} compensable days between {} and {}",
                compensable_days, start, end
            ),
            None => format!("No days worked in {}", month),
        },
    });
    step += 1;

    // Issue date
    let scanned_issue_date = compute_issue_date(employee.admission_date, month, holidays)?;
    let admitted_mid_month = employee.admission_date > month.first_day();
    steps.push(AuditStep {
        step_number: step,
        rule_id: "issue_date".to_string(),
        rule_name: "Receipt Issue Date".to_string(),
        employee: employee.name.clone(),
        input: serde_json::json!({
            "admission_date": employee.admission_date.to_string(),
            "reference_month": month.to_string(),
        }),
        output: serde_json::json!({
            "issue_date": scanned_issue_date.to_string(),
        }),
        reasoning: if admitted_mid_month {
            format!(
                "Admitted after {}: admission date {} is the issue date",
                month.first_day(),
                scanned_issue_date
            )
        } else {
            format!(
                "First business day of {} is {}",
                month, scanned_issue_date
            )
        },
    });
    step += 1;

    let issue_date = adjust_issue_date_for_departure(
        scanned_issue_date,
        employee.departure_date,
        month,
        holidays,
    );
    if issue_date != scanned_issue_date {
        steps.push(AuditStep {
            step_number: step,
            rule_id: "departure_adjustment".to_string(),
            rule_name: "Departure Issue Date Adjustment".to_string(),
            employee: employee.name.clone(),
            input: serde_json::json!({
                "issue_date": scanned_issue_date.to_string(),
                "departure_date": employee.departure_date.map(|d| d.to_string()),
            }),
            output: serde_json::json!({
                "issue_date": issue_date.to_string(),
            }),
            reasoning: format!(
                "Departure precedes {}: moved to business day {}",
                scanned_issue_date, issue_date
            ),
        });
        step += 1;
    }

    // Total
    let total = Decimal::from(compensable_days)
        .checked_mul(Decimal::from(VOUCHERS_PER_DAY))
        .and_then(|vouchers| vouchers.checked_mul(employee.daily_value))
        .ok_or(EngineError::AmountOutOfRange {
            amount: employee.daily_value,
        })?;
    let total_in_words = amount_in_words(total)?;
    steps.push(AuditStep {
        step_number: step,
        rule_id: "voucher_total".to_string(),
        rule_name: "Voucher Total".to_string(),
        employee: employee.name.clone(),
        input: serde_json::json!({
            "compensable_days": compensable_days,
            "vouchers_per_day": VOUCHERS_PER_DAY,
            "daily_value": employee.daily_value.normalize().to_string(),
        }),
        output: serde_json::json!({
            "total": total.normalize().to_string(),
            "total_in_words": total_in_words,
        }),
        reasoning: format!(
            "Voucher total: {} days × {} × R${} = R${}",
            compensable_days,
            VOUCHERS_PER_DAY,
            employee.daily_value.normalize(),
            total.normalize()
        ),
    });

    let record = ReceiptRecord {
        name: employee.name.clone(),
        reference_month: month,
        daily_value: employee.daily_value,
        compensable_days,
        total,
        total_in_words,
        month_name: month.month_name().to_string(),
        reference_year: month.year(),
        issue_date,
        issue_date_text: format_issue_date(issue_date),
    };

    Ok(ReceiptCalculation {
        record,
        audit_steps: steps,
    })
}
