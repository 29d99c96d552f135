//! Payment period calculation.
//!
//! This module computes, for one employee and one reference month, the number
//! of compensable days and the receipt issue date.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeInput, HolidaySet, PeriodResult, Policy, ReferenceMonth};

use super::business_day::{BusinessDayPredicate, is_issue_day};

/// Clamps the reference month to the days the employee actually worked.
///
/// The start is the later of the admission date and the first day of the
/// month. The end is the last day of the month, pulled back to the departure
/// date when the employee left on or before it.
///
/// # Returns
///
/// `None` when the clamped start falls after the clamped end, e.g. the
/// employee left before the month began or was admitted after it ended.
///
/// # Example
///
/// ```
/// use vt_engine::calculation::clamp_period;
/// use vt_engine::models::ReferenceMonth;
/// use chrono::NaiveDate;
///
/// let month = ReferenceMonth::new(2024, 3).unwrap();
/// let admission = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let departure = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
///
/// assert_eq!(
///     clamp_period(admission, month, Some(departure)),
///     Some((admission, departure))
/// );
/// assert_eq!(clamp_period(admission, month, Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())), None);
/// ```
pub fn clamp_period(
    admission: NaiveDate,
    month: ReferenceMonth,
    departure: Option<NaiveDate>,
) -> Option<(NaiveDate, NaiveDate)> {
    let start = admission.max(month.first_day());
    let end = match departure {
        Some(departure) if departure <= month.last_day() => departure,
        _ => month.last_day(),
    };

    (start <= end).then_some((start, end))
}

/// Counts the compensable days an employee worked in the reference month.
///
/// # Arguments
///
/// * `admission` - The employee's admission date
/// * `month` - The reference month
/// * `holidays` - Holidays for the reference year
/// * `policy` - Whether alternating Saturdays are compensable
/// * `departure` - The employee's departure date, if any
///
/// # Returns
///
/// The number of days in the clamped period that are not holidays and are
/// either weekdays or, with the policy on, alternating Saturdays of that
/// period. Zero when the clamped period is empty. Never more than the
/// number of days in the month.
///
/// # Example
///
/// ```
/// use vt_engine::calculation::compute_day_count;
/// use vt_engine::models::{HolidaySet, Policy, ReferenceMonth};
/// use chrono::NaiveDate;
///
/// let month = ReferenceMonth::new(2024, 1).unwrap();
/// let admission = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
/// let holidays = HolidaySet::empty(2024);
///
/// // January 2024 has 23 weekdays
/// assert_eq!(compute_day_count(admission, month, &holidays, Policy::default(), None), 23);
/// ```
pub fn compute_day_count(
    admission: NaiveDate,
    month: ReferenceMonth,
    holidays: &HolidaySet,
    policy: Policy,
    departure: Option<NaiveDate>,
) -> u32 {
    let Some((start, end)) = clamp_period(admission, month, departure) else {
        return 0;
    };

    let predicate = BusinessDayPredicate::new(holidays, policy, start, end);

    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| predicate.is_compensable(*d))
        .count() as u32
}

/// Determines the receipt issue date before any departure adjustment.
///
/// When the employee was admitted after the first day of the month the
/// admission date itself is the issue date, with no business-day check.
/// Otherwise the first weekday of the month that is not a holiday is used;
/// Saturdays are never chosen, whatever the alternating-Saturday policy.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if every weekday of the month is
/// a holiday.
///
/// # Example
///
/// ```
/// use vt_engine::calculation::compute_issue_date;
/// use vt_engine::models::{HolidaySet, ReferenceMonth};
/// use chrono::NaiveDate;
///
/// let month = ReferenceMonth::new(2024, 1).unwrap();
/// let holidays = HolidaySet::parse(Some("01/01"), 2024);
/// let admission = NaiveDate::from_ymd_opt(2020, 5, 4).unwrap();
///
/// let issue = compute_issue_date(admission, month, &holidays).unwrap();
/// assert_eq!(issue, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
/// ```
pub fn compute_issue_date(
    admission: NaiveDate,
    month: ReferenceMonth,
    holidays: &HolidaySet,
) -> EngineResult<NaiveDate> {
    // TODO: decide with payroll whether a weekend or holiday admission date
    // should roll forward to the next business day.
    if admission > month.first_day() {
        return Ok(admission);
    }

    month
        .days()
        .find(|d| is_issue_day(*d, holidays))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("no business day available for an issue date in {}", month),
        })
}

/// Finds the latest weekday on or before `date` that is not a holiday.
///
/// The alternating-Saturday policy plays no part here. The search may step
/// back into the previous month.
///
/// # Example
///
/// ```
/// use vt_engine::calculation::previous_business_day;
/// use vt_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::parse(Some("29/03"), 2024);
/// // Sunday 2024-03-31 -> Saturday skipped -> Friday 29 is a holiday -> Thursday 28
/// let found = previous_business_day(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(), &holidays);
/// assert_eq!(found, NaiveDate::from_ymd_opt(2024, 3, 28).unwrap());
/// ```
pub fn previous_business_day(date: NaiveDate, holidays: &HolidaySet) -> NaiveDate {
    let mut current = date;
    while !is_issue_day(current, holidays) {
        match current.pred_opt() {
            Some(previous) => current = previous,
            None => break,
        }
    }
    current
}

/// Moves the issue date back when the employee left before it.
///
/// Applies only when the departure date is earlier than `issue_date` and
/// falls inside the reference month; the result is then the
/// [`previous_business_day`] of the departure date.
pub fn adjust_issue_date_for_departure(
    issue_date: NaiveDate,
    departure: Option<NaiveDate>,
    month: ReferenceMonth,
    holidays: &HolidaySet,
) -> NaiveDate {
    match departure {
        Some(departure) if departure < issue_date && month.contains(departure) => {
            previous_business_day(departure, holidays)
        }
        _ => issue_date,
    }
}

/// Computes the compensable day count and final issue date for an employee.
///
/// Combines [`compute_day_count`], [`compute_issue_date`] and
/// [`adjust_issue_date_for_departure`].
///
/// # Example
///
/// ```
/// use vt_engine::calculation::calculate_period;
/// use vt_engine::models::{EmployeeInput, HolidaySet, Policy, ReferenceMonth};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeInput::new(
///     "Ana",
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///     None,
///     Decimal::new(440, 2),
/// )
/// .unwrap();
/// let month = ReferenceMonth::new(2024, 3).unwrap();
///
/// let result = calculate_period(&employee, month, &HolidaySet::empty(2024), Policy::default()).unwrap();
/// assert_eq!(result.compensable_days, 11);
/// assert_eq!(result.issue_date, employee.admission_date);
/// ```
pub fn calculate_period(
    employee: &EmployeeInput,
    month: ReferenceMonth,
    holidays: &HolidaySet,
    policy: Policy,
) -> EngineResult<PeriodResult> {
    let compensable_days = compute_day_count(
        employee.admission_date,
        month,
        holidays,
        policy,
        employee.departure_date,
    );

    let issue_date = compute_issue_date(employee.admission_date, month, holidays)?;
    let issue_date =
        adjust_issue_date_for_departure(issue_date, employee.departure_date, month, holidays);

    Ok(PeriodResult {
        compensable_days,
        issue_date,
    })
}
