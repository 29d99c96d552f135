//! Business-day predicate.
//!
//! Decides, for a single calendar date, whether it is a compensable working
//! day given the holiday set and the alternating-Saturday policy.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{HolidaySet, Policy};

/// Returns true for Monday through Friday.
///
/// # Example
///
/// ```
/// use vt_engine::calculation::is_weekday;
/// use chrono::NaiveDate;
///
/// // 2024-03-15 is a Friday, 2024-03-16 a Saturday
/// assert!(is_weekday(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
/// assert!(!is_weekday(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()));
/// ```
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if `date` is a weekday that is not a holiday.
///
/// This is the rule used when choosing an issue date; it never accepts a
/// Saturday, whatever the alternating-Saturday policy says.
pub fn is_issue_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    is_weekday(date) && !holidays.contains(date)
}

/// Selects every other Saturday between `start` and `end` inclusive.
///
/// Saturdays are enumerated in ascending order and those at an even
/// zero-based position are kept (1st, 3rd, 5th...), so the cadence is anchored
/// to `start`, not to the first Saturday of the calendar month.
///
/// # Example
///
/// ```
/// use vt_engine::calculation::alternating_saturdays;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// let saturdays = alternating_saturdays(start, end);
/// // Saturdays in March 2024: 2, 9, 16, 23, 30
/// assert_eq!(
///     saturdays,
///     vec![
///         NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 3, 30).unwrap(),
///     ]
/// );
/// ```
pub fn alternating_saturdays(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }

    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| d.weekday() == Weekday::Sat)
        .step_by(2)
        .collect()
}

/// The compensable-day rule for one employee's clamped period.
///
/// A date is compensable when it is not a holiday and it is either a weekday
/// or, with the policy enabled, one of the alternating Saturdays of the
/// period the predicate was built for.
///
/// # Example
///
/// ```
/// use vt_engine::calculation::BusinessDayPredicate;
/// use vt_engine::models::{HolidaySet, Policy};
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::parse(Some("29/03"), 2024);
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// let predicate = BusinessDayPredicate::new(&holidays, Policy::with_alternating_saturdays(), start, end);
///
/// assert!(predicate.is_compensable(NaiveDate::from_ymd_opt(2024, 3, 28).unwrap()));
/// assert!(!predicate.is_compensable(NaiveDate::from_ymd_opt(2024, 3, 29).unwrap())); // holiday
/// assert!(predicate.is_compensable(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap())); // 1st Saturday
/// assert!(!predicate.is_compensable(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())); // 2nd Saturday
/// ```
#[derive(Debug, Clone)]
pub struct BusinessDayPredicate<'a> {
    holidays: &'a HolidaySet,
    policy: Policy,
    alternating_saturdays: HashSet<NaiveDate>,
}

impl<'a> BusinessDayPredicate<'a> {
    /// Builds the predicate for the clamped period `start..=end`.
    ///
    /// The alternating-Saturday set is only computed when the policy enables it.
    pub fn new(holidays: &'a HolidaySet, policy: Policy, start: NaiveDate, end: NaiveDate) -> Self {
        let alternating_saturdays = if policy.consider_alternating_saturdays {
            alternating_saturdays(start, end).into_iter().collect()
        } else {
            HashSet::new()
        };

        Self {
            holidays,
            policy,
            alternating_saturdays,
        }
    }

    /// Returns true if `date` counts as a compensable day.
    pub fn is_compensable(&self, date: NaiveDate) -> bool {
        if self.holidays.contains(date) {
            return false;
        }
        is_weekday(date) || self.is_alternating_saturday(date)
    }

    /// Returns true if `date` is one of the alternating Saturdays in effect.
    pub fn is_alternating_saturday(&self, date: NaiveDate) -> bool {
        self.policy.consider_alternating_saturdays && self.alternating_saturdays.contains(&date)
    }

    /// Number of alternating Saturdays in effect for the period.
    pub fn alternating_saturday_count(&self) -> usize {
        self.alternating_saturdays.len()
    }
}
