//! Holiday set model.
//!
//! Holidays arrive as free text ("01/01, 21/04, 25/12") and are resolved
//! against a single reference year.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A set of holiday dates sharing one reference year.
///
/// Built with [`HolidaySet::parse`], which never fails: tokens that are not a
/// valid `DD/MM` day for the year are dropped. Dates outside the reference
/// month are kept; they simply never match.
///
/// # Example
///
/// ```
/// use vt_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::parse(Some("01/01, 31/02, 21/04, bogus"), 2024);
/// assert_eq!(holidays.len(), 2);
/// assert!(holidays.contains(NaiveDate::from_ymd_opt(2024, 4, 21).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    year: i32,
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty holiday set for the given year.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            dates: HashSet::new(),
        }
    }

    /// Parses a comma-separated list of `DD/MM` tokens for `year`.
    ///
    /// Empty tokens are skipped. Tokens with the wrong number of parts,
    /// non-numeric parts, or a day that does not exist in that month are
    /// silently dropped.
    pub fn parse(text: Option<&str>, year: i32) -> Self {
        let dates = text
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| parse_token(token, year))
            .collect();

        Self { year, dates }
    }

    /// The reference year all dates belong to.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns true if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates the holiday dates in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }

    /// Returns a new set containing the holidays of both sets.
    ///
    /// Dates from `other` that belong to a different year are not carried over.
    pub fn union(&self, other: &HolidaySet) -> HolidaySet {
        let mut dates = self.dates.clone();
        dates.extend(other.dates.iter().filter(|d| d.year() == self.year));
        HolidaySet {
            year: self.year,
            dates,
        }
    }
}

fn parse_token(token: &str, year: i32) -> Option<NaiveDate> {
    let mut parts = token.split('/');
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
