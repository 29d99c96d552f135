//! Reference month model.
//!
//! This module contains the [`ReferenceMonth`] type identifying the calendar
//! month a reimbursement is calculated for.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// Portuguese month names, indexed by `month - 1`.
const MONTH_NAMES_PT: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Returns the Portuguese name of a month (1-based).
///
/// Out-of-range months yield an empty string.
///
/// # Example
///
/// ```
/// use vt_engine::models::month_name_pt;
///
/// assert_eq!(month_name_pt(3), "Março");
/// assert_eq!(month_name_pt(12), "Dezembro");
/// ```
pub fn month_name_pt(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES_PT[(month - 1) as usize],
        _ => "",
    }
}

/// A (year, month) pair identifying the payment period.
///
/// A `ReferenceMonth` can only be built for a month chrono can represent, so
/// [`first_day`](Self::first_day) and [`last_day`](Self::last_day) are always
/// available.
///
/// # Example
///
/// ```
/// use vt_engine::models::ReferenceMonth;
/// use chrono::NaiveDate;
///
/// let month: ReferenceMonth = "2024-02".parse().unwrap();
/// assert_eq!(month.days_in_month(), 29);
/// assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(month.to_string(), "2024-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReferenceMonth {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl ReferenceMonth {
    /// Creates a reference month, rejecting months outside 1..=12 or years
    /// chrono cannot represent.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidReferenceMonth {
            value: format!("{:04}-{:02}", year, month),
        };

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let last_day = next_month_start
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    /// Returns the reference month containing `date`.
    pub fn of(date: NaiveDate) -> EngineResult<Self> {
        Self::new(date.year(), date.month())
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month (1-based).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Number of days in the month (28 to 31, leap-year aware).
    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    /// Checks if a date falls within this month (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }

    /// The Portuguese name of the month (e.g. "Março").
    pub fn month_name(&self) -> &'static str {
        month_name_pt(self.month)
    }

    /// Iterates every calendar day of the month in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first_day.iter_days().take_while(|d| *d <= self.last_day)
    }
}

impl FromStr for ReferenceMonth {
    type Err = EngineError;

    /// Parses a strict `YYYY-MM` value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidReferenceMonth {
            value: s.to_string(),
        };

        let trimmed = s.trim();
        let (year_part, month_part) = trimmed.split_once('-').ok_or_else(invalid)?;

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid());
        }
        if !all_digits(year_part) || !all_digits(month_part) {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for ReferenceMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReferenceMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
