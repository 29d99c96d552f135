//! Employee model.
//!
//! This module defines the [`EmployeeInput`] struct, one validated roster row.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents one employee entitled to transportation vouchers.
///
/// # Example
///
/// ```
/// use vt_engine::models::EmployeeInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = EmployeeInput::new(
///     "  Maria Silva ",
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///     None,
///     Decimal::from_str("4.40").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(employee.name, "Maria Silva");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    /// The employee's name, trimmed and non-empty.
    pub name: String,
    /// The date the employee was admitted.
    pub admission_date: NaiveDate,
    /// The date the employee left, if any.
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    /// Transport value per voucher (one trip).
    pub daily_value: Decimal,
}

impl EmployeeInput {
    /// Creates a validated employee record.
    ///
    /// Fails with [`EngineError::InvalidEmployee`] if the trimmed name is empty
    /// or the transport value is negative.
    pub fn new(
        name: &str,
        admission_date: NaiveDate,
        departure_date: Option<NaiveDate>,
        daily_value: Decimal,
    ) -> EngineResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "nome".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if daily_value < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "valor_conducao".to_string(),
                message: format!("must not be negative, got {}", daily_value),
            });
        }

        Ok(Self {
            name: name.to_string(),
            admission_date,
            departure_date,
            daily_value,
        })
    }

    /// Returns true if the employee has a departure date on or before `date`.
    pub fn has_left_by(&self, date: NaiveDate) -> bool {
        self.departure_date.is_some_and(|d| d <= date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_trims_name() {
        let employee = EmployeeInput::new(" João ", date(2024, 1, 2), None, dec("5.00")).unwrap();
        assert_eq!(employee.name, "João");
        assert_eq!(employee.daily_value, dec("5.00"));
        assert!(employee.departure_date.is_none());
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let result = EmployeeInput::new("   ", date(2024, 1, 2), None, dec("5.00"));
        match result {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "nome"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_negative_value() {
        let result = EmployeeInput::new("Ana", date(2024, 1, 2), None, dec("-0.01"));
        match result {
            Err(EngineError::InvalidEmployee { field, message }) => {
                assert_eq!(field, "valor_conducao");
                assert!(message.contains("-0.01"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_new_accepts_zero_value() {
        assert!(EmployeeInput::new("Ana", date(2024, 1, 2), None, Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_has_left_by() {
        let employee = EmployeeInput::new(
            "Ana",
            date(2024, 1, 2),
            Some(date(2024, 3, 10)),
            dec("4.40"),
        )
        .unwrap();
        assert!(employee.has_left_by(date(2024, 3, 10)));
        assert!(employee.has_left_by(date(2024, 3, 31)));
        assert!(!employee.has_left_by(date(2024, 3, 9)));
    }

    #[test]
    fn test_deserialize_without_departure() {
        let json = r#"{
            "name": "Ana",
            "admission_date": "2024-01-02",
            "daily_value": "4.40"
        }"#;
        let employee: EmployeeInput = serde_json::from_str(json).unwrap();
        assert_eq!(employee.departure_date, None);
        assert_eq!(employee.daily_value, dec("4.40"));
    }
}
