//! Batch processing of a whole roster.
//!
//! One call turns a roster and the run-wide parameters (reference month,
//! holidays, policy) into a [`ReceiptBatch`].

use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, HolidaySet, Policy, ReceiptBatch, ReceiptRecord,
    ReferenceMonth, SkippedRow,
};
use crate::roster::read_roster;

use super::receipt::build_receipt;

/// Run-wide parameters and the roster for one batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchInput<'a> {
    /// Reference month as `YYYY-MM`.
    pub reference_month: &'a str,
    /// Free-text `DD/MM` holiday list for the reference year.
    pub holidays: Option<&'a str>,
    /// Extra holidays (e.g. configured national holidays) merged into `holidays`.
    pub additional_holidays: Option<&'a str>,
    /// Policy for the whole run.
    pub policy: Policy,
    /// The roster as CSV text.
    pub roster_csv: &'a str,
}

/// Computes a receipt for every valid roster row.
///
/// Malformed rows, employees admitted after the reference month, and rows
/// whose receipt cannot be built are skipped and listed in
/// [`ReceiptBatch::skipped_rows`] with an audit warning.
///
/// # Errors
///
/// Fails for problems that affect the whole run: an invalid reference month
/// ([`EngineError::InvalidReferenceMonth`](crate::error::EngineError::InvalidReferenceMonth))
/// or an unreadable roster header
/// ([`EngineError::RosterParseError`](crate::error::EngineError::RosterParseError)).
///
/// # Example
///
/// ```
/// use vt_engine::calculation::{BatchInput, calculate_batch};
///
/// let batch = calculate_batch(&BatchInput {
///     reference_month: "2024-03",
///     roster_csv: "nome,data_admissao,valor_conducao\nAna,2024-03-15,5.20\n",
///     ..Default::default()
/// })
/// .unwrap();
///
/// assert_eq!(batch.receipts.len(), 1);
/// assert_eq!(batch.receipts[0].compensable_days, 11);
/// ```
pub fn calculate_batch(input: &BatchInput<'_>) -> EngineResult<ReceiptBatch> {
    let start_time = Instant::now();

    let month: ReferenceMonth = input.reference_month.parse()?;
    let holidays = HolidaySet::parse(input.holidays, month.year())
        .union(&HolidaySet::parse(input.additional_holidays, month.year()));
    let roster = read_roster(input.roster_csv)?;

    info!(
        reference_month = %month,
        rows = roster.entries.len() + roster.skipped.len(),
        holidays = holidays.len(),
        consider_alternating_saturdays = input.policy.consider_alternating_saturdays,
        "Processing roster"
    );

    let mut receipts: Vec<ReceiptRecord> = Vec::with_capacity(roster.entries.len());
    let mut skipped_rows: Vec<SkippedRow> = roster.skipped;
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    for row in &skipped_rows {
        warn!(line = row.line, reason = %row.reason, "Skipping roster row");
    }

    for entry in &roster.entries {
        if entry.employee.admission_date > month.last_day() {
            warn!(line = entry.line, employee = %entry.employee.name, "Admission after reference month");
            skipped_rows.push(SkippedRow {
                line: entry.line,
                reason: format!(
                    "admission date {} is after {}",
                    entry.employee.admission_date, month
                ),
            });
            continue;
        }

        match build_receipt(&entry.employee, month, &holidays, input.policy, step_number) {
            Ok(calculation) => {
                step_number += calculation.audit_steps.len() as u32;
                steps.extend(calculation.audit_steps);

                if calculation.record.compensable_days == 0 {
                    warnings.push(AuditWarning {
                        code: "NO_COMPENSABLE_DAYS".to_string(),
                        message: format!(
                            "{} (row {}) has no compensable days in {}",
                            calculation.record.name, entry.line, month
                        ),
                        severity: "low".to_string(),
                    });
                }
                receipts.push(calculation.record);
            }
            Err(err) => {
                warn!(line = entry.line, employee = %entry.employee.name, error = %err, "Receipt calculation failed");
                skipped_rows.push(SkippedRow {
                    line: entry.line,
                    reason: err.to_string(),
                });
            }
        }
    }

    skipped_rows.sort_by_key(|row| row.line);
    warnings.extend(skipped_rows.iter().map(|row| AuditWarning {
        code: "ROW_SKIPPED".to_string(),
        message: format!("Row {} skipped: {}", row.line, row.reason),
        severity: "medium".to_string(),
    }));

    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        reference_month = %month,
        receipts = receipts.len(),
        skipped = skipped_rows.len(),
        duration_us,
        "Roster processed"
    );

    Ok(ReceiptBatch {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        reference_month: month,
        receipts,
        skipped_rows,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const ROSTER: &str = "nome,data_admissao,valor_conducao,data_saida\n\
                          Ana,2024-03-15,5.20,\n\
                          Bruno,2020-01-10,4.40,2024-03-13\n\
                          ,2024-03-01,4.40,\n\
                          Carla,2019-06-01,5.00,2024-02-10\n";

    fn input(roster: &str) -> BatchInput<'_> {
        BatchInput {
            reference_month: "2024-03",
            roster_csv: roster,
            ..Default::default()
        }
    }

    #[test]
    fn test_batch_processes_rows_in_order() {
        let batch = calculate_batch(&input(ROSTER)).unwrap();

        let names: Vec<&str> = batch.receipts.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);

        assert_eq!(batch.receipts[0].compensable_days, 11);
        assert_eq!(batch.receipts[0].total, dec("114.40"));
        assert_eq!(batch.receipts[1].compensable_days, 9);
        assert_eq!(batch.receipts[1].total, dec("79.20"));
        assert_eq!(batch.receipts[2].compensable_days, 0);
        assert_eq!(batch.grand_total(), dec("193.60"));
    }

    #[test]
    fn test_batch_records_skipped_rows_and_warnings() {
        let batch = calculate_batch(&input(ROSTER)).unwrap();

        assert_eq!(batch.skipped_rows.len(), 1);
        assert_eq!(batch.skipped_rows[0].line, 3);
        assert_eq!(batch.skipped_rows[0].reason, "missing name");

        let codes: Vec<&str> = batch
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        assert_eq!(codes, vec!["NO_COMPENSABLE_DAYS", "ROW_SKIPPED"]);
    }

    #[test]
    fn test_batch_audit_steps_are_sequential() {
        let batch = calculate_batch(&input(ROSTER)).unwrap();
        let numbers: Vec<u32> = batch.audit_trace.steps.iter().map(|s| s.step_number).collect();
        let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
        assert_eq!(numbers, expected);
        assert_eq!(numbers.len(), 9);
    }

    #[test]
    fn test_batch_merges_additional_holidays() {
        let roster = "nome,data_admissao,valor_conducao\nAna,2020-01-01,1.00\n";
        let batch = calculate_batch(&BatchInput {
            reference_month: "2024-03",
            holidays: Some("28/03"),
            additional_holidays: Some("29/03"),
            policy: Policy::default(),
            roster_csv: roster,
        })
        .unwrap();
        assert_eq!(batch.receipts[0].compensable_days, 19);
    }

    #[test]
    fn test_batch_applies_policy() {
        let roster = "nome,data_admissao,valor_conducao\nAna,2020-01-01,1.00\n";
        let batch = calculate_batch(&BatchInput {
            reference_month: "2024-03",
            policy: Policy::with_alternating_saturdays(),
            roster_csv: roster,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(batch.receipts[0].compensable_days, 24);
        assert_eq!(batch.receipts[0].issue_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_batch_invalid_reference_month_is_fatal() {
        let result = calculate_batch(&BatchInput {
            reference_month: "03/2024",
            roster_csv: ROSTER,
            ..Default::default()
        });
        assert!(matches!(result, Err(EngineError::InvalidReferenceMonth { .. })));
    }

    #[test]
    fn test_batch_missing_column_is_fatal() {
        let result = calculate_batch(&input("nome,valor_conducao\nAna,1.00\n"));
        assert!(matches!(result, Err(EngineError::RosterParseError { .. })));
    }

    #[test]
    fn test_batch_row_with_unwritable_total_is_skipped() {
        let roster = "nome,data_admissao,valor_conducao\nAna,2020-01-01,50000000\nBia,2020-01-01,1.00\n";
        let batch = calculate_batch(&input(roster)).unwrap();
        assert_eq!(batch.receipts.len(), 1);
        assert_eq!(batch.receipts[0].name, "Bia");
        assert_eq!(batch.skipped_rows[0].line, 1);
        assert!(batch.skipped_rows[0].reason.contains("outside the supported range"));
    }

    #[test]
    fn test_batch_overflowing_value_skips_row() {
        let roster = "nome,data_admissao,valor_conducao\n\
                      Ana,2024-01-01,79228162514264337593543950335\n\
                      Bia,2024-01-01,1.00\n";
        let batch = calculate_batch(&BatchInput {
            reference_month: "2024-01",
            roster_csv: roster,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(batch.receipts.len(), 1);
        assert_eq!(batch.receipts[0].name, "Bia");
        assert_eq!(batch.receipts[0].total, dec("46.00"));
        assert_eq!(batch.skipped_rows.len(), 1);
        assert_eq!(batch.skipped_rows[0].line, 1);
        assert!(batch.skipped_rows[0].reason.contains("outside the supported range"));
    }

    #[test]
    fn test_batch_admission_after_month_skips_row() {
        let roster = "nome,data_admissao,valor_conducao\nAna,2024-04-10,5.00\nBia,2024-03-31,5.00\n";
        let batch = calculate_batch(&input(roster)).unwrap();

        // Admitted on the last day (a Sunday): kept, with zero days
        assert_eq!(batch.receipts.len(), 1);
        assert_eq!(batch.receipts[0].name, "Bia");
        assert_eq!(batch.receipts[0].compensable_days, 0);

        assert_eq!(batch.skipped_rows.len(), 1);
        assert_eq!(batch.skipped_rows[0].line, 1);
        assert_eq!(
            batch.skipped_rows[0].reason,
            "admission date 2024-04-10 is after 2024-03"
        );
        assert!(batch.receipts.iter().all(|r| r.issue_date <= date_in_march(31)));
    }

    fn date_in_march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }
}
