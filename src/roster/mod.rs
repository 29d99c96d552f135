//! Roster input.
//!
//! Reads the employee roster from CSV text with the columns `nome`,
//! `data_admissao` (`YYYY-MM-DD`), `valor_conducao` (decimal) and an optional
//! `data_saida` (`YYYY-MM-DD`). Rows that cannot be used are skipped and
//! reported rather than failing the whole roster.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeInput, SkippedRow};

/// Columns every roster must have.
pub const REQUIRED_COLUMNS: [&str; 3] = ["nome", "data_admissao", "valor_conducao"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One raw CSV record; every field is optional so a bad row never aborts the read.
#[derive(Debug, Default, Deserialize)]
struct RosterRecord {
    #[serde(default)]
    nome: Option<String>,
    #[serde(default)]
    data_admissao: Option<String>,
    #[serde(default)]
    valor_conducao: Option<String>,
    #[serde(default)]
    data_saida: Option<String>,
}

/// A valid roster row.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    /// 1-based data row number (the header is not counted).
    pub line: usize,
    /// The validated employee.
    pub employee: EmployeeInput,
}

/// The parsed roster: valid entries and skipped rows, both in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    /// Rows that produced a valid employee.
    pub entries: Vec<RosterEntry>,
    /// Rows that were skipped, with the reason.
    pub skipped: Vec<SkippedRow>,
}

/// Reads a roster from CSV text.
///
/// # Errors
///
/// Returns [`EngineError::RosterParseError`] if the header cannot be read or
/// lacks one of [`REQUIRED_COLUMNS`]. Problems confined to one row only skip
/// that row.
///
/// # Example
///
/// ```
/// use vt_engine::roster::read_roster;
///
/// let csv = "nome,data_admissao,valor_conducao,data_saida\n\
///            Ana,2024-03-15,4.40,\n\
///            ,2024-03-01,4.40,\n";
/// let roster = read_roster(csv).unwrap();
/// assert_eq!(roster.entries.len(), 1);
/// assert_eq!(roster.skipped.len(), 1);
/// assert_eq!(roster.skipped[0].line, 2);
/// ```
pub fn read_roster(csv_text: &str) -> EngineResult<Roster> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| EngineError::RosterParseError {
            message: e.to_string(),
        })?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(EngineError::RosterParseError {
                message: format!("missing column '{}'", column),
            });
        }
    }

    let mut roster = Roster::default();

    for (index, result) in reader.deserialize::<RosterRecord>().enumerate() {
        let line = index + 1;
        let parsed = result
            .map_err(|e| format!("unreadable row: {}", e))
            .and_then(|record| parse_record(record, line));

        match parsed {
            Ok(employee) => roster.entries.push(RosterEntry { line, employee }),
            Err(reason) => roster.skipped.push(SkippedRow { line, reason }),
        }
    }

    Ok(roster)
}

fn parse_record(record: RosterRecord, line: usize) -> Result<EmployeeInput, String> {
    let name = non_empty(record.nome).ok_or("missing name")?;

    let admission_raw = non_empty(record.data_admissao).ok_or("missing admission date")?;
    let admission_date = NaiveDate::parse_from_str(&admission_raw, DATE_FORMAT)
        .map_err(|_| format!("invalid admission date '{}'", admission_raw))?;

    let value_raw = non_empty(record.valor_conducao).ok_or("missing transport value")?;
    let daily_value = Decimal::from_str(&value_raw)
        .map_err(|_| format!("invalid transport value '{}'", value_raw))?;

    let departure_date = non_empty(record.data_saida).and_then(|raw| {
        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                debug!(line, data_saida = %raw, "Ignoring malformed departure date");
                None
            }
        }
    });

    EmployeeInput::new(&name, admission_date, departure_date, daily_value).map_err(|e| e.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
