//! Request types for the voucher engine API.
//!
//! This module defines the JSON request structure for the `/receipts` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the `/receipts` endpoint.
///
/// Carries the run-wide parameters and the roster as CSV text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptRequest {
    /// Reference month as `YYYY-MM`.
    pub reference_month: String,
    /// Comma-separated `DD/MM` holidays for the reference year.
    #[serde(default)]
    pub holidays: Option<String>,
    /// Alternating-Saturday policy; falls back to the configured default when absent.
    #[serde(default)]
    pub consider_alternating_saturdays: Option<bool>,
    /// Whether to merge the configured national holidays into `holidays`.
    #[serde(default)]
    pub include_national_holidays: bool,
    /// Roster CSV with a `nome,data_admissao,valor_conducao[,data_saida]` header.
    pub roster_csv: String,
}
