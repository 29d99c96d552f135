//! Transport-voucher receipt engine.
//!
//! This crate computes monthly transport-voucher ("vale-transporte") receipts
//! for a roster of employees: compensable business days in a reference month,
//! the receipt issue date, the total owed, and the total written out in
//! Portuguese words. Results are served over HTTP by the `vt-engine` binary.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
