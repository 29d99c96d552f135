//! HTTP API module for the voucher engine.
//!
//! Exposes a single endpoint, `POST /receipts`, that turns a roster into a
//! batch of transport-voucher receipts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReceiptRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
