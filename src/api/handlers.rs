//! HTTP request handlers for the voucher engine API.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{BatchInput, calculate_batch};

use super::request::ReceiptRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts", post(receipts_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

/// Handler for POST /receipts.
///
/// Computes one receipt per valid roster row and returns the whole batch.
async fn receipts_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing receipts request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let config = state.config();
    let input = BatchInput {
        reference_month: &request.reference_month,
        holidays: request.holidays.as_deref(),
        additional_holidays: if request.include_national_holidays {
            config.national_holidays()
        } else {
            None
        },
        policy: config.policy(request.consider_alternating_saturdays),
        roster_csv: &request.roster_csv,
    };

    match calculate_batch(&input) {
        Ok(batch) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %batch.calculation_id,
                reference_month = %batch.reference_month,
                receipts = batch.receipts.len(),
                skipped = batch.skipped_rows.len(),
                grand_total = %batch.grand_total(),
                "Receipts computed"
            );
            json_response(StatusCode::OK, batch)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Receipt calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}
