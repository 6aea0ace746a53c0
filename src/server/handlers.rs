//! HTTP route handlers for the log server.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::error::ApiError;
use super::metrics::Metrics;
use super::request::{AppendRequest, ReadRequest};
use super::response::{to_json_response, AppendResponse, ReadResponse};
use crate::model::Record;
use crate::RecordLog;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<RecordLog>,
    pub metrics: Arc<Metrics>,
}

/// Handle POST /api/v1/log/append
///
/// Decodes the record from the body, appends it, and returns the assigned
/// offset.
pub async fn handle_append(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = AppendRequest::from_json(&body)?;

    let record: Record = request.record.into();
    let bytes_written = record.value.len() as u64;
    let offset = state.log.append(record);

    state.metrics.log_append_records_total.inc();
    state.metrics.log_append_bytes_total.inc_by(bytes_written);

    let response = AppendResponse { offset };
    Ok(to_json_response(&response)?)
}

/// Handle GET /api/v1/log/read
///
/// Decodes the offset from the body and returns the record stored there.
/// An offset past the end of the log yields 404.
pub async fn handle_read(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = ReadRequest::from_json(&body)?;

    let record = state.log.read(request.offset)?;

    state.metrics.log_read_records_total.inc();
    state
        .metrics
        .log_read_bytes_total
        .inc_by(record.value.len() as u64);

    let response = ReadResponse {
        record: record.into(),
    };
    Ok(to_json_response(&response)?)
}

/// Handle GET /metrics
pub async fn handle_metrics(State(state): State<AppState>) -> String {
    state.metrics.encode()
}

/// Handle GET /-/healthy
pub async fn handle_healthy() -> StatusCode {
    StatusCode::OK
}

/// Handle GET /-/ready
pub async fn handle_ready() -> StatusCode {
    StatusCode::OK
}
