use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use super::{
    error::ApiError,
    models::{HealthResponse, OperationResponse, PowerRequest, SingleIntRequest},
    state::AppState,
};
use crate::service::OperationRequest;

/// `POST /power` — compute `base ^ exponent`.
pub async fn compute_power(
    State(state): State<AppState>,
    Json(body): Json<PowerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    respond(
        &state,
        OperationRequest::Power {
            base: body.base,
            exponent: body.exponent,
        },
    )
}

/// `POST /fibonacci` — compute the n-th Fibonacci number.
pub async fn compute_fibonacci(
    State(state): State<AppState>,
    Json(body): Json<SingleIntRequest>,
) -> Result<impl IntoResponse, ApiError> {
    respond(&state, OperationRequest::Fibonacci { n: body.n })
}

/// `POST /factorial` — compute `n!`.
pub async fn compute_factorial(
    State(state): State<AppState>,
    Json(body): Json<SingleIntRequest>,
) -> Result<impl IntoResponse, ApiError> {
    respond(&state, OperationRequest::Factorial { n: body.n })
}

/// Shared request flow: compute via the service, then report the result
/// together with the logging outcome.
///
/// Domain errors become 400 responses and never reach the log. A logging
/// failure still yields 200 with the computed value; `logged: false` and a
/// null `record_id` flag the record as lost.
fn respond(
    state: &AppState,
    request: OperationRequest,
) -> Result<(StatusCode, Json<OperationResponse>), ApiError> {
    let outcome = state.service.execute(request)?;
    state.metrics.operation_computed();

    let (record_id, logged) = match outcome.log {
        Ok(id) => {
            state.metrics.record_appended();
            (Some(id), true)
        }
        Err(_) => {
            state.metrics.append_failed();
            (None, false)
        }
    };

    Ok((
        StatusCode::OK,
        Json(OperationResponse {
            operation: outcome.operation,
            result: outcome.value,
            record_id,
            logged,
        }),
    ))
}

/// `GET /` — welcome message.
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the mathbox service!" }))
}

/// Health check endpoint (GET /health)
///
/// Reports per-component health:
/// - api: Axum HTTP server
/// - ledger: operation log (Fjall keyspace)
///
/// Returns 503 Service Unavailable if any component is unhealthy,
/// 200 OK otherwise.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    use std::collections::HashMap;

    let mut components = HashMap::new();
    components.insert("api".to_string(), "healthy".to_string());

    let ledger_status = match state.store.len() {
        Ok(_) => "healthy",
        Err(_) => "unavailable",
    };
    components.insert("ledger".to_string(), ledger_status.to_string());

    let all_healthy = components.values().all(|status| status == "healthy");
    let overall_status = if all_healthy { "healthy" } else { "unhealthy" };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: overall_status.to_string(),
        components,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (status_code, Json(response))
}
