//! API models for the mathbox computation endpoints.
//!
//! Three POST endpoints accept type-validated integer arguments and return
//! an [`OperationResponse`]. Results are encoded as decimal strings, never
//! JSON numbers: values like `factorial(30)` exceed every fixed-width
//! integer and would lose precision in any number-typed field.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engine::Operation;

/// Body of `POST /power`.
#[derive(Debug, Clone, Deserialize)]
pub struct PowerRequest {
    pub base: i64,
    pub exponent: i64,
}

/// Body of `POST /fibonacci` and `POST /factorial`.
#[derive(Debug, Clone, Deserialize)]
pub struct SingleIntRequest {
    pub n: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OperationResponse {
    pub operation: Operation,
    /// Decimal string encoding of the computed value.
    pub result: String,
    /// Assigned operation-log record id; `null` when logging failed.
    pub record_id: Option<u64>,
    /// Whether the invocation was durably recorded. A `false` here never
    /// invalidates `result`.
    pub logged: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub components: HashMap<String, String>,
    pub version: String,
}
