//! API response types.

use serde::Serialize;

use crate::estimator::{EstimateInput, EstimateResult};
use crate::report::SavingsReport;

/// Successful estimate: the accepted input, raw numbers, and display strings.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub input: EstimateInput,
    pub result: EstimateResult,
    pub display: SavingsReport,
}

impl EstimateResponse {
    pub fn new(input: EstimateInput, result: EstimateResult) -> Self {
        Self {
            display: SavingsReport::new(&result),
            input,
            result,
        }
    }
}

/// Error body for rejected requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// User-facing prompt.
    pub error: String,
    /// Required quote fields left empty, when that is the cause.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<&'static str>,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            missing_fields: Vec::new(),
        }
    }
}
