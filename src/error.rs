use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriangleError {
    #[error("Must have at least one participant")]
    EmptySample,

    #[error("The number of correct participants can not exceed the total number of participants")]
    CorrectExceedsTotal { correct: u64, total: u64 },

    #[error("The number of participants can not exceed {max}")]
    SampleTooLarge { n: u64, max: u64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Null model error: {0}")]
    NullModel(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, TriangleError>;

impl From<std::io::Error> for TriangleError {
    fn from(e: std::io::Error) -> Self {
        TriangleError::Io(e.to_string())
    }
}

impl From<statrs::distribution::BinomialError> for TriangleError {
    fn from(e: statrs::distribution::BinomialError) -> Self {
        TriangleError::NullModel(e.to_string())
    }
}

impl TriangleError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TriangleError::EmptySample => StatusCode::BAD_REQUEST,
            TriangleError::CorrectExceedsTotal { .. } => StatusCode::BAD_REQUEST,
            TriangleError::SampleTooLarge { .. } => StatusCode::BAD_REQUEST,
            TriangleError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TriangleError::NullModel(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TriangleError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TriangleError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code used in JSON error bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            TriangleError::EmptySample => "empty_sample",
            TriangleError::CorrectExceedsTotal { .. } => "correct_exceeds_total",
            TriangleError::SampleTooLarge { .. } => "sample_too_large",
            TriangleError::InvalidInput(_) => "invalid_input",
            TriangleError::NullModel(_) => "internal_error",
            TriangleError::Config(_) => "config_error",
            TriangleError::Io(_) => "io_error",
        }
    }

    /// True for errors caused by the submitted counts rather than the service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TriangleError::EmptySample
                | TriangleError::CorrectExceedsTotal { .. }
                | TriangleError::SampleTooLarge { .. }
                | TriangleError::InvalidInput(_)
        )
    }
}


// Axum IntoResponse implementation (feature-gated)
#[cfg(feature = "axum-support")]
use axum::response::{IntoResponse, Json, Response};
#[cfg(feature = "axum-support")]
use serde::Serialize;

#[cfg(feature = "axum-support")]
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[cfg(feature = "axum-support")]
impl IntoResponse for TriangleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let suggestion = match &self {
            TriangleError::EmptySample => {
                Some("Enter a number of participants of at least 1".to_string())
            }
            TriangleError::CorrectExceedsTotal { total, .. } => Some(format!(
                "Enter a number of correct participants between 0 and {}",
                total
            )),
            TriangleError::SampleTooLarge { max, .. } => Some(format!(
                "Enter a number of participants between 1 and {}",
                max
            )),
            TriangleError::InvalidInput(_) => {
                Some("size and correct must be non-negative integers".to_string())
            }
            _ => None,
        };

        if self.is_validation() {
            tracing::debug!(error = %self, "rejected triangle test input");
        } else {
            tracing::error!(error = %self, "calculation failed");
        }

        let body = ErrorResponse {
            error: self.error_code().to_string(),
            message: self.to_string(),
            request_id: format!("req_tt_{}", uuid::Uuid::new_v4()),
            suggestion,
        };

        (status, Json(body)).into_response()
    }
}
