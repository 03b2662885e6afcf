use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures raised by the estimator and the calculation shim around it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// A required selection (equipment, region, name) was not supplied.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// A numeric input is negative, non-finite or outside its accepted range.
    #[error("Invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: String,
    },

    /// Equipment or region lookup failed.
    #[error("Calculation failed: {0}")]
    CalculationFailure(String),
}

impl EstimateError {
    pub fn invalid(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field,
            value,
            reason: reason.into(),
        }
    }
}

/// Errors returned from HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Estimate(EstimateError::MissingInput(_))
            | ApiError::Estimate(EstimateError::InvalidInput { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Estimate(EstimateError::CalculationFailure(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NotFound",
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::Estimate(EstimateError::MissingInput(_)) => "MissingInput",
            ApiError::Estimate(EstimateError::InvalidInput { .. }) => "InvalidInput",
            ApiError::Estimate(EstimateError::CalculationFailure(_)) => "CalculationFailure",
            ApiError::Internal(_) => "InternalServerError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_type = self.error_type();

        let message = match &self {
            ApiError::Internal(_) => {
                tracing::error!(error = %self, "API error occurred");
                "An internal error occurred".to_string()
            }
            _ => {
                tracing::debug!(error = %self, "Client error");
                self.to_string()
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::NotFound("scenario".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(EstimateError::MissingInput("panelId".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(EstimateError::invalid("quantity", -1.0, "must not be negative"))
                .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(EstimateError::CalculationFailure("unknown panel".to_string()))
                .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal("lock poisoned".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ApiError::from(EstimateError::MissingInput("location".to_string())).error_type(),
            "MissingInput"
        );
        assert_eq!(
            ApiError::from(EstimateError::CalculationFailure("x".to_string())).error_type(),
            "CalculationFailure"
        );
    }

    #[test]
    fn test_error_display() {
        let error = EstimateError::invalid("head", -3.0, "must not be negative");
        assert_eq!(
            error.to_string(),
            "Invalid input for head: -3 (must not be negative)"
        );
        // Estimate errors surface their own message through the API wrapper.
        assert_eq!(ApiError::from(error.clone()).to_string(), error.to_string());
    }
}
