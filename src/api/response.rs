//! Response types for the rule management API.
//!
//! This module defines the listing envelope, the error body shape and the
//! mapping from core errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::models::Rule;

/// Envelope for `GET /rules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleListResponse {
    /// The matching rules in repository order (newest first).
    pub rules: Vec<Rule>,
    /// Number of matching rules.
    pub total: usize,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RuleError> for ApiErrorResponse {
    fn from(error: RuleError) -> Self {
        match error {
            RuleError::SeedNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SEED_ERROR",
                    "Seed configuration unavailable",
                    format!("Seed file not found: {}", path),
                ),
            },
            RuleError::SeedParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SEED_ERROR",
                    "Seed configuration unavailable",
                    format!("Failed to parse '{}': {}", path, message),
                ),
            },
            RuleError::RuleNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "RULE_NOT_FOUND",
                    format!("Rule not found: {}", id),
                    format!("No rule with id '{}' exists in the repository", id),
                ),
            },
            RuleError::DuplicateId { id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("DUPLICATE_ID", format!("Duplicate rule id: {}", id)),
            },
            RuleError::IdentityMismatch { expected, found } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "IDENTITY_MISMATCH",
                    "Rule id does not match the target",
                    format!("expected '{}', found '{}'", expected, found),
                ),
            },
            RuleError::InvalidTime { value } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::validation_error(format!("Invalid time value: {}", value)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serializes_without_empty_details() {
        let error = ApiError::new("VALIDATION_ERROR", "name must not be empty");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details() {
        let error = ApiError::with_details("X", "msg", "more");
        assert_eq!(error.details.as_deref(), Some("more"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = RuleError::RuleNotFound {
            id: "R-404".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "RULE_NOT_FOUND");
    }

    #[test]
    fn test_duplicate_id_maps_to_409() {
        let response: ApiErrorResponse = RuleError::DuplicateId {
            id: "R-001".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_identity_mismatch_maps_to_422() {
        let response: ApiErrorResponse = RuleError::IdentityMismatch {
            expected: "R-001".to_string(),
            found: "R-002".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "IDENTITY_MISMATCH");
    }
}
