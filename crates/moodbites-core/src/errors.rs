// ABOUTME: Unified error taxonomy shared by validation, scanning, and upload flows
// ABOUTME: Defines ErrorCode ranges, AppError with context, and HTTP-style error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

//! # Unified Error Handling System
//!
//! Every failure in the kitchen core is one of four kinds:
//!
//! - **Validation** (3000 range): a single form field was rejected, the user edits and resubmits
//! - **Non-food content** (3000 range): the cross-field guard found disallowed terms
//! - **Upload** (5000 range): the image host or recipe API refused the submission
//! - **External service** (5000 range): a recipe or detection service failed; recipe
//!   refresh logs these and degrades instead of surfacing them
//!
//! None of them is fatal to the process.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    InvalidInput = 3000,
    /// A form field failed its validator
    ValidationFailed = 3001,
    /// Cross-field guard found non-food terms
    NonFoodContent = 3002,
    /// Operation not allowed in the current session state
    InvalidStateTransition = 3003,

    // Resource Management (4000-4999)
    /// Referenced item does not exist
    ResourceNotFound = 4000,
    /// Item already present
    ResourceAlreadyExists = 4001,

    // External Services (5000-5999)
    /// Upstream service returned an error or unparseable body
    ExternalServiceError = 5000,
    /// Upstream service could not be reached or timed out
    ExternalServiceUnavailable = 5001,
    /// Image upload or recipe creation was rejected
    UploadFailed = 5002,

    // Configuration (6000-6999)
    /// Required configuration is missing
    ConfigMissing = 6001,
    /// Configuration value is malformed
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// JSON encode/decode failure
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::ValidationFailed | Self::NonFoodContent => 400,
            Self::ResourceNotFound => 404,
            Self::InvalidStateTransition | Self::ResourceAlreadyExists => 409,
            Self::ExternalServiceError | Self::UploadFailed => 502,
            Self::ExternalServiceUnavailable => 503,
            Self::ConfigMissing
            | Self::ConfigInvalid
            | Self::InternalError
            | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValidationFailed => "A form field failed validation",
            Self::NonFoodContent => "The submission contains non-food content",
            Self::InvalidStateTransition => "The action is not allowed right now",
            Self::ResourceNotFound => "The requested item was not found",
            Self::ResourceAlreadyExists => "The item has already been added",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::UploadFailed => "The upload could not be completed",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the user can fix this by editing input and retrying
    #[must_use]
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::ValidationFailed
                | Self::NonFoodContent
                | Self::ResourceAlreadyExists
        )
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Form field the error refers to, if any
    pub field: Option<String>,
    /// Upstream service name, if any
    pub service: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            field: None,
            service: None,
            details: serde_json::Value::Null,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the form field this error belongs to
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    /// Attach the upstream service name
    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.context.service = Some(service.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serialized error body returned to UI layers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload inside [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Offending form field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Extra context
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                field: error.context.field,
                details: error.context.details,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A single form field failed validation
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_field(field)
    }

    /// The cross-field guard found disallowed terms
    pub fn non_food_content(terms: &[String]) -> Self {
        Self::new(
            ErrorCode::NonFoodContent,
            format!(
                "Please remove non-food terms from your recipe: {}",
                terms.join(", ")
            ),
        )
        .with_details(serde_json::json!({ "terms": terms }))
    }

    /// Session action not allowed in the current state
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidStateTransition, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Resource already exists
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{} has already been added", resource.into()),
        )
    }

    /// Upload or recipe creation rejected; message is kept verbatim
    pub fn upload_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UploadFailed, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        let service = service.into();
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
        .with_service(service)
    }

    /// External service unreachable or timed out
    pub fn service_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        let service = service.into();
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{service}: {}", message.into()),
        )
        .with_service(service)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::new(ErrorCode::InternalError, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-errors")]
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        let code = if error.is_timeout() || error.is_connect() {
            ErrorCode::ExternalServiceUnavailable
        } else {
            ErrorCode::ExternalServiceError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), 400);
        assert_eq!(ErrorCode::NonFoodContent.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::UploadFailed.http_status(), 502);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_validation_error_carries_field() {
        let error = AppError::validation("title", "Title is required");

        assert_eq!(error.code, ErrorCode::ValidationFailed);
        assert_eq!(error.context.field.as_deref(), Some("title"));
        assert!(error.code.is_user_recoverable());
    }

    #[test]
    fn test_non_food_content_lists_terms() {
        let terms = vec!["laptop".to_owned(), "tyre".to_owned()];
        let error = AppError::non_food_content(&terms);

        assert!(error.message.contains("laptop, tyre"));
        let response = ErrorResponse::from(error);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("NON_FOOD_CONTENT"));
        assert!(json.contains("tyre"));
    }

    #[test]
    fn test_upload_error_keeps_message_verbatim() {
        let error = AppError::upload_failed("File too large for hosting plan");
        assert_eq!(error.message, "File too large for hosting plan");
        assert!(!error.code.is_user_recoverable());
    }
}
