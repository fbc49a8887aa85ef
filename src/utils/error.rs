//! Error handling for the API
//!
//! This module defines all error types used throughout the service.

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Result type alias for the API
pub type Result<T> = std::result::Result<T, ApiError>;

/// Main error type for the API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (malformed or missing required fields)
    #[error("{0}")]
    Validation(String),

    /// Unexpected failures inside sanitize/summarize/assemble
    #[error("Processing failed: {0}")]
    Processing(String),

    /// Failures on the file upload path
    #[error("Upload processing failed: {0}")]
    Upload(String),

    /// Unknown route
    #[error("Endpoint not found")]
    NotFound,

    /// Known route, wrong HTTP method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(message) => json!({ "error": message }),
            ApiError::NotFound => json!({
                "error": "Endpoint not found",
                "message": "Please check the API documentation at the root endpoint '/'",
            }),
            ApiError::MethodNotAllowed => json!({
                "error": "Method not allowed",
                "message": "Please check the allowed methods for this endpoint",
            }),
            ApiError::Internal(_) => json!({
                "error": "Internal server error",
                "message": "Something went wrong on the server",
            }),
            other => json!({ "error": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Helper functions for creating specific errors
impl ApiError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn processing<S: Into<String>>(message: S) -> Self {
        Self::Processing(message.into())
    }

    pub fn upload<S: Into<String>>(message: S) -> Self {
        Self::Upload(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
