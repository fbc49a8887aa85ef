//! HTTP route handlers for metadata and fallback responses

use crate::utils::error::ApiError;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Home endpoint with API information
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Text Processing API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /": "API information",
            "POST /process-text": "Process single text (body: {'text': 'your text', 'sentences_count': 3})",
            "POST /process-json": "Process JSON with descriptions (body: {'data': [...]})",
            "POST /upload-json": "Upload and process JSON file",
            "GET /health": "Health check"
        },
        "status": "active"
    }))
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "text-processing-api"
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    ApiError::NotFound.error_response()
}

/// Fallback for known routes hit with an unsupported method
pub async fn method_not_allowed() -> HttpResponse {
    ApiError::MethodNotAllowed.error_response()
}
