//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod json;
pub mod text;
pub mod upload;

/// Standard API response envelope for successful requests
///
/// Error responses are produced by [`crate::utils::error::ApiError`] and
/// carry a bare `error` field instead.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data
    pub data: T,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
