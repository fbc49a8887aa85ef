//! Utility modules for the text processing API

pub mod error;

pub use error::{ApiError, Result};
