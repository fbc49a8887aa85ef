//! Core functionality for the text processing API
//!
//! This module contains the sanitization, summarization and batch
//! orchestration logic behind the HTTP surface.

pub mod batch;
pub mod processor;
pub mod sanitizer;
pub mod summarizer;
pub mod types;
