//! # textsum-rs
//!
//! A text processing API: sanitizes free-form text (emoji/symbol removal,
//! whitespace normalization) and produces extractive summaries via an
//! LSA-style statistical ranking.
//!
//! ## Features
//!
//! - **Text sanitization**: Unicode-category based symbol/emoji removal
//! - **Extractive summarization**: SVD-ranked sentences in document order
//! - **Batch processing**: single objects, arrays, or uploaded JSON files
//! - **Stateless core**: reentrant pipeline, no shared mutable state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use textsum_rs::{server, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     server::builder::run_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Library use
//!
//! ```rust
//! use std::sync::Arc;
//! use textsum_rs::{LsaSummarizer, TextProcessor};
//!
//! let processor = TextProcessor::new(Arc::new(LsaSummarizer::new()));
//! let record = processor.process("Great news! Sales grew. Costs fell.", 2);
//! assert_eq!(record.cleaned_text, "Great news! Sales grew. Costs fell.");
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::batch::{coerce_sentence_count, BatchOrchestrator};
pub use core::processor::{TextProcessor, DEFAULT_SENTENCE_COUNT};
pub use core::sanitizer::sanitize;
pub use core::summarizer::{LsaSummarizer, Summarizer};
pub use core::types::{BatchResult, ProcessedRecord, ProcessingInfo};
pub use utils::error::{ApiError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
