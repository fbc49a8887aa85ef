//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::batch::BatchOrchestrator;
use crate::core::processor::TextProcessor;
use crate::core::summarizer::LsaSummarizer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup, so requests can run
/// concurrently without any locking.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Sanitize-then-summarize pipeline
    pub processor: Arc<TextProcessor>,
    /// Batch orchestrator
    pub orchestrator: Arc<BatchOrchestrator>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        processor: Arc<TextProcessor>,
        orchestrator: Arc<BatchOrchestrator>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            processor,
            orchestrator,
        }
    }

    /// Build the full processing stack from a configuration
    pub fn from_config(config: Config) -> Self {
        let processor = Arc::new(TextProcessor::new(Arc::new(LsaSummarizer::new())));
        let orchestrator = Arc::new(BatchOrchestrator::new(processor.clone()));
        Self::new(config, processor, orchestrator)
    }
}
