//! Text processor
//!
//! Composes the sanitizer and the summarizer into a single operation
//! producing a [`ProcessedRecord`]. Stateless apart from the shared
//! summarizer configuration, so concurrent invocations never interfere.

use crate::core::sanitizer::sanitize;
use crate::core::summarizer::Summarizer;
use crate::core::types::ProcessedRecord;
use std::sync::Arc;

/// Default number of summary sentences
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Sanitize-then-summarize pipeline
pub struct TextProcessor {
    summarizer: Arc<dyn Summarizer>,
}

impl TextProcessor {
    /// Create a processor around the given summarizer
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self { summarizer }
    }

    /// Process a single text into a record (without an id; callers attach)
    ///
    /// Never fails: sanitize is total and the summarizer recovers internally.
    /// Counts are characters, not encoded bytes.
    pub fn process(&self, text: &str, sentence_count: usize) -> ProcessedRecord {
        let cleaned = sanitize(text);
        let summary = self.summarizer.summarize(&cleaned, sentence_count);

        ProcessedRecord {
            character_count_original: text.chars().count(),
            character_count_cleaned: cleaned.chars().count(),
            character_count_summary: summary.chars().count(),
            original_text: text.to_string(),
            cleaned_text: cleaned,
            summary,
            id: None,
            original_id: None,
        }
    }
}
