//! Data model for processed text and batch results

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// Result record for a single processed input item
///
/// Immutable after creation; `id` and `original_id` are attached by the
/// batch orchestrator and absent on the single-text path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// Raw input text as received
    pub original_text: String,
    /// Input after symbol/special-character removal and whitespace collapse
    pub cleaned_text: String,
    /// Extractive summary of the cleaned text
    pub summary: String,
    /// Character count of the raw input (characters, not bytes)
    pub character_count_original: usize,
    /// Character count of the cleaned text
    pub character_count_cleaned: usize,
    /// Character count of the summary
    pub character_count_summary: usize,
    /// Caller-supplied id, or a 1-based positional fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// The id exactly as supplied (null when the caller supplied none);
    /// only present on the batch list path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_id: Option<Value>,
}

/// Aggregate result of a batch processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Records in input order; items without a `description` are skipped
    pub processed_items: Vec<ProcessedRecord>,
    /// Always equals `processed_items.len()`
    pub total_items: usize,
    /// Metadata about how the batch was processed
    pub processing_info: ProcessingInfo,
}

/// Metadata describing the processing pipeline applied to a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingInfo {
    pub language: Cow<'static, str>,
    pub summarization_method: Cow<'static, str>,
    pub emoji_removal: bool,
    pub special_char_removal: bool,
    /// The sentence count actually used (after coercion)
    pub sentences_count: usize,
}

impl ProcessingInfo {
    /// Create processing metadata for the given sentence count
    pub fn new(sentences_count: usize) -> Self {
        Self {
            language: Cow::Borrowed("english"),
            summarization_method: Cow::Borrowed("LSA (Latent Semantic Analysis)"),
            emoji_removal: true,
            special_char_removal: true,
            sentences_count,
        }
    }
}
