//! Batch orchestration
//!
//! Validates heterogeneous JSON input shapes (single object vs list of
//! objects with a required `description` field), runs the text processor per
//! item and assembles the aggregate [`BatchResult`].

use crate::core::processor::{TextProcessor, DEFAULT_SENTENCE_COUNT};
use crate::core::types::{BatchResult, ProcessingInfo};
use crate::utils::error::{ApiError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Batch orchestrator around a shared [`TextProcessor`]
pub struct BatchOrchestrator {
    processor: Arc<TextProcessor>,
}

impl BatchOrchestrator {
    pub fn new(processor: Arc<TextProcessor>) -> Self {
        Self { processor }
    }

    /// Process a JSON batch input
    ///
    /// Accepts either a single object with a `description` field or an array
    /// of such objects. Array elements without a `description` are silently
    /// skipped; fallback ids are 1-based positions in the original array, so
    /// skipped elements still consume their position. Fails with a
    /// validation error for any other shape.
    pub fn process_batch(&self, input: &Value, sentence_count: usize) -> Result<BatchResult> {
        let processed_items = match input {
            Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                let mut skipped = 0usize;

                for (position, item) in items.iter().enumerate() {
                    let Some(description) = item.get("description").and_then(Value::as_str) else {
                        skipped += 1;
                        continue;
                    };

                    let supplied_id = item.get("id").cloned();
                    let mut record = self.processor.process(description, sentence_count);
                    record.id = Some(
                        supplied_id
                            .clone()
                            .unwrap_or_else(|| Value::from(position as u64 + 1)),
                    );
                    record.original_id = Some(supplied_id.unwrap_or(Value::Null));
                    records.push(record);
                }

                if skipped > 0 {
                    debug!(skipped, "skipped batch items without a description field");
                }
                records
            }
            Value::Object(fields) if fields.contains_key("description") => {
                let Some(description) = fields.get("description").and_then(Value::as_str) else {
                    return Err(ApiError::validation(
                        "Input data must contain 'description' field",
                    ));
                };

                let mut record = self.processor.process(description, sentence_count);
                record.id = Some(fields.get("id").cloned().unwrap_or(Value::from(1u64)));
                vec![record]
            }
            _ => {
                return Err(ApiError::validation(
                    "Input data must contain 'description' field",
                ))
            }
        };

        Ok(BatchResult {
            total_items: processed_items.len(),
            processed_items,
            processing_info: ProcessingInfo::new(sentence_count),
        })
    }

    /// Process a JSON file on disk and write the result to `output_path`
    ///
    /// File-based runs always use the default sentence count. Used by the
    /// upload endpoint and the CLI.
    pub fn process_json_file(&self, input_path: &Path, output_path: &Path) -> Result<BatchResult> {
        let content = fs::read_to_string(input_path)?;
        let data: Value = serde_json::from_str(&content)?;

        let result = self.process_batch(&data, DEFAULT_SENTENCE_COUNT)?;

        fs::write(output_path, serde_json::to_string_pretty(&result)?)?;
        Ok(result)
    }
}

/// Coerce a request-supplied `sentences_count` into a usable value
///
/// Positive JSON integers pass through; anything else (absent, string,
/// float, zero, negative) is silently replaced with the default of 3.
pub fn coerce_sentence_count(value: Option<&Value>) -> usize {
    match value.and_then(Value::as_i64) {
        Some(n) if n >= 1 => n as usize,
        _ => DEFAULT_SENTENCE_COUNT,
    }
}
