//! Single-text processing endpoint

use crate::core::batch::coerce_sentence_count;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::ApiError;
use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::info;

/// Process a single text string
///
/// Body: `{"text": "...", "sentences_count": 3}`. `sentences_count` is
/// optional; invalid values are silently replaced with the default.
pub async fn process_text(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let Some(text) = body.get("text").and_then(Value::as_str) else {
        return Err(ApiError::validation("Missing 'text' field in request body"));
    };

    let sentence_count = coerce_sentence_count(body.get("sentences_count"));
    info!(
        characters = text.chars().count(),
        sentence_count, "processing single text"
    );

    let record = state.processor.process(text, sentence_count);
    Ok(HttpResponse::Ok().json(ApiResponse::success(record)))
}
