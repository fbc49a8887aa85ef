//! JSON batch processing endpoint

use crate::core::batch::coerce_sentence_count;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::ApiError;
use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::info;

/// Process JSON data with descriptions
///
/// Body: `{"data": [...] | {...}, "sentences_count": 3}`. `data` is either a
/// single object with a `description` field or an array of such objects.
pub async fn process_json(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let Some(data) = body.get("data") else {
        return Err(ApiError::validation("Missing 'data' field in request body"));
    };

    let sentence_count = coerce_sentence_count(body.get("sentences_count"));
    info!(sentence_count, "processing json batch");

    let result = state.orchestrator.process_batch(data, sentence_count)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(result)))
}
