//! JSON file upload endpoint
//!
//! Accepts multipart/form-data with a `file` field, stages the upload to
//! disk, runs the batch pipeline over it and cleans the staged files up on
//! every path.

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::ApiError;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::StreamExt;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Fixed intermediate output path, mirroring the staging contract
const STAGED_OUTPUT: &str = "temp_output.json";

/// Staged upload files, removed when the guard goes out of scope
///
/// Deletion must happen on success and failure alike, so it lives in Drop
/// rather than in the handler's happy path.
struct StagedFiles {
    input: PathBuf,
    output: PathBuf,
}

impl StagedFiles {
    fn new(filename: &str) -> Self {
        Self {
            input: PathBuf::from(format!("temp_{}", filename)),
            output: PathBuf::from(STAGED_OUTPUT),
        }
    }
}

impl Drop for StagedFiles {
    fn drop(&mut self) {
        for path in [&self.input, &self.output] {
            if path.exists() {
                if let Err(e) = fs::remove_file(path) {
                    warn!(path = %path.display(), "failed to remove staged file: {}", e);
                }
            }
        }
    }
}

/// Upload and process a JSON file
///
/// The file path always uses the default sentence count; there is no
/// `sentences_count` override on this endpoint.
pub async fn upload_json(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut filename = String::new();

    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|e| ApiError::validation(format!("Invalid multipart data: {}", e)))?;

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        match field_name.as_str() {
            "file" => {
                if let Some(cd) = field.content_disposition() {
                    if let Some(fname) = cd.get_filename() {
                        filename = fname.to_string();
                    }
                }

                let mut data = Vec::new();
                while let Some(chunk) = field.next().await {
                    match chunk {
                        Ok(bytes) => data.extend_from_slice(&bytes),
                        Err(e) => {
                            error!("Error reading file chunk: {}", e);
                            return Err(ApiError::validation("Error reading uploaded file"));
                        }
                    }
                }
                file_data = Some(data);
            }
            _ => {
                // Skip unknown fields
                while field.next().await.is_some() {}
            }
        }
    }

    let Some(data) = file_data else {
        return Err(ApiError::validation("No file uploaded"));
    };
    if filename.is_empty() {
        return Err(ApiError::validation("No file selected"));
    }
    if !filename.ends_with(".json") {
        return Err(ApiError::validation("Please upload a valid JSON file"));
    }

    // Uploaded filenames stage next to the process; keep only the final
    // path component so they cannot escape the working directory
    let filename = Path::new(&filename)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| filename.clone());

    info!(filename = %filename, bytes = data.len(), "processing uploaded json file");

    let staged = StagedFiles::new(&filename);
    fs::write(&staged.input, &data)?;

    match state
        .orchestrator
        .process_json_file(&staged.input, &staged.output)
    {
        Ok(_) => {
            // Read the written output back, matching the staging contract
            let content = fs::read_to_string(&staged.output)?;
            let output: Value = serde_json::from_str(&content)?;
            Ok(HttpResponse::Ok().json(ApiResponse::success(output)))
        }
        Err(e) => {
            error!("Upload processing failed: {}", e);
            Err(ApiError::upload(e.to_string()))
        }
    }
}
