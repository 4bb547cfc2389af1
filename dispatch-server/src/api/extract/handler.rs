//! Extraction API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::core::ServerState;
use crate::services::ExtractionError;
use crate::utils::{AppError, AppResult};
use shared::order::DraftPrefill;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// Extract order fields from free-form text
///
/// The prefill is advisory: the client merges it into a draft which still
/// goes through full validation on CreateOrder.
pub async fn extract(
    State(state): State<ServerState>,
    Json(request): Json<ExtractRequest>,
) -> AppResult<Json<DraftPrefill>> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }

    let prefill = state.extraction.extract(text).await.map_err(|e| match e {
        ExtractionError::MissingCredentials => {
            AppError::Validation("Extraction is not configured on this server".to_string())
        }
        other => AppError::Extraction(other.to_string()),
    })?;

    Ok(Json(prefill))
}
