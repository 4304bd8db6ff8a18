//! Menu upload API handler
//!
//! POST /menu/scan: multipart upload of a menu photo or PDF, answered
//! with the structured menu the LLM extracted from it.

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::services::menu_extractor::{is_supported_media_type, MenuExtraction};
use crate::AppState;

/// POST /menu/scan
///
/// Expects a multipart field named `file` containing an image or PDF.
/// 503 when no LLM credential is configured; menu scanning has no
/// mock fallback.
pub async fn scan_menu(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<MenuExtraction>> {
    let Some(extractor) = &state.menu_extractor else {
        return Err(ApiError::Unavailable(
            "Menu scanning requires an LLM API key".to_string(),
        ));
    };

    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let media_type = field
            .content_type()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("Missing file content type".to_string()))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;

        upload = Some((media_type, data.to_vec()));
        break;
    }

    let (media_type, data) = upload
        .ok_or_else(|| ApiError::BadRequest("Invalid or missing file".to_string()))?;

    if !is_supported_media_type(&media_type) {
        return Err(ApiError::BadRequest(format!(
            "Unsupported file type: {}",
            media_type
        )));
    }

    if data.is_empty() {
        return Err(ApiError::BadRequest("Empty upload".to_string()));
    }

    tracing::info!(media_type = %media_type, bytes = data.len(), "Menu scan request");

    let menu = extractor
        .extract(&media_type, &data)
        .await
        .map_err(|e| ApiError::Internal(format!("Menu extraction failed: {}", e)))?;

    Ok(Json(menu))
}

/// Build menu routes
pub fn menu_routes() -> Router<AppState> {
    Router::new().route("/menu/scan", post(scan_menu))
}
