//! HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::collections::BTreeMap;
use tracing::info;

use super::state::AppState;
use crate::error::ApiError;
use crate::services::LanguageNode;

pub async fn health_handler() -> &'static str {
    "OK"
}

pub async fn all_languages_handler(
    State(state): State<AppState>,
    Path(culture): Path<String>,
) -> Result<Json<BTreeMap<String, LanguageNode>>, ApiError> {
    let nodes = state.api.all_languages(&culture)?;
    info!("Language list for {}: {} entries", culture, nodes.len());
    Ok(Json(nodes))
}

pub async fn translations_handler(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Result<Json<BTreeMap<String, String>>, ApiError> {
    let translations = state.api.translations(&language)?;
    info!("Translations for {}: {} keys", language, translations.len());
    Ok(Json(translations))
}

pub async fn openapi_document_handler(
    State(state): State<AppState>,
    Path(document): Path<String>,
) -> Response {
    match state.documents.get(&document) {
        Some(doc) => Json(doc.to_json()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("No API document named '{}'", document),
        )
            .into_response(),
    }
}
