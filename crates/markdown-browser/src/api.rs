//! The two read-only JSON/text endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::AppState;

/// Handler for `GET /api/markdown-files`
pub async fn list_files(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    let files = state.markdown.list().await.map_err(ApiError::listing)?;
    Ok(Json(files))
}

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    /// Requested filename; only its basename is used
    #[serde(default)]
    pub filename: String,
}

/// Handler for `GET /api/markdown-content?filename=<name>`
///
/// Responds with the raw file text as `text/plain`.
pub async fn file_content(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContentQuery>,
) -> Result<String, ApiError> {
    state
        .markdown
        .read(&query.filename)
        .await
        .map_err(ApiError::reading)
}
