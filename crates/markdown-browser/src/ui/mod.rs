//! Browser UI, rendered on the server.
//!
//! The page is a pure function of [`BrowserState`]. Each request replays the
//! browser's lifecycle against the markdown directory: mount (load the file
//! list), then an optional selection from `?file=<name>`.

pub mod backend;
pub mod html;
pub mod render;
pub mod state;

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::AppState;

pub use backend::{Backend, BackendError};
pub use state::{BrowserState, Command, Msg};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// File to select; empty means no selection
    pub file: Option<String>,
}

/// Handler for `GET /`
pub async fn page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let selection = query.file.filter(|f| !f.is_empty());
    tracing::debug!("Rendering page with selection {:?}", selection);

    let browser = backend::load(&state.markdown, selection).await;
    Html(html::page(&browser))
}
