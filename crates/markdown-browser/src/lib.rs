//! markdown-browser: Lists the markdown files of one directory and renders
//! them in the browser.
//!
//! Routes:
//! - `GET /` - the browser page (`?file=<name>` selects a file)
//! - `GET /api/markdown-files` - JSON array of markdown filenames
//! - `GET /api/markdown-content?filename=<name>` - raw text of one file

pub mod api;
pub mod config;
pub mod error;
pub mod ui;

use std::sync::Arc;

use axum::{routing::get, Router};
use markdown_fs::MarkdownDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Shared application state
pub struct AppState {
    pub markdown: MarkdownDir,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            markdown: MarkdownDir::new(config.markdown_dir.clone()),
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(ui::page))
        .route("/api/markdown-files", get(api::list_files))
        .route("/api/markdown-content", get(api::file_content))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
