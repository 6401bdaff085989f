//! JSON error responses for the API endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use markdown_fs::MarkdownError;
use serde::Serialize;

/// Error body: `{error}` for 404s, `{error, details}` for 500s.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Internal {
        error: &'static str,
        details: String,
    },
}

impl ApiError {
    /// Map a failure of the list operation.
    pub fn listing(e: MarkdownError) -> Self {
        tracing::error!("Error reading markdown files: {}", e);
        ApiError::Internal {
            error: "Unable to read markdown files",
            details: e.to_string(),
        }
    }

    /// Map a failure of the read operation.
    pub fn reading(e: MarkdownError) -> Self {
        match e {
            MarkdownError::NotFound(name) => {
                tracing::debug!("Markdown file not found: {:?}", name);
                ApiError::NotFound
            }
            e => {
                tracing::error!("Error reading markdown file: {}", e);
                ApiError::Internal {
                    error: "Unable to read markdown file",
                    details: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "File not found".to_string(),
                    details: None,
                },
            ),
            ApiError::Internal { error, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: error.to_string(),
                    details: Some(details),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
