//! Where the browser gets its data from.

use async_trait::async_trait;
use markdown_fs::MarkdownDir;
use thiserror::Error;

use super::state::{init, update, BrowserState, Command, Msg};

#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered, but not with a list of filenames
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Request failed: {0}")]
    Failed(String),
}

/// The list and content operations, as seen by the browser.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn list_files(&self) -> Result<Vec<String>, BackendError>;

    async fn file_content(&self, filename: &str) -> Result<String, BackendError>;
}

#[async_trait]
impl Backend for MarkdownDir {
    async fn list_files(&self) -> Result<Vec<String>, BackendError> {
        self.list()
            .await
            .map_err(|e| BackendError::Failed(e.to_string()))
    }

    async fn file_content(&self, filename: &str) -> Result<String, BackendError> {
        self.read(filename)
            .await
            .map_err(|e| BackendError::Failed(e.to_string()))
    }
}

/// Run a command against the backend and turn the outcome into a message.
pub async fn execute(backend: &dyn Backend, command: Command) -> Msg {
    match command {
        Command::LoadFiles => match backend.list_files().await {
            Ok(files) => Msg::FilesLoaded(files),
            Err(BackendError::Malformed(detail)) => Msg::FilesMalformed(detail),
            Err(e) => Msg::FilesFailed(e.to_string()),
        },
        Command::LoadContent(filename) => match backend.file_content(&filename).await {
            Ok(content) => Msg::ContentLoaded(content),
            Err(e) => Msg::ContentFailed(e.to_string()),
        },
    }
}

/// Apply `msg`, then keep executing whatever commands follow until the state
/// settles.
pub async fn dispatch(state: &mut BrowserState, backend: &dyn Backend, msg: Msg) {
    let mut next = update(state, msg);
    while let Some(command) = next.take() {
        let msg = execute(backend, command).await;
        next = update(state, msg);
    }
}

/// Build the state for one page view: mount, then optionally select a file.
pub async fn load(backend: &dyn Backend, selection: Option<String>) -> BrowserState {
    let (mut state, command) = init();
    let msg = execute(backend, command).await;
    dispatch(&mut state, backend, msg).await;

    if let Some(filename) = selection {
        dispatch(&mut state, backend, Msg::Select(filename)).await;
    }

    state
}
