//! Browser state and the single function that changes it.
//!
//! `update` never performs I/O. When a transition needs data it returns a
//! [`Command`]; whoever drives the state runs the command and feeds the result
//! back in as a [`Msg`].

use tracing::warn;

/// Rendered in place of content when nothing has been loaded.
pub const NO_FILE_SELECTED: &str = "# No file selected";

/// Content shown when the selected file couldn't be fetched.
pub const CONTENT_FALLBACK: &str = "# Error loading file";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub files: Vec<String>,
    pub selected_file: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The file list arrived
    FilesLoaded(Vec<String>),
    /// The file list arrived in a shape we don't understand
    FilesMalformed(String),
    /// The file list request failed
    FilesFailed(String),
    /// The user picked a file
    Select(String),
    ContentLoaded(String),
    ContentFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadFiles,
    LoadContent(String),
}

/// Empty state, plus the list request issued on mount.
pub fn init() -> (BrowserState, Command) {
    (BrowserState::default(), Command::LoadFiles)
}

pub fn update(state: &mut BrowserState, msg: Msg) -> Option<Command> {
    match msg {
        Msg::FilesLoaded(files) => {
            state.files = files;
            None
        }
        Msg::FilesMalformed(detail) => {
            warn!("Unexpected file list format: {}", detail);
            state.files.clear();
            None
        }
        Msg::FilesFailed(detail) => {
            warn!("Error fetching markdown files: {}", detail);
            state.files.clear();
            None
        }
        Msg::Select(filename) => {
            state.selected_file = Some(filename.clone());
            Some(Command::LoadContent(filename))
        }
        Msg::ContentLoaded(content) => {
            state.content = content;
            None
        }
        Msg::ContentFailed(detail) => {
            warn!("Error fetching file content: {}", detail);
            state.content = CONTENT_FALLBACK.to_string();
            None
        }
    }
}
