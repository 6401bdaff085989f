//! markdown-fs: Read-only access to the markdown files of a single directory.
//!
//! The directory is fixed when a [`MarkdownDir`] is constructed. Callers can:
//! - list the markdown files it contains
//! - read one of them by name, where the name is reduced to its basename
//!   before it ever touches the filesystem

pub mod dir;
pub mod name;

pub use dir::MarkdownDir;
pub use name::{basename, is_markdown_name, is_storable_name};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;
