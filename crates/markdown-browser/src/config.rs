use std::path::{Path, PathBuf};

/// Server configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path of the directory whose markdown files are served
    pub markdown_dir: PathBuf,
}

impl Config {
    /// Resolve the markdown directory against the process working directory.
    ///
    /// A missing directory is not an error here: the list endpoint reports it
    /// per request, so the directory can be created after startup.
    pub fn resolve(markdown_dir: &Path) -> Result<Self, ConfigError> {
        if markdown_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyMarkdownDir);
        }

        let markdown_dir = if markdown_dir.is_absolute() {
            markdown_dir.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(ConfigError::WorkingDirectory)?
                .join(markdown_dir)
        };

        if !markdown_dir.is_dir() {
            tracing::warn!(
                "Markdown directory {:?} does not exist yet; listing will fail until it does",
                markdown_dir
            );
        }

        Ok(Self { markdown_dir })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Markdown directory must not be empty")]
    EmptyMarkdownDir,

    #[error("Failed to determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),
}
