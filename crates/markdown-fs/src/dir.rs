//! The markdown directory, using tokio::fs.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use crate::name::{basename, is_markdown_name, is_storable_name};
use crate::{MarkdownError, Result};

/// A directory of markdown files.
///
/// Every operation is relative to `root`. Nothing here caches: each call sees
/// the directory as it is at that moment.
#[derive(Debug, Clone)]
pub struct MarkdownDir {
    root: PathBuf,
}

impl MarkdownDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the markdown files in the directory.
    ///
    /// Names come back in directory enumeration order. Only regular files are
    /// included (symlinks are followed); entries whose metadata can't be read
    /// are skipped.
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut dir = fs::read_dir(&self.root)
            .await
            .map_err(|e| io_error(&self.root, e))?;

        let mut names = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| io_error(&self.root, e))?
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if !is_markdown_name(&name) {
                continue;
            }

            match fs::metadata(entry.path()).await {
                Ok(metadata) if metadata.is_file() => names.push(name),
                Ok(_) => debug!("Skipping non-file entry {}", name),
                Err(e) => warn!("Skipping {}: {}", name, e),
            }
        }

        debug!("Listed {} markdown file(s) in {:?}", names.len(), self.root);
        Ok(names)
    }

    /// Read a markdown file by name.
    ///
    /// `requested` is reduced to its basename before being joined to the
    /// directory, so no caller-supplied path segment survives. A name without
    /// a markdown extension, one the OS could never store, or one that doesn't
    /// resolve to a regular file, is `NotFound`. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub async fn read(&self, requested: &str) -> Result<String> {
        let name = basename(requested);
        if !is_markdown_name(name) {
            debug!("Rejected non-markdown name {:?}", requested);
            return Err(MarkdownError::NotFound(requested.to_string()));
        }
        if !is_storable_name(name) {
            debug!("Rejected unstorable name {:?}", requested);
            return Err(MarkdownError::NotFound(requested.to_string()));
        }

        let path = self.root.join(name);
        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => return Err(MarkdownError::NotFound(requested.to_string())),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::InvalidInput) => {
                return Err(MarkdownError::NotFound(requested.to_string()));
            }
            Err(e) => return Err(io_error(&path, e)),
        }

        let bytes = fs::read(&path).await.map_err(|e| io_error(&path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn io_error(path: &Path, e: std::io::Error) -> MarkdownError {
    MarkdownError::Io(format!("{}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).unwrap();
    }

    fn as_set(names: Vec<String>) -> HashSet<String> {
        names.into_iter().collect()
    }

    #[tokio::test]
    async fn test_list_filters_by_extension() {
        let temp = TempDir::new().unwrap();
        write(&temp, "a.md", "# A");
        write(&temp, "b.txt", "b");
        write(&temp, "c.MARKDOWN", "# C");

        let dir = MarkdownDir::new(temp.path());
        let names = dir.list().await.unwrap();

        assert_eq!(names.len(), 2);
        assert_eq!(
            as_set(names),
            HashSet::from(["a.md".to_string(), "c.MARKDOWN".to_string()])
        );
    }

    #[tokio::test]
    async fn test_list_empty_directory() {
        let temp = TempDir::new().unwrap();
        let dir = MarkdownDir::new(temp.path());

        assert!(dir.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_idempotent() {
        let temp = TempDir::new().unwrap();
        write(&temp, "one.md", "1");
        write(&temp, "two.markdown", "2");
        let dir = MarkdownDir::new(temp.path());

        let first = as_set(dir.list().await.unwrap());
        let second = as_set(dir.list().await.unwrap());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_skips_directories_with_markdown_names() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("folder.md")).unwrap();
        write(&temp, "real.md", "x");

        let dir = MarkdownDir::new(temp.path());
        assert_eq!(dir.list().await.unwrap(), vec!["real.md".to_string()]);
    }

    #[tokio::test]
    async fn test_list_missing_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let dir = MarkdownDir::new(temp.path().join("does-not-exist"));

        match dir.list().await {
            Err(MarkdownError::Io(message)) => assert!(message.contains("does-not-exist")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_returns_content_verbatim() {
        let temp = TempDir::new().unwrap();
        write(&temp, "a.md", "# Hello");
        let dir = MarkdownDir::new(temp.path());

        assert_eq!(dir.read("a.md").await.unwrap(), "# Hello");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = MarkdownDir::new(temp.path());

        assert!(matches!(
            dir.read("missing.md").await,
            Err(MarkdownError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_read_rejects_non_markdown_even_if_present() {
        let temp = TempDir::new().unwrap();
        write(&temp, "b.txt", "plain");
        let dir = MarkdownDir::new(temp.path());

        assert!(matches!(
            dir.read("b.txt").await,
            Err(MarkdownError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_read_never_escapes_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("markdown");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(temp.path().join("secret.md"), "top secret").unwrap();
        let dir = MarkdownDir::new(&root);

        for name in [
            "../secret.md",
            "../../etc/passwd",
            "..\\secret.md",
            "/etc/passwd",
            "..",
            "",
        ] {
            assert!(
                matches!(dir.read(name).await, Err(MarkdownError::NotFound(_))),
                "{:?} should be NotFound",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_read_impossible_names_are_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = MarkdownDir::new(temp.path());
        let long_name = format!("{}.md", "x".repeat(300));

        for name in ["a\0.md", long_name.as_str()] {
            assert!(
                matches!(dir.read(name).await, Err(MarkdownError::NotFound(_))),
                "{:?} should be NotFound",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_read_under_file_root_is_io_error() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("not-a-dir");
        std::fs::write(&root, "plain file").unwrap();
        let dir = MarkdownDir::new(&root);

        assert!(matches!(dir.read("a.md").await, Err(MarkdownError::Io(_))));
    }

    #[tokio::test]
    async fn test_read_uses_basename_of_nested_request() {
        let temp = TempDir::new().unwrap();
        write(&temp, "a.md", "inside");
        let dir = MarkdownDir::new(temp.path());

        assert_eq!(dir.read("some/where/../a.md").await.unwrap(), "inside");
    }

    #[tokio::test]
    async fn test_read_directory_with_markdown_name_is_not_found() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("folder.md")).unwrap();
        let dir = MarkdownDir::new(temp.path());

        assert!(matches!(
            dir.read("folder.md").await,
            Err(MarkdownError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_read_replaces_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("bin.md"), b"ok \xff").unwrap();
        let dir = MarkdownDir::new(temp.path());

        assert_eq!(dir.read("bin.md").await.unwrap(), "ok \u{FFFD}");
    }
}
