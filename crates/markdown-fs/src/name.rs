//! Filename rules shared by listing and reading.

/// File extensions (lowercase, with the dot) recognised as markdown.
pub const MARKDOWN_EXTENSIONS: &[&str] = &[".md", ".markdown"];

/// Longest single filename, in bytes, that common filesystems accept.
pub const MAX_NAME_LEN: usize = 255;

/// Final component of `name`, with every directory segment removed.
///
/// Both `/` and `\` count as separators, so `../../etc/passwd` and
/// `..\secret.md` both collapse to a bare filename. Trailing separators are
/// ignored the way a shell `basename` ignores them.
pub fn basename(name: &str) -> &str {
    let trimmed = name.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

/// Whether `name` ends in `.md` or `.markdown`, ignoring case.
pub fn is_markdown_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    MARKDOWN_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Whether a file called `name` could exist at all.
///
/// NUL bytes and over-long names are refused by the OS before any lookup, so
/// such a name can never match a file in the directory.
pub fn is_storable_name(name: &str) -> bool {
    !name.contains('\0') && name.len() <= MAX_NAME_LEN
}
