//! The browser page: a file list on the left, the rendered file on the right.

use super::render::{html_escape, markdown_to_html};
use super::state::{BrowserState, NO_FILE_SELECTED};

/// Render the whole page for `state`.
pub fn page(state: &BrowserState) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="Browse my project markdown files">
    <title>My Project Markdown Browser</title>
    <style>{}</style>
</head>
<body>
    <main class="container">
        <h1 class="title">My Projects</h1>
        <div class="browser">
            {}
            {}
        </div>
    </main>
</body>
</html>"#,
        CSS_STYLES,
        file_list(&state.files, state.selected_file.as_deref()),
        viewer(state.selected_file.as_deref(), &state.content),
    )
}

fn file_list(files: &[String], selected: Option<&str>) -> String {
    let items = if files.is_empty() {
        r#"<p class="empty">No markdown files found</p>"#.to_string()
    } else {
        files
            .iter()
            .map(|file| {
                let class = if Some(file.as_str()) == selected {
                    "file selected"
                } else {
                    "file"
                };
                format!(
                    r#"<a class="{}" href="/?file={}">{}</a>"#,
                    class,
                    urlencoding::encode(file),
                    html_escape(file)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<nav class="pane files">
                <h2>Project Files</h2>
                {}
            </nav>"#,
        items
    )
}

fn viewer(selected: Option<&str>, content: &str) -> String {
    let heading = selected.map(html_escape).unwrap_or_else(|| "Select a file".to_string());
    let markdown = if content.is_empty() {
        NO_FILE_SELECTED
    } else {
        content
    };

    format!(
        r#"<section class="pane viewer">
                <h2>{}</h2>
                <article class="prose">{}</article>
            </section>"#,
        heading,
        markdown_to_html(markdown)
    )
}

const CSS_STYLES: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    background: #f9fafb;
    color: #111827;
}
.container { margin: 0 auto; padding: 2rem 1rem; }
.title { font-size: 1.875rem; font-weight: 700; text-align: center; margin-bottom: 2rem; }
.browser { display: flex; gap: 1rem; height: calc(100vh - 100px); padding: 1rem; }
.pane {
    background: #fff;
    border-radius: 0.5rem;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    padding: 1rem;
    overflow-y: auto;
}
.pane h2 { font-size: 1.25rem; font-weight: 700; margin: 0 0 1rem; }
.files { width: 25%; }
.viewer { width: 75%; }
.file {
    display: block;
    padding: 0.5rem;
    border-bottom: 1px solid #e5e7eb;
    color: inherit;
    text-decoration: none;
}
.file:last-child { border-bottom: none; }
.file:hover, .file.selected { background: #f3f4f6; }
.empty { color: #6b7280; }
.prose { max-width: 100%; line-height: 1.6; }
.prose pre { background: #f3f4f6; padding: 0.75rem; overflow-x: auto; }
.prose table { border-collapse: collapse; }
.prose th, .prose td { border: 1px solid #e5e7eb; padding: 0.25rem 0.5rem; }
"#;
