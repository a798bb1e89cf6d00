//! Minimal, safe-by-default Markdown renderer used by the guides wiki.
//!
//! Supported syntax: `#`..`######` headings, `-`/`*` bullets, `1.` numbered
//! items, fenced code blocks, inline code, bold, italic, links and
//! paragraphs. No nesting, blockquotes or tables. Raw HTML in the source is
//! always escaped; rendering never fails.

mod block;
mod escape;
mod fence;
mod inline;

pub use escape::escape_html;
pub use inline::render_inline;

use crate::errors::AppResult;
use block::BlockWriter;
use fence::CodeBlocks;
use std::fs;
use std::path::Path;

/// Renders Markdown text to an HTML fragment (no `<html>`/`<body>` wrapper).
///
/// Output lines are joined with `\n`. Empty input yields an empty string.
pub fn render(markdown: &str) -> String {
    let source = markdown
        .replace('\u{0}', "\u{FFFD}")
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    let (text, blocks) = CodeBlocks::extract(&source);

    text.split('\n')
        .fold(BlockWriter::new(&blocks), BlockWriter::line)
        .finish()
}

/// Reads a Markdown file and renders it.
pub fn render_file(path: impl AsRef<Path>) -> AppResult<String> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(render(&content))
}
