//! Fenced code block extraction.
//!
//! Blocks are pulled out of the source before any line processing and
//! replaced with `\0B<index>\0` tokens. The stored HTML is escaped exactly
//! once and is never seen by the inline renderer.

use super::escape::escape_html;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("fence pattern"));

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x00B(\d+)\x00").expect("block token pattern"));

static TOKEN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\x00B(\d+)\x00$").expect("block token line pattern"));

static INFO_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_+#.-]+)\n").expect("info string pattern"));

/// Ordered store of rendered `<pre><code>` blocks, addressed by token index.
#[derive(Debug, Default)]
pub(crate) struct CodeBlocks {
    html: Vec<String>,
}

impl CodeBlocks {
    /// Replaces every fenced block in `source` with a token.
    ///
    /// Returns the tokenized text together with the extracted blocks.
    pub(crate) fn extract(source: &str) -> (String, CodeBlocks) {
        let mut html = Vec::new();
        let text = FENCE
            .replace_all(source, |caps: &Captures| {
                let index = html.len();
                html.push(block_html(&caps[1]));
                format!("\u{0}B{index}\u{0}")
            })
            .into_owned();

        (text, CodeBlocks { html })
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.html.len()
    }

    fn get(&self, caps: &Captures) -> &str {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|i| self.html.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Block HTML for a line that holds nothing but a single token.
    pub(crate) fn standalone<'a>(&'a self, line: &str) -> Option<&'a str> {
        TOKEN_LINE.captures(line.trim()).map(|caps| self.get(&caps))
    }

    /// Renders the text between tokens with `render` and splices the stored
    /// block HTML in place of each token.
    pub(crate) fn interleave(&self, text: &str, render: impl Fn(&str) -> String) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in TOKEN.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            out.push_str(&render(&text[last..whole.start()]));
            out.push_str(self.get(&caps));
            last = whole.end();
        }

        out.push_str(&render(&text[last..]));
        out
    }
}

fn block_html(code: &str) -> String {
    if let Some(caps) = INFO_STRING.captures(code) {
        let body_start = caps.get(0).map_or(0, |m| m.end());
        return format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            escape_html(&caps[1]),
            escape_html(&code[body_start..])
        );
    }

    let body = code.strip_prefix('\n').unwrap_or(code);
    format!("<pre><code>{}</code></pre>", escape_html(body))
}
