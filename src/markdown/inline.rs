//! Inline rendering: code spans, links, bold and italic.
//!
//! The text is escaped once, up front. Every later pass works on the escaped
//! string and never escapes again. Code spans and link opening tags are
//! parked behind `\0I<index>\0` tokens so the bold/italic passes cannot
//! reach inside them.

use super::escape::escape_html;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span pattern"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern"));

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("italic pattern"));

static SHIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x00I(\d+)\x00").expect("shield token pattern"));

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// A fragment of finished HTML plus the escaped source it replaced.
struct Shield {
    html: String,
    source: String,
}

#[derive(Default)]
struct Shields(Vec<Shield>);

impl Shields {
    fn park(&mut self, html: String, source: String) -> String {
        let index = self.0.len();
        self.0.push(Shield { html, source });
        format!("\u{0}I{index}\u{0}")
    }

    fn lookup(&self, caps: &Captures) -> Option<&Shield> {
        caps[1].parse::<usize>().ok().and_then(|i| self.0.get(i))
    }

    /// Puts the escaped source text back in place of each token.
    fn unpark_source(&self, text: &str) -> String {
        SHIELD
            .replace_all(text, |caps: &Captures| {
                self.lookup(caps).map(|s| s.source.clone()).unwrap_or_default()
            })
            .into_owned()
    }

    /// Puts the finished HTML back in place of each token.
    fn unpark_html(&self, text: &str) -> String {
        SHIELD
            .replace_all(text, |caps: &Captures| {
                self.lookup(caps).map(|s| s.html.clone()).unwrap_or_default()
            })
            .into_owned()
    }
}

/// Renders a single line of inline Markdown to HTML.
///
/// Order matters: escape, code spans, links, bold, italic. Bold runs before
/// italic so `**x**` is never split into two italic fragments.
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(&text.replace('\u{0}', "\u{FFFD}"));
    let mut shields = Shields::default();

    let out = CODE_SPAN
        .replace_all(&escaped, |caps: &Captures| {
            shields.park(
                format!("<code>{}</code>", &caps[1]),
                caps[0].to_string(),
            )
        })
        .into_owned();

    let out = LINK
        .replace_all(&out, |caps: &Captures| {
            let href = safe_href(&shields.unpark_source(&caps[2]));
            let open = format!("<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">");
            let token = shields.park(open, String::new());
            format!("{token}{}</a>", &caps[1])
        })
        .into_owned();

    let out = BOLD.replace_all(&out, "<b>${1}</b>");
    let out = ITALIC.replace_all(&out, "<i>${1}</i>");

    shields.unpark_html(&out)
}

/// Drops script-capable URL schemes. Browsers ignore ASCII whitespace and
/// control characters inside a scheme, so those are skipped before matching.
fn safe_href(url: &str) -> String {
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    if BLOCKED_SCHEMES.iter().any(|s| scheme.starts_with(s)) {
        "#".to_string()
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_italic_and_code() {
        assert_eq!(
            render_inline("**a** *b* `c`"),
            "<b>a</b> <i>b</i> <code>c</code>"
        );
    }

    #[test]
    fn code_span_content_is_not_emphasised() {
        assert_eq!(render_inline("`*x*`"), "<code>*x*</code>");
    }

    #[test]
    fn link_gets_new_tab_safe_attributes() {
        assert_eq!(
            render_inline("[docs](https://example.com/a?b=1&c=2)"),
            "<a href=\"https://example.com/a?b=1&amp;c=2\" target=\"_blank\" \
             rel=\"noopener noreferrer\">docs</a>"
        );
    }

    #[test]
    fn emphasis_never_lands_inside_href() {
        let html = render_inline("[x](http://h/*a*/)");
        assert!(html.contains("href=\"http://h/*a*/\""), "{html}");
    }

    #[test]
    fn script_schemes_are_neutralised() {
        assert!(render_inline("[x](javascript:alert(1)").contains("href=\"#\""));
        assert!(render_inline("[x]( JaVa\tScript:alert)").contains("href=\"#\""));
        assert!(render_inline("[x](data:text/html,hi)").contains("href=\"#\""));
    }

    #[test]
    fn triple_asterisks_nest_bold_in_italic() {
        assert_eq!(render_inline("***x***"), "<i><b>x</b></i>");
    }
}
