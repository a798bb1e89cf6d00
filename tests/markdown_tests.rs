use regex::Regex;
use techpedia::markdown::{escape_html, render, render_file, render_inline};

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render(""), "");
    assert_eq!(render("   \n\t\n\n"), "");
}

#[test]
fn inline_bold_italic_code_in_paragraph() {
    assert_eq!(
        render("**a** *b* `c`"),
        "<p><b>a</b> <i>b</i> <code>c</code></p>"
    );
}

#[test]
fn heading_followed_by_bullet_list() {
    assert_eq!(
        render("# Title\n\n- x\n- y\n"),
        "<h1>Title</h1>\n<ul>\n<li>x</li>\n<li>y</li>\n</ul>"
    );
}

#[test]
fn heading_levels() {
    assert_eq!(render("###### six"), "<h6>six</h6>");
    assert_eq!(render("####### seven"), "<p>####### seven</p>");
    assert_eq!(render("#nospace"), "<p>#nospace</p>");
}

#[test]
fn switching_list_kinds_closes_the_previous_list() {
    assert_eq!(
        render("1. a\n2. b\n- c\n* d"),
        "<ol>\n<li>a</li>\n<li>b</li>\n</ol>\n<ul>\n<li>c</li>\n<li>d</li>\n</ul>"
    );
}

#[test]
fn paragraph_closes_open_list() {
    assert_eq!(render("- a\ntext"), "<ul>\n<li>a</li>\n</ul>\n<p>text</p>");
}

#[test]
fn leading_bold_is_not_a_bullet() {
    assert_eq!(render("**bold** start"), "<p><b>bold</b> start</p>");
}

#[test]
fn fenced_code_is_verbatim_and_escaped() {
    assert_eq!(
        render("```\n**not bold** <b>&\n```"),
        "<pre><code>**not bold** &lt;b&gt;&amp;\n</code></pre>"
    );
}

#[test]
fn fenced_code_with_language() {
    assert_eq!(
        render("Intro\n```sh\nls -la | grep '*.md'\n```\nDone"),
        "<p>Intro</p>\n<pre><code class=\"language-sh\">ls -la | grep &#039;*.md&#039;\n</code></pre>\n<p>Done</p>"
    );
}

#[test]
fn code_block_between_list_items_splits_the_list() {
    assert_eq!(
        render("- a\n```\ncode\n```\n- b"),
        "<ul>\n<li>a</li>\n</ul>\n<pre><code>code\n</code></pre>\n<ul>\n<li>b</li>\n</ul>"
    );
}

#[test]
fn inline_fence_inside_paragraph_is_spliced_not_escaped() {
    assert_eq!(
        render("see ```x < y``` now"),
        "<p>see <pre><code>x &lt; y</code></pre> now</p>"
    );
}

#[test]
fn sentinel_characters_in_input_cannot_forge_block_tokens() {
    assert_eq!(
        render("\u{0}B0\u{0}\n```z```"),
        "<p>\u{FFFD}B0\u{FFFD}</p>\n<pre><code>z</code></pre>"
    );
}

#[test]
fn raw_html_is_escaped() {
    assert_eq!(
        render("<script>alert('x')</script>"),
        "<p>&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;</p>"
    );
}

#[test]
fn already_escaped_text_is_escaped_once_more_as_literal() {
    assert_eq!(render("&lt;b&gt;"), "<p>&amp;lt;b&amp;gt;</p>");
}

#[test]
fn crlf_and_lf_render_the_same() {
    assert_eq!(render("# A\r\n- b\r\n"), render("# A\n- b\n"));
    assert_eq!(render("a\rb"), render("a\nb"));
}

#[test]
fn link_is_new_tab_safe() {
    assert_eq!(
        render("[Guide](https://wiki.local/guide?a=1&b=2)"),
        "<p><a href=\"https://wiki.local/guide?a=1&amp;b=2\" target=\"_blank\" \
         rel=\"noopener noreferrer\">Guide</a></p>"
    );
}

#[test]
fn bold_inside_link_text() {
    assert_eq!(
        render_inline("[**x**](u)"),
        "<a href=\"u\" target=\"_blank\" rel=\"noopener noreferrer\"><b>x</b></a>"
    );
}

#[test]
fn quotes_in_url_cannot_break_out_of_href() {
    let html = render(r#"[x](http://a" onmouseover="alert(1))"#);
    assert!(!html.contains("\" onmouseover"), "{html}");
    assert!(html.contains("&quot; onmouseover=&quot;"), "{html}");
}

#[test]
fn backticks_inside_url_stay_plain_in_href() {
    let html = render("[a](http://x/`y`)");
    assert!(!html.contains("<code>"), "{html}");
    assert!(html.contains("href=\"http://x/`y`\""), "{html}");
}

#[test]
fn code_span_in_link_text_is_kept() {
    let html = render("[`cfg`](http://x)");
    assert!(html.contains("><code>cfg</code></a>"), "{html}");
}

#[test]
fn javascript_links_are_neutralised() {
    let html = render("[click](javascript:alert(1))");
    assert!(html.contains("href=\"#\""), "{html}");
}

#[test]
fn rendering_is_deterministic() {
    let md = "# T\n\n1. one\n2. **two**\n\n```\nx\n```\n[l](u)";
    assert_eq!(render(md), render(md));
}

#[test]
fn output_only_contains_renderer_tags() {
    let own_tags =
        Regex::new(r#"</?(?:p|h[1-6]|ul|ol|li|pre|code|b|i|a)(?: [^<>]*)?>"#).expect("regex");

    let hostile = [
        "<img src=x onerror=alert(1)>",
        "# <h1>nested</h1>",
        "- <li>x</li> **<b>**",
        "```\n</code></pre><script>\n```",
        "[<b>t</b>](<u>)",
        "`<code>`",
        "1. \"quoted\" & 'single' >",
        "*<i>*",
    ];

    for input in hostile {
        let html = render(input);
        let stripped = own_tags.replace_all(&html, "");
        assert!(
            !stripped.contains('<') && !stripped.contains('>'),
            "unescaped markup for {input:?}: {html}"
        );
    }
}

#[test]
fn escape_html_matches_renderer_escaping() {
    assert_eq!(escape_html("a<b>\"c\"&'d'"), "a&lt;b&gt;&quot;c&quot;&amp;&#039;d&#039;");
}

#[test]
fn render_file_reads_and_renders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("guide.md");
    std::fs::write(&path, "# VPN\n\nUse *the* client.").expect("write");

    assert_eq!(
        render_file(&path).expect("render"),
        "<h1>VPN</h1>\n<p>Use <i>the</i> client.</p>"
    );
}

#[test]
fn render_file_missing_is_an_error() {
    assert!(render_file("/definitely/not/here.md").is_err());
}
