//! Line-level rendering: headings, lists, paragraphs and code block lines.

use super::fence::CodeBlocks;
use super::inline::render_inline;
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading pattern"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)$").expect("bullet pattern"));

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").expect("numbered pattern"));

/// Which list, if any, is currently open. Lists never nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ListState {
    #[default]
    None,
    Unordered,
    Ordered,
}

impl ListState {
    fn open_tag(self) -> Option<&'static str> {
        match self {
            ListState::None => None,
            ListState::Unordered => Some("<ul>"),
            ListState::Ordered => Some("<ol>"),
        }
    }

    fn close_tag(self) -> Option<&'static str> {
        match self {
            ListState::None => None,
            ListState::Unordered => Some("</ul>"),
            ListState::Ordered => Some("</ol>"),
        }
    }
}

/// Accumulator threaded through the fold over source lines.
pub(crate) struct BlockWriter<'a> {
    blocks: &'a CodeBlocks,
    list: ListState,
    out: Vec<String>,
}

impl<'a> BlockWriter<'a> {
    pub(crate) fn new(blocks: &'a CodeBlocks) -> Self {
        Self {
            blocks,
            list: ListState::None,
            out: Vec::new(),
        }
    }

    /// Consumes one source line and returns the updated writer.
    pub(crate) fn line(mut self, raw: &str) -> Self {
        let line = raw.trim_end();
        let blocks = self.blocks;

        if let Some(html) = blocks.standalone(line) {
            self.close_list();
            self.out.push(html.to_string());
            return self;
        }

        if line.trim().is_empty() {
            self.close_list();
            return self;
        }

        if let Some(caps) = HEADING.captures(line) {
            self.close_list();
            let level = caps[1].len();
            let body = self.inline(&caps[2]);
            self.out.push(format!("<h{level}>{body}</h{level}>"));
            return self;
        }

        if let Some(caps) = BULLET.captures(line) {
            self.enter_list(ListState::Unordered);
            let body = self.inline(&caps[1]);
            self.out.push(format!("<li>{body}</li>"));
            return self;
        }

        if let Some(caps) = NUMBERED.captures(line) {
            self.enter_list(ListState::Ordered);
            let body = self.inline(&caps[1]);
            self.out.push(format!("<li>{body}</li>"));
            return self;
        }

        self.close_list();
        let body = self.inline(line);
        self.out.push(format!("<p>{body}</p>"));
        self
    }

    /// Closes whatever list is still open and joins the output.
    pub(crate) fn finish(mut self) -> String {
        self.close_list();
        self.out.join("\n")
    }

    fn inline(&self, text: &str) -> String {
        self.blocks.interleave(text, render_inline)
    }

    fn enter_list(&mut self, kind: ListState) {
        if self.list == kind {
            return;
        }
        self.close_list();
        if let Some(tag) = kind.open_tag() {
            self.out.push(tag.to_string());
        }
        self.list = kind;
    }

    fn close_list(&mut self) {
        if let Some(tag) = self.list.close_tag() {
            self.out.push(tag.to_string());
        }
        self.list = ListState::None;
    }
}
