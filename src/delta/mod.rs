//! Quill delta parsing.
//!
//! A delta document goes through three steps: [`decode`] turns the JSON into
//! a [`Document`], [`segment`] groups its operations into lines, and
//! [`render_line`](crate::render::render_line) styles each line. [`QuillParser`]
//! runs all three and never fails: input that is not a delta comes back as a
//! single unstyled block.

pub mod decode;
pub mod encode;
pub mod model;
pub mod segment;

pub use decode::{DecodeError, decode};
pub use encode::{encode_plain_text, is_blank};
pub use model::{Attributes, Document, ListKind, Operation};
pub use segment::{Line, Piece, segment};

use crate::render::{ContentStyle, DefaultStyle, ListCounters, RenderBlock, render_line};

/// Parses delta JSON into render blocks using a style policy.
#[derive(Debug, Clone, Default)]
pub struct QuillParser<S = DefaultStyle> {
    style: S,
}

impl QuillParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ContentStyle> QuillParser<S> {
    pub fn with_style(style: S) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    /// Parse `raw` into one block per line.
    ///
    /// If `raw` is not a delta document, the result is a single unstyled
    /// block containing `raw` verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillview::delta::QuillParser;
    ///
    /// let parser = QuillParser::new();
    /// let blocks = parser.parse(r#"{"ops":[{"insert":"Hello\n"}]}"#);
    /// assert_eq!(blocks.len(), 1);
    /// assert_eq!(blocks[0].text(), "Hello");
    ///
    /// let fallback = parser.parse("just words");
    /// assert_eq!(fallback[0].text(), "just words");
    /// ```
    pub fn parse(&self, raw: &str) -> Vec<RenderBlock> {
        match decode(raw) {
            Ok(document) => self.render(&document),
            Err(e) => {
                tracing::debug!(error = %e, "not a delta document, rendering as plain text");
                vec![RenderBlock::plain(raw)]
            }
        }
    }

    /// Render an already decoded document.
    pub fn render(&self, document: &Document) -> Vec<RenderBlock> {
        let mut counters = ListCounters::new();
        segment(document)
            .iter()
            .map(|line| render_line(line, &mut counters, &self.style))
            .collect()
    }
}

/// Parse with the default style. See [`QuillParser::parse`].
pub fn parse_quill(raw: &str) -> Vec<RenderBlock> {
    QuillParser::new().parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{TextDecoration, ThemedStyle};

    #[test]
    fn test_fallback_block() {
        let blocks = parse_quill("not json at all");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "not json at all");
        assert!(!blocks[0].is_quote);
        assert!(blocks[0].content.runs.is_empty());
    }

    #[test]
    fn test_negative_header_still_renders() {
        let raw = r#"{"ops":[{"insert":"Title"},{"insert":"\n","attributes":{"header":-1}}]}"#;
        let blocks = parse_quill(raw);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "Title");
        assert_eq!(blocks[0].content.runs[0].style.font_size, None);
        assert_eq!(blocks[0].content.indent, None);
    }

    #[test]
    fn test_counters_do_not_leak_between_calls() {
        let raw = r#"{"ops":[{"insert":"a"},{"insert":"\n","attributes":{"list":"ordered"}}]}"#;
        let parser = QuillParser::new();
        assert_eq!(parser.parse(raw)[0].text(), "1. a");
        assert_eq!(parser.parse(raw)[0].text(), "1. a");
    }

    #[test]
    fn test_custom_style() {
        let config = crate::config::StyleConfig {
            bullet: Some("*".to_string()),
            underline_style: Some(TextDecoration::LineThrough),
            ..Default::default()
        };
        let parser = QuillParser::with_style(ThemedStyle::from_config(&config));
        let raw = r#"{"ops":[
            {"insert":"go","attributes":{"link":"https://non.io"}},
            {"insert":"\n","attributes":{"list":"bullet"}}
        ]}"#;
        let blocks = parser.parse(raw);
        assert_eq!(blocks[0].text(), "* go");
        assert_eq!(
            blocks[0].content.runs[1].style.decoration,
            Some(TextDecoration::LineThrough)
        );
    }

    #[test]
    fn test_real_world_post() {
        let raw = r#"{"ops":[
            {"insert":"Release notes"},
            {"insert":"\n","attributes":{"header":1}},
            {"insert":"We shipped "},
            {"insert":"video","attributes":{"bold":true}},
            {"insert":" uploads.\nDetails:\n"},
            {"insert":"faster encode"},
            {"insert":"\n","attributes":{"list":"bullet"}},
            {"insert":"720p and 1080p"},
            {"insert":"\n","attributes":{"list":"bullet"}},
            {"insert":"Thanks all"},
            {"insert":"\n","attributes":{"blockquote":true}}
        ]}"#;
        let blocks = parse_quill(raw);
        let texts: Vec<_> = blocks.iter().map(RenderBlock::text).collect();
        assert_eq!(
            texts,
            vec![
                "Release notes",
                "We shipped video uploads.",
                "Details:",
                "• faster encode",
                "• 720p and 1080p",
                "Thanks all",
            ]
        );
        assert!(blocks[5].is_quote);
        assert!(blocks[..5].iter().all(|b| !b.is_quote));
    }
}
