//! Turning segmented lines into styled render blocks.

use std::collections::HashMap;
use std::ops::Range;

use ratatui::style::Color;
use serde::Serialize;

use super::style::{ContentStyle, TextDecoration};
use crate::delta::model::{Attributes, ListKind};
use crate::delta::segment::Line;

/// Tag of the annotation attached to link runs.
pub const URL_TAG: &str = "URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Italic,
}

/// Inline style of a run. `None` fields are unspecified and inherit from
/// whatever paints the block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// A contiguous span of text sharing one style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    /// Byte range into [`StyledText::text`]
    pub range: Range<usize>,
    pub style: RunStyle,
}

/// A tagged value over a range of text, e.g. the URL of a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub tag: String,
    pub value: String,
    pub range: Range<usize>,
}

/// Paragraph indentation in sp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextIndent {
    pub first_line: f32,
    pub rest_line: f32,
}

/// Text with styled runs, annotations and an optional paragraph indent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyledText {
    pub text: String,
    pub runs: Vec<Run>,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<TextIndent>,
}

impl StyledText {
    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn push_run(&mut self, text: &str, style: RunStyle) -> Range<usize> {
        let start = self.text.len();
        self.text.push_str(text);
        let range = start..self.text.len();
        self.runs.push(Run {
            range: range.clone(),
            style,
        });
        range
    }
}

/// One rendered line of a document: a paragraph, heading or list item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderBlock {
    pub content: StyledText,
    pub is_quote: bool,
}

impl RenderBlock {
    /// The fallback block for input that is not a delta document.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            content: StyledText::plain(text),
            is_quote: false,
        }
    }

    pub fn text(&self) -> &str {
        self.content.as_str()
    }
}

/// Running ordered-list numbers, keyed by indent level.
///
/// Lives for one parse call only.
#[derive(Debug, Clone, Default)]
pub struct ListCounters {
    next: HashMap<i32, u32>,
}

impl ListCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next number at `indent`, starting from 1.
    pub fn next(&mut self, indent: i32) -> u32 {
        let number = self.next.get(&indent).copied().unwrap_or(1);
        self.next.insert(indent, number + 1);
        number
    }

    /// Forget numbering at every indent level.
    pub fn reset(&mut self) {
        self.next.clear();
    }
}

/// Render one segmented line.
///
/// Block formatting (header size, indent, list marker, quote flag) comes from
/// the line's terminator; inline formatting from each piece. Any line that is
/// not a list item resets numbering at all indent levels.
pub fn render_line<S>(line: &Line<'_>, counters: &mut ListCounters, style: &S) -> RenderBlock
where
    S: ContentStyle + ?Sized,
{
    let mut content = StyledText::default();
    let mut header_level = 0;
    let mut text_indent = 0.0;
    let mut is_quote = false;
    let mut marker = None;

    if let Some(block) = line.terminator().and_then(|t| t.attributes) {
        header_level = block.header;
        let indent_level = block.indent;
        if indent_level > 0 {
            text_indent = style.indent_size(indent_level);
        }

        match block.list_kind() {
            Some(ListKind::Ordered) => {
                let number = counters.next(indent_level);
                marker = Some(format!("{} ", style.ordered_list_number(number)));
            }
            Some(ListKind::Bullet) => {
                marker = Some(format!("{} ", style.bullet_symbol()));
            }
            None => counters.reset(),
        }

        is_quote = block.blockquote;
    }

    let font_size = match header_level {
        1 => Some(style.header1_font_size()),
        2 => Some(style.header2_font_size()),
        _ => None,
    };

    if let Some(marker) = marker {
        content.push_run(&marker, RunStyle::default());
    }

    for piece in line.pieces() {
        let range = content.push_run(piece.text, run_style(piece.attributes, font_size, style));
        if let Some(attrs) = piece.attributes.filter(|a| a.has_link()) {
            content.annotations.push(Annotation {
                tag: URL_TAG.to_string(),
                value: attrs.link.clone(),
                range,
            });
        }
    }

    if text_indent > 0.0 {
        content.indent = Some(TextIndent {
            first_line: text_indent,
            rest_line: text_indent,
        });
    }

    RenderBlock { content, is_quote }
}

fn run_style<S>(attributes: Option<&Attributes>, font_size: Option<f32>, style: &S) -> RunStyle
where
    S: ContentStyle + ?Sized,
{
    let Some(attrs) = attributes else {
        return RunStyle {
            font_size,
            ..Default::default()
        };
    };

    // underline wins over strike
    let decoration = if attrs.underline || attrs.has_link() {
        Some(style.underline_style())
    } else if attrs.strike {
        Some(TextDecoration::LineThrough)
    } else {
        None
    };

    RunStyle {
        weight: attrs.bold.then_some(FontWeight::Bold),
        font_style: attrs.italic.then_some(FontStyle::Italic),
        font_size,
        decoration,
        color: attrs.has_link().then(|| style.link_color()),
    }
}
