//! Painting render blocks as terminal text.
//!
//! Blocks become ratatui [`Line`]s: runs map to styled spans, the paragraph
//! indent becomes leading columns, quotes get a margin and a bar, and long
//! paragraphs wrap to the requested width with Unicode-aware widths.

pub mod ansi;
pub mod compat;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::render::{ContentStyle, FontStyle, FontWeight, RenderBlock, RunStyle, TextDecoration};

const QUOTE_BAR: &str = "│ ";

/// Layout settings for painting.
///
/// A character grid has no line height or page background, so a style's
/// `line_height_multiple` and `background_color` are not painted.
#[derive(Debug, Clone)]
pub struct PaintOptions {
    /// Wrap width in columns; 0 disables wrapping
    pub width: u16,
    /// Columns before the quote bar
    pub quote_margin: u16,
    /// Font size that maps to one column of indent and plain weight
    pub base_font_size: f32,
    pub quote_color: Color,
    /// Foreground for runs without their own color; `None` keeps the
    /// terminal's
    pub text_color: Option<Color>,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            width: 0,
            quote_margin: 2,
            base_font_size: crate::render::DefaultStyle::FONT_SIZE,
            quote_color: Color::Gray,
            text_color: None,
        }
    }
}

impl PaintOptions {
    pub fn from_style<S: ContentStyle + ?Sized>(style: &S, width: u16, quote_margin: u16) -> Self {
        Self {
            width,
            quote_margin,
            base_font_size: style.font_size(),
            quote_color: style.quote_color(),
            text_color: style.text_color(),
        }
    }

    /// Columns for an indent given in sp.
    fn columns(&self, sp: f32) -> usize {
        if self.base_font_size <= 0.0 || sp <= 0.0 {
            return 0;
        }
        (sp / self.base_font_size).round() as usize
    }
}

/// Terminal style for a run.
pub fn span_style(run: &RunStyle, base_font_size: f32) -> Style {
    let mut style = Style::default();
    if let Some(color) = run.color {
        style = style.fg(color);
    }
    if run.weight == Some(FontWeight::Bold) || run.font_size.is_some_and(|s| s > base_font_size) {
        style = style.add_modifier(Modifier::BOLD);
    }
    if run.font_style == Some(FontStyle::Italic) {
        style = style.add_modifier(Modifier::ITALIC);
    }
    match run.decoration {
        Some(TextDecoration::Underline) => style = style.add_modifier(Modifier::UNDERLINED),
        Some(TextDecoration::LineThrough) => style = style.add_modifier(Modifier::CROSSED_OUT),
        None => {}
    }
    style
}

/// Paint one block into one or more terminal lines.
pub fn block_to_lines(block: &RenderBlock, options: &PaintOptions) -> Vec<Line<'static>> {
    let content = &block.content;
    let base = match options.text_color {
        Some(color) => Style::default().fg(color),
        None => Style::default(),
    };
    let segments: Vec<(&str, Style)> = if content.runs.is_empty() {
        vec![(content.text.as_str(), base)]
    } else {
        content
            .runs
            .iter()
            .filter_map(|run| {
                let text = content.text.get(run.range.clone())?;
                Some((text, base.patch(span_style(&run.style, options.base_font_size))))
            })
            .collect()
    };

    let (first_indent, rest_indent) = content
        .indent
        .map(|i| (options.columns(i.first_line), options.columns(i.rest_line)))
        .unwrap_or((0, 0));

    let quote_width = if block.is_quote {
        options.quote_margin as usize + QUOTE_BAR.width()
    } else {
        0
    };

    let available = |indent: usize| {
        if options.width == 0 {
            usize::MAX
        } else {
            (options.width as usize)
                .saturating_sub(quote_width + indent)
                .max(1)
        }
    };

    let wrapped = wrap(&segments, available(first_indent), available(rest_indent));

    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, spans)| {
            let indent = if i == 0 { first_indent } else { rest_indent };
            let mut line = Vec::with_capacity(spans.len() + 3);
            if block.is_quote {
                line.push(Span::raw(" ".repeat(options.quote_margin as usize)));
                line.push(Span::styled(QUOTE_BAR, Style::default().fg(options.quote_color)));
            }
            if indent > 0 {
                line.push(Span::raw(" ".repeat(indent)));
            }
            line.extend(spans);
            Line::from(line)
        })
        .collect()
}

/// Paint a whole document.
pub fn paint(blocks: &[RenderBlock], options: &PaintOptions) -> Text<'static> {
    Text::from(
        blocks
            .iter()
            .flat_map(|block| block_to_lines(block, options))
            .collect::<Vec<_>>(),
    )
}

/// Strip styling from painted text, one string line per terminal line.
pub fn to_plain(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Greedy word wrap over styled segments.
fn wrap(segments: &[(&str, Style)], first_width: usize, rest_width: usize) -> Vec<Vec<Span<'static>>> {
    let mut wrapper = Wrapper::new(first_width, rest_width);

    for &(text, style) in segments {
        for token in split_words(text) {
            wrapper.push_token(token, style);
        }
    }

    wrapper.finish()
}

/// Split text into alternating runs of whitespace and non-whitespace.
fn split_words(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != space)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        rest = tail;
        Some(token)
    })
}

struct Wrapper {
    lines: Vec<Vec<Span<'static>>>,
    current: Vec<Span<'static>>,
    used: usize,
    first_width: usize,
    rest_width: usize,
}

impl Wrapper {
    fn new(first_width: usize, rest_width: usize) -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            used: 0,
            first_width,
            rest_width,
        }
    }

    fn width(&self) -> usize {
        if self.lines.is_empty() {
            self.first_width
        } else {
            self.rest_width
        }
    }

    fn push_token(&mut self, token: &str, style: Style) {
        let token_width = token.width();
        let is_space = token.chars().all(char::is_whitespace);

        if self.used + token_width <= self.width() {
            self.push(token, style, token_width);
        } else if is_space {
            // a break swallows the whitespace it lands on
            self.break_line();
        } else if token_width <= self.width() {
            self.break_line();
            self.push(token, style, token_width);
        } else {
            for ch in token.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if self.used > 0 && self.used + ch_width > self.width() {
                    self.break_line();
                }
                let mut buf = [0; 4];
                self.push(ch.encode_utf8(&mut buf), style, ch_width);
            }
        }
    }

    fn push(&mut self, text: &str, style: Style, width: usize) {
        if self.used == 0 && !self.lines.is_empty() && text.chars().all(char::is_whitespace) {
            return;
        }
        match self.current.last_mut() {
            Some(last) if last.style == style => last.content.to_mut().push_str(text),
            _ => self.current.push(Span::styled(text.to_string(), style)),
        }
        self.used += width;
    }

    fn break_line(&mut self) {
        while self
            .current
            .last()
            .is_some_and(|s| s.content.chars().all(char::is_whitespace))
        {
            self.current.pop();
        }
        self.lines.push(std::mem::take(&mut self.current));
        self.used = 0;
    }

    fn finish(mut self) -> Vec<Vec<Span<'static>>> {
        if !self.current.is_empty() || self.lines.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}
