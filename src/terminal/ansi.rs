//! Writing painted text to a terminal stream as ANSI escape sequences.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, ContentStyle, Print, PrintStyledContent, StyledContent,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;

/// Convert a ratatui color to its crossterm equivalent.
pub fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

/// Convert a ratatui style to a crossterm content style.
pub fn content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = style.fg.map(term_color);
    content.background_color = style.bg.map(term_color);

    let modifiers = style.add_modifier - style.sub_modifier;
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
        (Modifier::REVERSED, Attribute::Reverse),
    ] {
        if modifiers.contains(modifier) {
            content.attributes.set(attribute);
        }
    }
    content
}

/// Write `text` with its styling, one terminal line per line.
pub fn write_text<W: Write>(writer: &mut W, text: &Text<'_>) -> io::Result<()> {
    for line in &text.lines {
        for span in &line.spans {
            if span.style == Style::default() {
                queue!(writer, Print(span.content.as_ref()))?;
            } else {
                let styled = StyledContent::new(content_style(span.style), span.content.as_ref());
                queue!(writer, PrintStyledContent(styled))?;
            }
        }
        queue!(writer, Print("\n"))?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::{Line, Span};

    #[test]
    fn test_plain_spans_have_no_escapes() {
        let text = Text::from(vec![Line::from("hello"), Line::from("world")]);
        let mut out = Vec::new();
        write_text(&mut out, &text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello\nworld\n");
    }

    #[test]
    fn test_styled_spans_emit_escapes() {
        let style = Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
        let text = Text::from(Line::from(vec![Span::raw("see "), Span::styled("link", style)]));
        let mut out = Vec::new();
        write_text(&mut out, &text).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.starts_with("see "));
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("link"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_content_style_mapping() {
        let style = Style::default()
            .fg(Color::Rgb(1, 2, 3))
            .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT);
        let content = content_style(style);
        assert_eq!(content.foreground_color, Some(TermColor::Rgb { r: 1, g: 2, b: 3 }));
        assert!(content.attributes.has(Attribute::Bold));
        assert!(content.attributes.has(Attribute::CrossedOut));
        assert!(!content.attributes.has(Attribute::Italic));
    }
}
