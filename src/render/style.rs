//! Style policy consulted by the block renderer.
//!
//! Font sizes are in scale-independent pixels (sp), the unit the non.io
//! clients lay text out in. Painters that target a character grid convert
//! them relative to [`ContentStyle::font_size`].

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::config::StyleConfig;

/// Line decoration applied to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    Underline,
    LineThrough,
}

/// The set of styling decisions a renderer needs.
///
/// Implement this to theme rendered documents; [`DefaultStyle`] matches the
/// look of the non.io apps.
pub trait ContentStyle {
    fn font_size(&self) -> f32;
    fn header1_font_size(&self) -> f32;
    fn header2_font_size(&self) -> f32;

    /// Line height as a multiple of the font size. Not applied by the
    /// renderer; paragraph painters read it.
    fn line_height_multiple(&self) -> f32;

    /// Decoration used for underlined and linked runs.
    fn underline_style(&self) -> TextDecoration;

    /// `None` inherits the surrounding text color.
    fn text_color(&self) -> Option<Color>;
    fn background_color(&self) -> Color;
    fn link_color(&self) -> Color;

    /// Color of the bar painted beside block quotes.
    fn quote_color(&self) -> Color {
        Color::Gray
    }

    fn bullet_symbol(&self) -> &str;
    fn ordered_list_number(&self, number: u32) -> String;

    /// Paragraph offset, in sp, for an indent level.
    fn indent_size(&self, level: i32) -> f32;
}

/// The stock style: 14sp body text, 24/20sp headers, blue links.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStyle;

impl DefaultStyle {
    pub const FONT_SIZE: f32 = 14.0;
    pub const HEADER1_FONT_SIZE: f32 = 24.0;
    pub const HEADER2_FONT_SIZE: f32 = 20.0;
    pub const LINE_HEIGHT_MULTIPLE: f32 = 1.2;
    pub const BULLET: &'static str = "\u{2022}";
}

impl ContentStyle for DefaultStyle {
    fn font_size(&self) -> f32 {
        Self::FONT_SIZE
    }

    fn header1_font_size(&self) -> f32 {
        Self::HEADER1_FONT_SIZE
    }

    fn header2_font_size(&self) -> f32 {
        Self::HEADER2_FONT_SIZE
    }

    fn line_height_multiple(&self) -> f32 {
        Self::LINE_HEIGHT_MULTIPLE
    }

    fn underline_style(&self) -> TextDecoration {
        TextDecoration::Underline
    }

    fn text_color(&self) -> Option<Color> {
        Some(Color::Black)
    }

    fn background_color(&self) -> Color {
        Color::White
    }

    fn link_color(&self) -> Color {
        Color::Blue
    }

    fn bullet_symbol(&self) -> &str {
        Self::BULLET
    }

    fn ordered_list_number(&self, number: u32) -> String {
        format!("{}.", number)
    }

    fn indent_size(&self, level: i32) -> f32 {
        level as f32 * 2.0 * self.font_size()
    }
}

/// A style built from the `[style]` section of the user's config.
///
/// Anything the config leaves out falls back to [`DefaultStyle`], except the
/// text color: left unset, text keeps the terminal's own foreground.
#[derive(Debug, Clone)]
pub struct ThemedStyle {
    font_size: f32,
    header1_font_size: f32,
    header2_font_size: f32,
    line_height_multiple: f32,
    underline_style: TextDecoration,
    text_color: Option<Color>,
    background_color: Color,
    link_color: Color,
    quote_color: Color,
    bullet: String,
    ordered_format: String,
    indent_multiplier: f32,
}

impl ThemedStyle {
    pub fn from_config(config: &StyleConfig) -> Self {
        let defaults = DefaultStyle;
        let color = |value: &Option<crate::config::ColorValue>| {
            value.as_ref().and_then(|v| v.to_color())
        };

        Self {
            font_size: config.font_size.unwrap_or(DefaultStyle::FONT_SIZE),
            header1_font_size: config
                .header1_font_size
                .unwrap_or(DefaultStyle::HEADER1_FONT_SIZE),
            header2_font_size: config
                .header2_font_size
                .unwrap_or(DefaultStyle::HEADER2_FONT_SIZE),
            line_height_multiple: config
                .line_height_multiple
                .unwrap_or(DefaultStyle::LINE_HEIGHT_MULTIPLE),
            underline_style: config
                .underline_style
                .unwrap_or_else(|| defaults.underline_style()),
            text_color: color(&config.text_color),
            background_color: color(&config.background_color)
                .unwrap_or_else(|| defaults.background_color()),
            link_color: color(&config.link_color).unwrap_or_else(|| defaults.link_color()),
            quote_color: color(&config.quote_color).unwrap_or_else(|| defaults.quote_color()),
            bullet: config
                .bullet
                .clone()
                .unwrap_or_else(|| DefaultStyle::BULLET.to_string()),
            ordered_format: config
                .ordered_format
                .clone()
                .unwrap_or_else(|| "{n}.".to_string()),
            indent_multiplier: config.indent_multiplier.unwrap_or(2.0),
        }
    }
}

impl Default for ThemedStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

impl ContentStyle for ThemedStyle {
    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn header1_font_size(&self) -> f32 {
        self.header1_font_size
    }

    fn header2_font_size(&self) -> f32 {
        self.header2_font_size
    }

    fn line_height_multiple(&self) -> f32 {
        self.line_height_multiple
    }

    fn underline_style(&self) -> TextDecoration {
        self.underline_style
    }

    fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    fn background_color(&self) -> Color {
        self.background_color
    }

    fn link_color(&self) -> Color {
        self.link_color
    }

    fn quote_color(&self) -> Color {
        self.quote_color
    }

    fn bullet_symbol(&self) -> &str {
        &self.bullet
    }

    fn ordered_list_number(&self, number: u32) -> String {
        self.ordered_format.replace("{n}", &number.to_string())
    }

    fn indent_size(&self, level: i32) -> f32 {
        level as f32 * self.indent_multiplier * self.font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorValue;

    #[test]
    fn test_default_style_values() {
        let style = DefaultStyle;
        assert_eq!(style.font_size(), 14.0);
        assert_eq!(style.header1_font_size(), 24.0);
        assert_eq!(style.header2_font_size(), 20.0);
        assert_eq!(style.bullet_symbol(), "•");
        assert_eq!(style.ordered_list_number(3), "3.");
        assert_eq!(style.indent_size(0), 0.0);
        assert_eq!(style.indent_size(2), 56.0);
        assert_eq!(style.link_color(), Color::Blue);
    }

    #[test]
    fn test_themed_style_matches_default_when_unconfigured() {
        let themed = ThemedStyle::default();
        let default = DefaultStyle;
        assert_eq!(themed.font_size(), default.font_size());
        assert_eq!(themed.bullet_symbol(), default.bullet_symbol());
        assert_eq!(themed.ordered_list_number(7), default.ordered_list_number(7));
        assert_eq!(themed.indent_size(3), default.indent_size(3));
        assert_eq!(themed.link_color(), default.link_color());
        assert_eq!(themed.text_color(), None);
        assert_eq!(themed.underline_style(), TextDecoration::Underline);
    }

    #[test]
    fn test_themed_style_overrides() {
        let config = StyleConfig {
            font_size: Some(10.0),
            bullet: Some("-".to_string()),
            ordered_format: Some("({n})".to_string()),
            indent_multiplier: Some(4.0),
            link_color: Some(ColorValue::Rgb { rgb: [1, 2, 3] }),
            text_color: Some(ColorValue::Named("yellow".to_string())),
            ..Default::default()
        };
        let style = ThemedStyle::from_config(&config);
        assert_eq!(style.bullet_symbol(), "-");
        assert_eq!(style.ordered_list_number(12), "(12)");
        assert_eq!(style.indent_size(1), 40.0);
        assert_eq!(style.link_color(), Color::Rgb(1, 2, 3));
        assert_eq!(style.text_color(), Some(Color::Yellow));
        // headers keep their defaults
        assert_eq!(style.header1_font_size(), 24.0);
    }
}
