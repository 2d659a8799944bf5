use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::TextDecoration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Overrides for the document style. Unset fields keep the stock look.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header1_font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header2_font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height_multiple: Option<f32>,
    /// "underline" or "line-through"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline_style: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<String>,
    /// Ordered list marker, `{n}` is replaced by the item number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_format: Option<String>,
    /// Indent per level, as a multiple of the font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_multiplier: Option<f32>,
}

/// Terminal output preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Wrap width in columns; 0 uses the terminal width
    #[serde(default)]
    pub width: u16,

    /// Columns of left margin before the quote bar
    #[serde(default = "default_quote_margin")]
    pub quote_margin: u16,

    /// "auto", "always" or "never"
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: 0,
            quote_margin: default_quote_margin(),
            color: default_color(),
        }
    }
}

fn default_quote_margin() -> u16 {
    2
}

fn default_color() -> String {
    "auto".to_string()
}

/// Color value that can be specified in multiple formats
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Named color (e.g., "Red", "Cyan", "White")
    Named(String),
    /// RGB color { rgb = [r, g, b] }
    Rgb { rgb: [u8; 3] },
    /// Indexed color { indexed = 235 }
    Indexed { indexed: u8 },
}

impl ColorValue {
    /// Convert to ratatui Color
    pub fn to_color(&self) -> Option<Color> {
        match self {
            ColorValue::Named(name) => match name.to_lowercase().as_str() {
                "black" => Some(Color::Black),
                "red" => Some(Color::Red),
                "green" => Some(Color::Green),
                "yellow" => Some(Color::Yellow),
                "blue" => Some(Color::Blue),
                "magenta" => Some(Color::Magenta),
                "cyan" => Some(Color::Cyan),
                "gray" | "grey" => Some(Color::Gray),
                "darkgray" | "darkgrey" => Some(Color::DarkGray),
                "lightred" => Some(Color::LightRed),
                "lightgreen" => Some(Color::LightGreen),
                "lightyellow" => Some(Color::LightYellow),
                "lightblue" => Some(Color::LightBlue),
                "lightmagenta" => Some(Color::LightMagenta),
                "lightcyan" => Some(Color::LightCyan),
                "white" => Some(Color::White),
                hex => parse_hex(hex),
            },
            ColorValue::Rgb { rgb } => Some(Color::Rgb(rgb[0], rgb[1], rgb[2])),
            ColorValue::Indexed { indexed } => Some(Color::Indexed(*indexed)),
        }
    }
}

/// "#rrggbb", the form Quill itself writes colors in
fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Config {
    /// Get the XDG-style config file path (~/.config/quillview/config.toml)
    /// This is preferred on macOS for CLI tools and cross-platform dotfiles
    #[cfg(target_os = "macos")]
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("quillview").join("config.toml"))
    }

    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/quillview/config.toml
    /// - Linux: ~/.config/quillview/config.toml
    /// - Windows: %APPDATA%/quillview/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quillview").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    /// On macOS, checks ~/.config/quillview first, then falls back to ~/Library/Application Support
    pub fn load() -> Self {
        #[cfg(target_os = "macos")]
        {
            if let Some(config) = Self::xdg_config_path().and_then(|p| Self::read(&p)) {
                return config;
            }
        }

        Self::config_path()
            .and_then(|path| Self::read(&path))
            .unwrap_or_default()
    }

    /// Load config from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        Self::read(path).unwrap_or_default()
    }

    fn read(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Serialize the effective configuration
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
