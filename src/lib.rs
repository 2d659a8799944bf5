//! # quillview
//!
//! Render Quill delta rich-text documents as styled text blocks.
//!
//! A delta is the JSON operation list the Quill editor produces: inserts of
//! text with optional bold/italic/link attributes, where headers, list items
//! and quotes are marked on the newline that ends the line. This library
//! groups those operations into lines and resolves each line into a
//! [`RenderBlock`]: styled runs, link annotations, a paragraph indent and a
//! quote flag, ready for any painter to draw.
//!
//! ## Features
//!
//! - Tolerant decoding: missing attributes take defaults, and anything that is
//!   not a delta renders as one plain block instead of failing
//! - Ordered-list numbering per indent level, bullets, headers, quotes, links
//! - Pluggable styling through [`ContentStyle`]
//! - Terminal painting with wrapping and ANSI output
//! - Plain text to delta encoding for composed posts and comments
//!
//! ## Example
//!
//! ```rust
//! use quillview::{parse_quill, encode_plain_text};
//!
//! let delta = r#"{"ops":[
//!     {"insert":"Agenda"},
//!     {"insert":"\n","attributes":{"header":1}},
//!     {"insert":"Intro"},
//!     {"insert":"\n","attributes":{"list":"ordered"}},
//!     {"insert":"Demo"},
//!     {"insert":"\n","attributes":{"list":"ordered"}}
//! ]}"#;
//!
//! let blocks = parse_quill(delta);
//! assert_eq!(blocks[0].text(), "Agenda");
//! assert_eq!(blocks[1].text(), "1. Intro");
//! assert_eq!(blocks[2].text(), "2. Demo");
//!
//! let composed = encode_plain_text("Nice post!");
//! assert_eq!(parse_quill(&composed)[0].text(), "Nice post!");
//! ```

/// Configuration module for user style and output preferences.
///
/// Reads `config.toml` from the platform config directory.
pub mod config;

/// Delta document model, decoding, line segmentation and encoding.
pub mod delta;

/// Logging setup for the binary and tests.
pub mod logging;

/// Styled render blocks and the style policy that shapes them.
pub mod render;

/// Terminal painting of render blocks.
///
/// Converts blocks to ratatui text with wrapping, and writes it as ANSI.
pub mod terminal;

// Re-export commonly used types for convenience
pub use config::Config;
pub use delta::{Document, QuillParser, decode, encode_plain_text, is_blank, parse_quill};
pub use render::{ContentStyle, DefaultStyle, RenderBlock, StyledText, ThemedStyle};
