//! Rendering of segmented lines into styled blocks.
//!
//! [`render_line`] resolves block and inline formatting against a
//! [`ContentStyle`]; the resulting [`RenderBlock`]s are what painters consume.

pub mod block;
pub mod style;

pub use block::{
    Annotation, FontStyle, FontWeight, ListCounters, RenderBlock, Run, RunStyle, StyledText,
    TextIndent, URL_TAG, render_line,
};
pub use style::{ContentStyle, DefaultStyle, TextDecoration, ThemedStyle};
