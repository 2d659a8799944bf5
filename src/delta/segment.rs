//! Splitting a delta into logical lines.
//!
//! Quill stores block formatting (headers, list items, quotes) on the newline
//! that ends a line, and lets inline-formatted runs flow into each other until
//! the next newline. This pass walks the operations once and groups their
//! text into [`Line`]s, each ending in a terminator piece whose attributes
//! carry that line's block formatting.

use super::model::{Attributes, Document};

/// A piece of text within a line, borrowed from the source document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece<'a> {
    pub text: &'a str,
    pub attributes: Option<&'a Attributes>,
}

/// The pieces that make up one rendered line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line<'a> {
    pieces: Vec<Piece<'a>>,
}

impl<'a> Line<'a> {
    pub fn pieces(&self) -> &[Piece<'a>] {
        &self.pieces
    }

    /// The last piece, whose attributes hold the block-level formatting.
    pub fn terminator(&self) -> Option<&Piece<'a>> {
        self.pieces.last()
    }

    /// Concatenated text of all pieces.
    pub fn text(&self) -> String {
        self.pieces.iter().map(|p| p.text).collect()
    }

    fn push(&mut self, text: &'a str, attributes: Option<&'a Attributes>) {
        self.pieces.push(Piece { text, attributes });
    }
}

/// Group a document's operations into lines.
///
/// A line closes on every newline inside an insert, and on any operation whose
/// attributes are block-level (its own text is dropped, only the attributes are
/// kept). Text after the last newline of the document never forms a line.
///
/// # Examples
///
/// ```
/// use quillview::delta::{decode, segment};
///
/// let doc = decode(r#"{"ops":[{"insert":"a\nb\n"}]}"#).unwrap();
/// let lines = segment(&doc);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].text(), "a");
/// assert_eq!(lines[1].text(), "b");
/// ```
pub fn segment(document: &Document) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut current = Line::default();

    for op in &document.ops {
        let attributes = op.attributes.as_ref();

        if attributes.is_some_and(Attributes::is_block) {
            current.push("", attributes);
            lines.push(std::mem::take(&mut current));
            continue;
        }

        let has_newline = op.insert.contains('\n');
        let mut texts = op.insert.split('\n').peekable();
        while let Some(text) = texts.next() {
            current.push(text, attributes);
            if has_newline && texts.peek().is_some() {
                lines.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.pieces.is_empty() {
        tracing::trace!(
            pieces = current.pieces.len(),
            "dropping trailing pieces without a closing newline"
        );
    }
    tracing::debug!(lines = lines.len(), "segmented delta document");

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::model::Operation;

    fn attrs(f: impl FnOnce(&mut Attributes)) -> Attributes {
        let mut a = Attributes::default();
        f(&mut a);
        a
    }

    #[test]
    fn test_newline_splitting() {
        let doc = Document {
            ops: vec![Operation::text("a\nb\n")],
        };
        let lines = segment(&doc);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "a");
        assert_eq!(lines[1].text(), "b");
    }

    #[test]
    fn test_inline_runs_join_one_line() {
        let bold = attrs(|a| a.bold = true);
        let doc = Document {
            ops: vec![
                Operation::text("Hello "),
                Operation::styled("world", bold.clone()),
                Operation::text("!\n"),
            ],
        };
        let lines = segment(&doc);
        assert_eq!(lines.len(), 1);

        let pieces = lines[0].pieces();
        // the trailing "" after the newline belongs to the next (dropped) line
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].text, "Hello ");
        assert_eq!(pieces[1].attributes, Some(&bold));
        assert_eq!(pieces[2].text, "!");
    }

    #[test]
    fn test_block_attribute_closes_line() {
        let header = attrs(|a| a.header = 1);
        let doc = Document {
            ops: vec![
                Operation::text("Title"),
                Operation::styled("\n", header.clone()),
                Operation::text("Body\n"),
            ],
        };
        let lines = segment(&doc);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "Title");

        let terminator = lines[0].terminator().unwrap();
        assert_eq!(terminator.text, "");
        assert_eq!(terminator.attributes, Some(&header));
        assert_eq!(lines[1].text(), "Body");
    }

    #[test]
    fn test_block_insert_text_is_ignored() {
        let quote = attrs(|a| a.blockquote = true);
        let doc = Document {
            ops: vec![Operation::styled("ignored\n", quote)],
        };
        let lines = segment(&doc);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "");
    }

    #[test]
    fn test_trailing_partial_line_is_dropped() {
        let doc = Document {
            ops: vec![Operation::text("first\nsecond")],
        };
        let lines = segment(&doc);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "first");
    }

    #[test]
    fn test_consecutive_newlines_make_empty_lines() {
        let doc = Document {
            ops: vec![Operation::text("a\n\nb\n")],
        };
        let texts: Vec<_> = segment(&doc).iter().map(Line::text).collect();
        assert_eq!(texts, vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(segment(&Document::default()).is_empty());
    }
}
