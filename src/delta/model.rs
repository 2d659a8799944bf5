//! Typed representation of a Quill delta document.
//!
//! A delta is an ordered list of insert operations. Each operation may carry a
//! sparse set of formatting attributes; every attribute has a default value, so
//! "absent" and "present with the default value" are the same thing once a
//! document has been decoded.

use serde::{Deserialize, Deserializer, Serialize};

/// A decoded delta document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub ops: Vec<Operation>,
}

impl Document {
    /// Build the single-operation document used when composing plain text.
    ///
    /// The text always gets a trailing newline so it forms a complete line.
    pub fn from_plain_text(text: &str) -> Self {
        Self {
            ops: vec![Operation::text(format!("{}\n", text))],
        }
    }
}

/// One unit of inserted content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Literal text, possibly spanning several lines.
    pub insert: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl Operation {
    /// An operation with no formatting.
    pub fn text(insert: impl Into<String>) -> Self {
        Self {
            insert: insert.into(),
            attributes: None,
        }
    }

    /// An operation carrying formatting attributes.
    pub fn styled(insert: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            insert: insert.into(),
            attributes: Some(attributes),
        }
    }
}

/// Inline and block formatting attached to an operation.
///
/// Unknown keys (`color`, `align`, ...) are ignored when decoding. A JSON
/// `null` reads as the field's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub strike: bool,

    /// Link target; empty when the run is not a link.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub link: String,

    /// Header level. Only 1 and 2 get a distinct size; 0 means "not a header".
    /// Other values, negative ones included, still close the line.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub header: i32,

    /// Indent level; only positive levels are indented.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub indent: i32,

    /// `"ordered"`, `"bullet"`, or anything else for "not a list item".
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub list: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub blockquote: bool,
}

/// The list styles that get a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Bullet,
}

impl Attributes {
    /// Whether these attributes close the line they appear on.
    pub fn is_block(&self) -> bool {
        self.header != 0 || !self.list.is_empty() || self.blockquote
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        match self.list.as_str() {
            "ordered" => Some(ListKind::Ordered),
            "bullet" => Some(ListKind::Bullet),
            _ => None,
        }
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_detection() {
        assert!(!Attributes::default().is_block());

        let header = Attributes {
            header: 1,
            ..Default::default()
        };
        assert!(header.is_block());

        let list = Attributes {
            list: "checked".to_string(),
            ..Default::default()
        };
        assert!(list.is_block());
        assert_eq!(list.list_kind(), None);

        let quote = Attributes {
            blockquote: true,
            ..Default::default()
        };
        assert!(quote.is_block());

        let inline = Attributes {
            bold: true,
            indent: 2,
            link: "https://non.io".to_string(),
            ..Default::default()
        };
        assert!(!inline.is_block());
        assert!(inline.has_link());
    }

    #[test]
    fn test_list_kind() {
        let ordered = Attributes {
            list: "ordered".to_string(),
            ..Default::default()
        };
        let bullet = Attributes {
            list: "bullet".to_string(),
            ..Default::default()
        };
        assert_eq!(ordered.list_kind(), Some(ListKind::Ordered));
        assert_eq!(bullet.list_kind(), Some(ListKind::Bullet));
    }

    #[test]
    fn test_plain_text_document() {
        let doc = Document::from_plain_text("hello");
        assert_eq!(doc.ops.len(), 1);
        assert_eq!(doc.ops[0].insert, "hello\n");
        assert!(doc.ops[0].attributes.is_none());
    }

    #[test]
    fn test_default_attributes_serialize_empty() {
        let json = serde_json::to_string(&Attributes::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
