//! Decoding of the JSON delta wire format.

use super::model::Document;

/// Errors that can occur while decoding a delta document.
#[derive(Debug)]
pub enum DecodeError {
    /// The input was empty or only whitespace
    Empty,
    /// The input was not a well-formed delta (bad JSON, missing `ops`,
    /// wrong field types)
    Json(serde_json::Error),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Empty => write!(f, "Empty delta document"),
            DecodeError::Json(e) => write!(f, "Invalid delta document: {}", e),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Empty => None,
            DecodeError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Json(e)
    }
}

/// Decode a delta document from its JSON representation.
///
/// Expects an object with an `ops` array whose elements each carry a string
/// `insert` and an optional `attributes` object. Missing attributes take their
/// defaults; anything structurally wrong is a [`DecodeError`].
///
/// # Examples
///
/// ```
/// use quillview::delta::decode;
///
/// let doc = decode(r#"{"ops":[{"insert":"hi","attributes":{"bold":true}}]}"#).unwrap();
/// assert_eq!(doc.ops[0].insert, "hi");
/// assert!(doc.ops[0].attributes.as_ref().unwrap().bold);
///
/// assert!(decode("not json at all").is_err());
/// ```
pub fn decode(raw: &str) -> Result<Document, DecodeError> {
    if raw.trim().is_empty() {
        return Err(DecodeError::Empty);
    }

    let document: Document = serde_json::from_str(raw)?;
    tracing::debug!(ops = document.ops.len(), "decoded delta document");
    Ok(document)
}
