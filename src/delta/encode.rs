//! Producing and inspecting delta JSON for composed content.

use serde_json::Value;

use super::model::Document;

/// Wrap plain text as a single-insert delta: `{"ops":[{"insert":"<text>\n"}]}`.
///
/// # Examples
///
/// ```
/// use quillview::delta::encode_plain_text;
///
/// assert_eq!(encode_plain_text("hi"), r#"{"ops":[{"insert":"hi\n"}]}"#);
/// ```
pub fn encode_plain_text(text: &str) -> String {
    let document = Document::from_plain_text(text);
    // a struct of strings always serializes
    serde_json::to_string(&document).unwrap_or_default()
}

/// Whether a composed delta has nothing worth submitting.
///
/// True when the input is not a delta, has no `ops`, or every text insert is
/// whitespace. An embed (any non-text insert such as an image) counts as
/// content.
///
/// ```
/// use quillview::delta::is_blank;
///
/// assert!(is_blank(r#"{"ops":[{"insert":"  \n"}]}"#));
/// assert!(!is_blank(r#"{"ops":[{"insert":"hello\n"}]}"#));
/// ```
pub fn is_blank(raw: &str) -> bool {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return true;
    };
    let Some(ops) = value.get("ops").and_then(Value::as_array) else {
        return true;
    };

    !ops.iter().any(|op| match op.get("insert") {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.trim().is_empty(),
        Some(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::decode;

    #[test]
    fn test_encode_escapes() {
        let json = encode_plain_text("say \"hi\"\tnow");
        assert_eq!(json, r#"{"ops":[{"insert":"say \"hi\"\tnow\n"}]}"#);

        let doc = decode(&json).unwrap();
        assert_eq!(doc.ops[0].insert, "say \"hi\"\tnow\n");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_plain_text(""), r#"{"ops":[{"insert":"\n"}]}"#);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("garbage"));
        assert!(is_blank(r#"{"other":1}"#));
        assert!(is_blank(r#"{"ops":[]}"#));
        assert!(is_blank(r#"{"ops":[{"insert":" \n"},{"retain":3}]}"#));
        assert!(!is_blank(r#"{"ops":[{"insert":"\n"},{"insert":"x"}]}"#));
    }

    #[test]
    fn test_embed_is_not_blank() {
        assert!(!is_blank(r#"{"ops":[{"insert":{"image":"x.png"}},{"insert":"\n"}]}"#));
        assert!(!is_blank(r#"{"ops":[{"insert":"\n"},{"insert":{"video":"v.mp4"}}]}"#));
    }
}
