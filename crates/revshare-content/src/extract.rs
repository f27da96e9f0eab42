// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON extraction from model output.
//!
//! Prompts ask for strict JSON, but models still wrap objects in prose
//! or code fences. The outermost `{...}` span is what we parse.

/// The outermost JSON-object span of `text`, or `None` when the text
/// contains no braces in object order.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bare_object() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn extracts_object_wrapped_in_prose() {
        let text = "Here is the JSON you asked for:\n{\"a\": 1}\nLet me know!";
        assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn extracts_object_in_code_fence() {
        let text = "```json\n{\"companyName\": \"Acme\"}\n```";
        assert_eq!(extract_json_object(text), Some("{\"companyName\": \"Acme\"}"));
    }

    #[test]
    fn spans_nested_objects() {
        let text = "x {\"a\": {\"b\": 2}} y";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 2}}"));
    }

    #[test]
    fn no_object_returns_none() {
        assert!(extract_json_object("no json here").is_none());
        assert!(extract_json_object("").is_none());
        assert!(extract_json_object("} reversed {").is_none());
    }
}
