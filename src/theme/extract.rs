// src/theme/extract.rs — Pull a JSON object out of free-form model output
//
// The span runs from the first `{` to the last `}`. Prose containing braces
// before or after the object, or two objects in one response, yields a span
// that fails to parse; that iteration is then skipped.

use super::{Theme, ThemeError};

/// Return the substring from the first `{` to the last `}` (inclusive).
///
/// `None` when either brace is missing or the last `}` comes before the
/// first `{`.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extract and parse the theme object embedded in `text`.
pub fn parse_theme(text: &str) -> Result<Theme, ThemeError> {
    let span = extract_json_span(text).ok_or(ThemeError::NoJson)?;
    let value: serde_json::Value = serde_json::from_str(span)?;
    Theme::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_span_bare_object() {
        assert_eq!(extract_json_span(r#"{"a":1}"#), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_span_with_surrounding_prose() {
        let text = "Here is your theme:\n```json\n{\"name\": \"x\"}\n```\nEnjoy!";
        assert_eq!(extract_json_span(text), Some("{\"name\": \"x\"}"));
    }

    #[test]
    fn test_span_nested_braces() {
        let text = r#"{"styles": {"colors": {"light": {}}}}"#;
        assert_eq!(extract_json_span(text), Some(text));
    }

    #[test]
    fn test_span_missing_open() {
        assert_eq!(extract_json_span("no json here }"), None);
    }

    #[test]
    fn test_span_missing_close() {
        assert_eq!(extract_json_span("{ truncated"), None);
    }

    #[test]
    fn test_span_reversed_braces() {
        assert_eq!(extract_json_span("} then {"), None);
    }

    #[test]
    fn test_span_empty() {
        assert_eq!(extract_json_span(""), None);
    }

    #[test]
    fn test_span_multibyte_prose() {
        let text = "テーマ: {\"name\": \"海\"} ✓";
        assert_eq!(extract_json_span(text), Some("{\"name\": \"海\"}"));
    }

    #[test]
    fn test_parse_theme_ok() {
        let theme = parse_theme("Sure! {\"name\": \"Ocean\", \"styles\": {}} done").unwrap();
        assert_eq!(theme.name(), Some("Ocean"));
    }

    #[test]
    fn test_parse_theme_no_json() {
        let err = parse_theme("I cannot help with that.").unwrap_err();
        assert!(matches!(err, ThemeError::NoJson));
    }

    #[test]
    fn test_parse_theme_malformed() {
        let err = parse_theme("{\"name\": \"Ocean\",}").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_theme_two_objects_fails() {
        // First `{` to last `}` swallows both objects and the text between.
        let err = parse_theme("{\"name\": \"a\"} and {\"name\": \"b\"}").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_theme_brace_in_trailing_prose_fails() {
        let err = parse_theme("{\"name\": \"a\"}\nUse it like `{theme}`").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_theme_preserves_key_order() {
        let theme = parse_theme(r#"{"styles": {}, "name": "z", "alpha": 1}"#).unwrap();
        let keys: Vec<&str> = theme.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["styles", "name", "alpha"]);
    }
}
