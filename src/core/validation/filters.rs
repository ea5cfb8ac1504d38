//! Coercion filters for loosely-typed JSON fields
//!
//! These filters turn raw JSON values into the typed shape the validators
//! expect. A value that cannot be coerced becomes `None`, which the validators
//! then report like a missing field.

use serde_json::Value;

/// Filter: coerce a JSON value to text
///
/// Strings pass through untouched and numbers are rendered in their JSON
/// form. Anything else (null, bool, arrays, objects) is rejected.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Filter: coerce a JSON value to a finite number
///
/// Numeric strings such as `"12.50"` are accepted after trimming.
pub fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Filter: trim surrounding whitespace
pub fn trim(value: &str) -> &str {
    value.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === text() ===

    #[test]
    fn test_text_string_passthrough() {
        assert_eq!(text(Some(&json!("  hello "))), Some("  hello ".to_string()));
    }

    #[test]
    fn test_text_number_rendered() {
        assert_eq!(text(Some(&json!(123456))), Some("123456".to_string()));
    }

    #[test]
    fn test_text_rejects_null_bool_and_objects() {
        assert_eq!(text(Some(&json!(null))), None);
        assert_eq!(text(Some(&json!(true))), None);
        assert_eq!(text(Some(&json!({"a": 1}))), None);
        assert_eq!(text(None), None);
    }

    // === number() ===

    #[test]
    fn test_number_from_json_number() {
        assert_eq!(number(Some(&json!(10))), Some(10.0));
        assert_eq!(number(Some(&json!(0.01))), Some(0.01));
    }

    #[test]
    fn test_number_from_numeric_string() {
        assert_eq!(number(Some(&json!(" 12.50 "))), Some(12.5));
    }

    #[test]
    fn test_number_rejects_non_numeric() {
        assert_eq!(number(Some(&json!("abc"))), None);
        assert_eq!(number(Some(&json!(""))), None);
        assert_eq!(number(Some(&json!("NaN"))), None);
        assert_eq!(number(Some(&json!("inf"))), None);
        assert_eq!(number(Some(&json!(true))), None);
        assert_eq!(number(None), None);
    }

    // === trim() ===

    #[test]
    fn test_trim_removes_whitespace() {
        assert_eq!(trim("  Acme \t"), "Acme");
        assert_eq!(trim("   "), "");
    }
}
