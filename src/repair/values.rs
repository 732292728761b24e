//! Value-Quoting Pass: quote unquoted (including multi-word) scalar values.

use std::sync::OnceLock;

use regex::{Captures, Regex};

static VALUE_PATTERN: OnceLock<Regex> = OnceLock::new();
static LITERAL_PATTERN: OnceLock<Regex> = OnceLock::new();
static NUMERIC_PATTERN: OnceLock<Regex> = OnceLock::new();

fn value_pattern() -> &'static Regex {
    VALUE_PATTERN.get_or_init(|| {
        Regex::new(r#"(:\s*)([^{\[\]",}\]\s][^,\]}]*)"#).expect("invalid value pattern")
    })
}

fn literal_pattern() -> &'static Regex {
    LITERAL_PATTERN.get_or_init(|| Regex::new(r"^(true|false|null)$").expect("invalid literal pattern"))
}

fn numeric_pattern() -> &'static Regex {
    NUMERIC_PATTERN.get_or_init(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("invalid numeric pattern"))
}

/// Quote every raw (unquoted) value token following a `:`, leaving booleans,
/// `null`, and numeric literals unquoted and re-enclosing single-quoted
/// values in double quotes.
pub fn quote_values(input: &str) -> String {
    value_pattern()
        .replace_all(input, |caps: &Captures| {
            let prefix = &caps[1];
            let value = caps[2].trim();

            if literal_pattern().is_match(value) || numeric_pattern().is_match(value) {
                return format!("{prefix}{value}");
            }
            if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
                return format!("{prefix}\"{}\"", &value[1..value.len() - 1]);
            }
            if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
                return format!("{prefix}{value}");
            }
            format!("{prefix}\"{value}\"")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_bare_multi_word_value() {
        assert_eq!(quote_values(r#"{"test": Hello World}"#), r#"{"test": "Hello World"}"#);
    }

    #[test]
    fn leaves_literals_and_numbers_unquoted() {
        assert_eq!(quote_values(r#"{"a": true}"#), r#"{"a": true}"#);
        assert_eq!(quote_values(r#"{"a": null}"#), r#"{"a": null}"#);
        assert_eq!(quote_values(r#"{"a": 42}"#), r#"{"a": 42}"#);
        assert_eq!(quote_values(r#"{"a": -3.5}"#), r#"{"a": -3.5}"#);
    }

    #[test]
    fn re_encloses_single_quoted_value() {
        assert_eq!(quote_values("{\"a\": 'hi'}"), r#"{"a": "hi"}"#);
    }

    #[test]
    fn leaves_already_double_quoted_value() {
        assert_eq!(quote_values(r#"{"a": "hi"}"#), r#"{"a": "hi"}"#);
    }

    #[test]
    fn does_not_touch_array_or_object_values() {
        assert_eq!(quote_values(r#"{"a": [1, 2]}"#), r#"{"a": [1, 2]}"#);
        assert_eq!(quote_values(r#"{"a": {"b": 1}}"#), r#"{"a": {"b": 1}}"#);
    }
}
