//! Comma-Insertion Pass: splice in commas the model dropped between adjacent
//! structures or between a value and the next key.

use std::sync::OnceLock;

use regex::Regex;

static ADJACENT_OBJECTS: OnceLock<Regex> = OnceLock::new();
static ADJACENT_ARRAYS: OnceLock<Regex> = OnceLock::new();
static VALUE_THEN_KEY: OnceLock<Regex> = OnceLock::new();

fn adjacent_objects() -> &'static Regex {
    ADJACENT_OBJECTS.get_or_init(|| Regex::new(r"\}\s*\{").expect("invalid pattern"))
}

fn adjacent_arrays() -> &'static Regex {
    ADJACENT_ARRAYS.get_or_init(|| Regex::new(r"\]\s*\[").expect("invalid pattern"))
}

fn value_then_key() -> &'static Regex {
    VALUE_THEN_KEY.get_or_init(|| {
        Regex::new(r#"(":\s*[^",{}\[\]]+)\s*"(\w+)":"#).expect("invalid pattern")
    })
}

/// Insert commas between `}{`, between `][`, and between a bare primitive
/// value and the quoted key that immediately follows it.
pub fn insert_missing_commas(input: &str) -> String {
    let step1 = adjacent_objects().replace_all(input, "},{");
    let step2 = adjacent_arrays().replace_all(&step1, "],[");
    value_then_key()
        .replace_all(&step2, r#"$1, "$2":"#)
        .into_owned()
}
