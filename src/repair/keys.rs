//! Key-Quoting Pass: normalize every `{`/`,`-delimited object key to a
//! double-quoted string.

use std::sync::OnceLock;

use regex::{Captures, Regex};

static KEY_PATTERN: OnceLock<Regex> = OnceLock::new();

// Three alternatives for the key token: single-quoted, double-quoted, or a
// bare run of identifier characters. Matching the quoted alternatives too
// (rather than only bare identifiers, as the identifier-only class alone
// would) is what lets an already-quoted key re-enclose instead of being
// skipped outright by the scan.
fn pattern() -> &'static Regex {
    KEY_PATTERN.get_or_init(|| {
        Regex::new(r#"([{,]\s*)(?:'([^']*)'|"([^"]*)"|([A-Za-z0-9_]+))\s*:"#)
            .expect("invalid key pattern")
    })
}

/// Locate every delimiter–identifier–colon token and ensure the identifier
/// is double-quoted: single-quoted keys are re-enclosed, double-quoted keys
/// are left as-is, bare identifiers are wrapped.
pub fn quote_keys(input: &str) -> String {
    pattern()
        .replace_all(input, |caps: &Captures| {
            let prefix = &caps[1];
            let key = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .expect("one alternative always matches")
                .as_str();
            format!("{prefix}\"{key}\":")
        })
        .into_owned()
}
