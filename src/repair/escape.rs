//! Illegal-Character Escape Pass: blanket control-character escaping, then a
//! quote-aware pass that disambiguates an embedded `"` from a closing one.

/// Stage 1 (blanket) + stage 2 (quote-aware embedded-quote escape).
pub fn escape_illegal_characters(input: &str) -> String {
    escape_quote_aware(&escape_blanket(input))
}

fn escape_blanket(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Walk the string tracking whether the cursor is inside a double-quoted
/// literal. On `"`: if not in a string, it opens one. If in a string, look
/// ahead past whitespace — if the next non-whitespace character is one of
/// `:` `,` `}` `]`, or end-of-input, this `"` closes the string; otherwise
/// it is an embedded quote and gets escaped.
fn escape_quote_aware(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            if !in_string {
                in_string = true;
                out.push('"');
            } else {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                let closes = j >= chars.len() || matches!(chars[j], ':' | ',' | '}' | ']');
                if closes {
                    in_string = false;
                    out.push('"');
                } else {
                    out.push('\\');
                    out.push('"');
                }
            }
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}
