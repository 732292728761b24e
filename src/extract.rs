//! Candidate extraction: finding bracket-balanced substrings of raw input.
//!
//! This layer is deliberately *not* string-aware — it treats quote
//! characters as ordinary text. Quoting is the Repair Pipeline's job; see
//! [`crate::repair`].

use tracing::trace;

use crate::options::ParserOptions;
use crate::repair::close_brackets;

/// Find bracket-balanced candidate substrings in `text`, in textual order.
///
/// An opening `{`/`[` that is never closed by end-of-input still yields a
/// candidate: everything from that opener to the end of the text, run
/// through the bracket-closure repair pass to append the missing closers.
/// This is what lets truncated input recover the payload instead of
/// swallowing unrelated leading prose into the candidate (see
/// `SPEC_FULL.md`'s extractor note). Only when `text` contains no opening
/// bracket at all does the single fallback candidate become the entire
/// input, likewise closed.
pub fn extract_candidates(text: &str, options: &ParserOptions) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut candidates = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() && candidates.len() < options.max_candidates {
        let ch = bytes[i];
        if ch == b'{' || ch == b'[' {
            match find_balanced_end(bytes, i, options.max_nesting_depth) {
                Some(end) => {
                    candidates.push(text[i..=end].to_string());
                    i = end + 1;
                }
                None => {
                    trace!(start = i, "opener never closes, closing to end of input");
                    candidates.push(close_brackets(&text[i..]));
                    break;
                }
            }
        } else {
            i += 1;
        }
    }

    if candidates.is_empty() {
        trace!("no bracket at all in input, falling back to whole input");
        vec![close_brackets(text)]
    } else {
        candidates
    }
}

/// Given `bytes[start]` is an opening `{`/`[`, scan forward for the index
/// where the nesting this token opened returns to zero, treating all quote
/// characters as ordinary text and bracket *kind* as interchangeable (any
/// `{`/`[` opens one level, any `}`/`]` closes one level). This is the
/// hand-written linear scanner spec.md §9 prefers over a recursive regex
/// engine; stray mismatched brackets that survive into the candidate are
/// cleaned up later by the bracket-closure repair pass. Returns `None` if
/// the opener is never closed, or if nesting runs past `max_depth`.
fn find_balanced_end(bytes: &[u8], start: usize, max_depth: usize) -> Option<usize> {
    let mut depth: usize = 0;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'[' => {
                depth += 1;
                if depth > max_depth {
                    return None;
                }
            }
            b'}' | b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}
