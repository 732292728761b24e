//! Tunable limits for candidate extraction and repair.

/// Bounds on the work a [`crate::Parser`] will do for a single `parse` call.
///
/// Spec-level behavior never changes based on these; they exist only to
/// guard against pathological input (deeply nested brackets, an input with
/// an unreasonable number of top-level candidates).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum bracket-nesting depth the candidate extractor will descend
    /// into before it stops treating further `{`/`[` as opening a new
    /// nested candidate. Candidates are still closed off correctly up to
    /// this depth; deeper input is not rejected, just not explored further.
    pub max_nesting_depth: usize,
    /// Maximum number of top-level candidates the extractor will return.
    /// Additional candidates in the input are ignored.
    pub max_candidates: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: 64,
            max_candidates: 16,
        }
    }
}
