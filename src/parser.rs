//! Orchestration: extract candidates, repair each, decode strictly, and
//! validate against the schema. Returns the first candidate that survives
//! every stage.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{RescueError, Result};
use crate::extract::extract_candidates;
use crate::options::ParserOptions;
use crate::repair::repair;
use crate::schema::Schema;

/// Extracts and validates a JSON payload embedded in noisy text against a
/// fixed [`Schema`]. Stateless and shareable across concurrent calls — a
/// `Parser` is a pure function of its `Schema` and its [`ParserOptions`].
#[derive(Debug, Clone)]
pub struct Parser {
    schema: Schema,
    options: ParserOptions,
}

impl Parser {
    /// Build a parser that validates every candidate against `schema`,
    /// using default extraction/repair limits.
    pub fn new(schema: Schema) -> Self {
        Self::with_options(schema, ParserOptions::default())
    }

    /// Build a parser with explicit extraction/repair limits.
    pub fn with_options(schema: Schema, options: ParserOptions) -> Self {
        Self { schema, options }
    }

    /// Extract, repair, decode, and validate candidates from `text` in
    /// order, returning the first that validates.
    ///
    /// Decode failures and schema rejections are not surfaced as distinct
    /// errors — per the contract, they simply advance to the next
    /// candidate. Only exhausting every candidate without a match is an
    /// error.
    pub fn parse(&self, text: &str) -> Result<Value> {
        let candidates = extract_candidates(text, &self.options);
        trace!(count = candidates.len(), "extracted candidates");

        for (idx, candidate) in candidates.iter().enumerate() {
            let repaired = repair(candidate);
            if repaired.trim().is_empty() {
                debug!(idx, "repair produced empty output, skipping candidate");
                continue;
            }

            let decoded: Value = match serde_json::from_str(&repaired) {
                Ok(value) => value,
                Err(err) => {
                    debug!(idx, %err, "strict decode failed, skipping candidate");
                    continue;
                }
            };

            match self.schema.validated(decoded) {
                Some(validated) => {
                    debug!(idx, "candidate validated");
                    return Ok(validated);
                }
                None => {
                    debug!(idx, "schema validation rejected candidate");
                    continue;
                }
            }
        }

        Err(RescueError::NoMatch)
    }
}
