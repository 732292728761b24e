//! Extracts and repairs JSON-like payloads embedded in noisy text — the
//! kind of output a language model produces when it emits prose around a
//! structured answer, drops a quote, forgets a closing bracket, or leaves a
//! key unquoted.
//!
//! The pipeline is: find bracket-balanced candidate substrings, run each
//! through a fixed sequence of textual repairs, decode the result as
//! strict JSON, then validate it (with light coercion) against a
//! caller-supplied [`Schema`]. The first candidate that decodes *and*
//! validates wins.
//!
//! ```
//! use jsonrescue::{Parser, Schema};
//!
//! let schema = Schema::object_with_required(
//!     [("name", Schema::String), ("age", Schema::Number)],
//!     ["name", "age"],
//! );
//! let parser = Parser::new(schema);
//!
//! let text = r#"Sure, here you go: {name: Ada Lovelace, age: 36}"#;
//! let value = parser.parse(text).unwrap();
//! assert_eq!(value["name"], "Ada Lovelace");
//! assert_eq!(value["age"], 36);
//! ```

mod error;
mod extract;
mod options;
mod parser;
mod repair;
mod schema;

pub use error::{RescueError, Result};
pub use options::ParserOptions;
pub use parser::Parser;
pub use schema::Schema;
