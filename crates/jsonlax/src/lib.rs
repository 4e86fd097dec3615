//! A recursive-descent JSON parser over complete documents, with two opt-in
//! extensions to the standard grammar: C-style comments (`//` and `/* */`)
//! and a single trailing comma in non-empty arrays and objects.
//!
//! The parser is all-or-nothing: it decodes exactly one JSON value from the
//! input text and fails on the first malformed construct, returning a
//! [`SyntaxError`] with the character offset where the problem was detected.
//!
//! # Examples
//!
//! ```rust
//! use jsonlax::{ParseOptions, Value, parse, parse_with_options};
//!
//! let v = parse(r#"{"a": [1, true, null]}"#).unwrap();
//! assert!(v.is_object());
//!
//! // Extensions are off by default:
//! assert!(parse("[1, 2,]").is_err());
//!
//! let options = ParseOptions {
//!     allow_trailing_commas: true,
//!     ..Default::default()
//! };
//! let v = parse_with_options("[1, 2,]", options).unwrap();
//! assert_eq!(v, Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::SyntaxError;
pub use options::ParseOptions;
pub use parser::{parse, parse_with_options};
pub use value::{Array, Map, Value};
