//! A strict, one-shot JSON document parser.
//!
//! [`parse`] consumes a full in-memory text and produces an exclusively-owned
//! [`Value`] tree, or a [`ParseError`] carrying an [`ErrorKind`] and the
//! 1-based line/column of the first unconsumed character. There is no I/O,
//! no schema validation, and no serialization back to text.
//!
//! Object member order is preserved, duplicate object keys are rejected, and
//! `\u` escapes combine UTF-16 surrogate pairs into single scalar values.
//!
//! # Examples
//!
//! ```
//! use jsonprism::{parse, ErrorKind, Value};
//!
//! let value = parse(r#"{"name": "jsonprism", "strict": true}"#).unwrap();
//! assert_eq!(value.member("name").and_then(Value::as_str), Some("jsonprism"));
//! assert_eq!(value.member("strict"), Some(&Value::Boolean(true)));
//!
//! let err = parse(r#"{"a": 1,}"#).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::MissKey);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod escape;
mod number;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseError};
pub use parser::parse;
pub use value::{Array, Map, Value};
