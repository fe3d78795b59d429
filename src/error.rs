//! Error types for VIMSON parsing and generation.
//!
//! All failures surface through the single [`Error`] enum. The parser never
//! recovers locally: every error aborts the in-progress `parse` call and no
//! partial value is returned. Generator-side errors likewise abort the write
//! sequence before any corrupt output reaches the sink.
//!
//! ## Error Categories
//!
//! - **Eof**: the input ended where a token was expected
//! - **Syntax**: a structural mismatch (missing delimiter, malformed number)
//! - **UnsupportedEscape**: a backslash escape outside the recognized set
//! - **ProtocolViolation**: mismatched start/end calls on the generator,
//!   a caller defect rather than bad input
//!
//! Parsing errors carry the byte offset at which they were detected.
//!
//! ## Examples
//!
//! ```rust
//! use vimson::{from_str, Error, Value};
//!
//! let result: Result<Value, Error> = from_str("{'a':");
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing
/// VIMSON text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The input ended where a token was expected
    #[error("unexpected end of input at offset {offset}")]
    Eof { offset: usize },

    /// Structural mismatch in the input
    #[error("syntax error at offset {offset}: {msg}")]
    Syntax { offset: usize, msg: String },

    /// A backslash followed by a character outside the recognized escape set
    #[error("unsupported escape `\\{escape}` at offset {offset}")]
    UnsupportedEscape { offset: usize, escape: char },

    /// `write_object` invoked on a generator with no codec installed
    #[error("no object codec configured")]
    UnconfiguredCodec,

    /// Mismatched start/end bracketing calls on the generator
    #[error("{call} called while the innermost open context is {open}")]
    ProtocolViolation {
        call: &'static str,
        open: &'static str,
    },

    /// A value the format cannot carry
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Decoded value has a different shape than the caller expected
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A string or field name containing a character the single-quoted
    /// writer cannot emit
    #[error("string contains unencodable character {ch:?}")]
    InvalidString { ch: char },

    /// Generic message, used by serde's `custom` entry points
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a syntax error at a byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vimson::Error;
    ///
    /// let err = Error::syntax(10, "expected `}`, found `,`");
    /// assert!(err.to_string().contains("offset 10"));
    /// ```
    pub fn syntax(offset: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            offset,
            msg: msg.into(),
        }
    }

    /// Creates an end-of-input error at a byte offset.
    pub fn eof(offset: usize) -> Self {
        Error::Eof { offset }
    }

    /// Creates a syntax error describing an expected character against what
    /// the cursor actually held. A missing character reports as [`Error::Eof`].
    pub fn expected(offset: usize, expected: char, found: Option<char>) -> Self {
        match found {
            Some(found) => Error::syntax(
                offset,
                format!("expected `{}`, found `{}`", expected, found),
            ),
            None => Error::eof(offset),
        }
    }

    /// Creates a type mismatch error for decoding into an incompatible shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vimson::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates an unsupported type error for values VIMSON cannot represent.
    pub fn unsupported_type(msg: impl Into<String>) -> Self {
        Error::UnsupportedType(msg.into())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// Creates an I/O error for sink/source failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
