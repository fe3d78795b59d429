//! # vimson
//!
//! A Serde-compatible codec for VIMSON, the Vim script literal notation.
//!
//! ## What is VIMSON?
//!
//! VIMSON is a textual format structurally similar to JSON but lexically
//! compatible with Vim script data literals: single-quoted strings with
//! doubled-quote escaping, mandatory trailing commas on write, `1`/`0`
//! booleans, and Vim's decimal/octal/hex number syntax. Text produced by
//! this library can be pasted into a Vim script `let` statement unchanged.
//!
//! ## Key Features
//!
//! - **Serde Compatible**: works with existing Rust types via
//!   `#[derive(Serialize, Deserialize)]`
//! - **Streaming Writer**: the [`Generator`] can be driven call-by-call
//!   when no `Serialize` type exists, with a context stack guarding comma
//!   placement and bracket matching
//! - **Dynamic Values**: the [`Value`] tree and the [`vimson!`] macro cover
//!   data whose shape is only known at runtime
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! vimson = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use vimson::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "{'id':123,'name':'Alice','active':1,}");
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Dynamic Values with the vimson! Macro
//!
//! ```rust
//! use vimson::{vimson, Value};
//!
//! let data = vimson!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["vim", "serde"]
//! });
//!
//! if let Value::Dict(dict) = data {
//!     assert_eq!(dict.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Format Caveats
//!
//! The format has no boolean lexeme: booleans are written as `1`/`0` and
//! come back as integers. It also has no nil, so `Option::None` fails to
//! serialize. Single-quoted output performs no escaping, so strings
//! containing `'` are rejected at write time. See the [`spec`] module for
//! the full format reference.

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod ser;
pub mod spec;
pub mod value;

pub use de::Parser;
pub use error::{Error, Result};
pub use map::Dict;
pub use ser::{Generator, ObjectCodec};
pub use value::Value;

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a VIMSON string.
///
/// # Examples
///
/// ```rust
/// use vimson::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "{'x':1,'y':2,}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (a `None`, a unit, a
/// non-finite float, or a string containing a single quote).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut generator = Generator::new();
    value.serialize(&mut generator)?;
    Ok(generator.into_inner())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for working with VIMSON data dynamically when the structure isn't
/// known at compile time.
///
/// # Examples
///
/// ```rust
/// use vimson::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_dict());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::value_of(value)
}

/// Serialize any `T: Serialize` to a writer in VIMSON format.
///
/// # Examples
///
/// ```rust
/// use vimson::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"{'x':1,'y':2,}");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of VIMSON text.
///
/// # Examples
///
/// ```rust
/// use vimson::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{'x':1,'y':2,}").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid VIMSON or cannot be
/// deserialized to type `T`. Parse errors carry the byte offset they were
/// detected at.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut parser = Parser::from_str(s);
    T::deserialize(&mut parser)
}

/// Deserialize an instance of type `T` from an I/O stream of VIMSON.
///
/// # Examples
///
/// ```rust
/// use vimson::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(b"{'x':1,'y':2,}");
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid VIMSON, or the
/// data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of VIMSON text.
///
/// # Examples
///
/// ```rust
/// use vimson::from_slice;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_slice(b"{'x':1,'y':2,}").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid VIMSON, or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let text = to_string(&point).unwrap();
        assert_eq!(text, "{'x':1,'y':2,}");
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let text = to_string(&user).unwrap();
        assert_eq!(
            text,
            "{'id':123,'name':'Alice','active':1,'tags':['admin','user',],}"
        );
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_to_value() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();

        match value {
            Value::Dict(dict) => {
                assert_eq!(dict.get("x"), Some(&Value::Int(1)));
                assert_eq!(dict.get("y"), Some(&Value::Int(2)));
            }
            _ => panic!("Expected dictionary"),
        }
    }

    #[test]
    fn test_arrays() {
        let numbers = vec![1, 2, 3, 4, 5];
        let text = to_string(&numbers).unwrap();
        assert_eq!(text, "[1,2,3,4,5,]");
        let numbers_back: Vec<i32> = from_str(&text).unwrap();
        assert_eq!(numbers, numbers_back);
    }

    #[test]
    fn test_value_round_trip() {
        let value = vimson!({
            "a": [],
            "b": [[], []],
        });
        let mut generator = Generator::new();
        generator.write_value(&value).unwrap();
        let text = generator.into_inner();
        assert_eq!(text, "{'a':[],'b':[[],[],],}");

        let back: Value = from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_none_is_not_representable() {
        let data: Option<i32> = None;
        assert!(to_string(&data).is_err());
    }
}
