//! VIMSON parsing and deserialization.
//!
//! This module provides the [`Parser`], a recursive-descent reader that turns
//! VIMSON text into a [`Value`], plus the serde glue that lets any
//! `T: Deserialize` be decoded from the same text.
//!
//! ## Overview
//!
//! - **Two-character lookahead**: the lexer cursor holds the current and the
//!   one-ahead character, which is what disambiguates a doubled `''` escape
//!   from a closing quote followed by new content
//! - **Single-pass parsing**: one `parse` call consumes one complete value
//! - **Offset reporting**: every error carries the byte offset it was
//!   detected at
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use vimson::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Data { x: i32, y: i32 }
//!
//! let data: Data = from_str("{'x':1,'y':2,}").unwrap();
//! assert_eq!(data, Data { x: 1, y: 2 });
//! ```
//!
//! The parser itself yields dynamic values:
//!
//! ```rust
//! use vimson::{Parser, Value};
//!
//! let mut parser = Parser::from_str("['hoge',0xff,]");
//! let value = parser.parse().unwrap();
//! assert_eq!(
//!     value,
//!     Value::List(vec![Value::Str("hoge".into()), Value::Int(255)])
//! );
//! ```

use crate::{Dict, Error, Result, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// The VIMSON parser.
///
/// A recursive-descent reader over a two-character lookahead cursor.
/// Created via [`Parser::from_str`]; one instance consumes one input to
/// completion and is not reusable across inputs.
pub struct Parser<'de> {
    rest: std::str::Chars<'de>,
    /// Byte offset of `cur` within the original input.
    offset: usize,
    cur: Option<char>,
    next: Option<char>,
}

impl<'de> Parser<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        let mut rest = input.chars();
        let cur = rest.next();
        let next = rest.next();
        Parser {
            rest,
            offset: 0,
            cur,
            next,
        }
    }

    /// Parses one complete value from the input.
    ///
    /// Text after the first complete value is left unconsumed. Fails with
    /// [`Error::Eof`] on empty input and on end-of-input mid-structure, and
    /// with [`Error::Syntax`] / [`Error::UnsupportedEscape`] on malformed
    /// text. No partial value is ever returned.
    pub fn parse(&mut self) -> Result<Value> {
        if self.cur.is_none() {
            return Err(Error::eof(self.offset));
        }
        self.skip_blank();
        self.value()
    }

    /// Shifts the cursor one character forward.
    ///
    /// This is the only input-consuming operation; calling it while already
    /// at end of input is an error.
    fn advance(&mut self) -> Result<()> {
        match self.cur {
            None => Err(Error::eof(self.offset)),
            Some(c) => {
                self.offset += c.len_utf8();
                self.cur = self.next;
                self.next = self.rest.next();
                Ok(())
            }
        }
    }

    /// Consumes the expected character or fails with expected-vs-found.
    fn expect(&mut self, expected: char) -> Result<()> {
        if self.cur == Some(expected) {
            self.advance()
        } else {
            Err(Error::expected(self.offset, expected, self.cur))
        }
    }

    /// Skips spaces, tabs, and carriage returns. A newline is skipped only
    /// when immediately followed by a backslash (Vim's line-continuation
    /// marker, which is consumed along with it); a bare newline ends the
    /// skip.
    fn skip_blank(&mut self) {
        while let Some(c) = self.cur {
            match c {
                ' ' | '\t' | '\r' => {
                    let _ = self.advance();
                }
                '\n' if self.next == Some('\\') => {
                    let _ = self.advance();
                    let _ = self.advance();
                }
                _ => return,
            }
        }
    }

    /// `value := dictionary | list | single_quoted | double_quoted | number`
    fn value(&mut self) -> Result<Value> {
        match self.cur {
            None => Err(Error::eof(self.offset)),
            Some('{') => self.dictionary(),
            Some('[') => self.list(),
            Some('\'') => Ok(Value::Str(self.single_quoted()?)),
            Some('"') => Ok(Value::Str(self.double_quoted()?)),
            Some(_) => self.number(),
        }
    }

    /// A dictionary key must be a quoted string; bare words are rejected.
    fn key(&mut self) -> Result<String> {
        match self.cur {
            None => Err(Error::eof(self.offset)),
            Some('\'') => self.single_quoted(),
            Some('"') => self.double_quoted(),
            Some(c) => Err(Error::syntax(
                self.offset,
                format!("expected a quoted key, found `{}`", c),
            )),
        }
    }

    fn dictionary(&mut self) -> Result<Value> {
        self.expect('{')?;

        let mut dict = Dict::new();
        loop {
            self.skip_blank();
            if self.cur == Some('}') {
                break;
            }
            if self.cur.is_none() {
                return Err(Error::eof(self.offset));
            }

            let key = self.key()?;
            self.skip_blank();
            self.expect(':')?;
            self.skip_blank();
            let value = self.value()?;

            // Last write wins for duplicate keys.
            dict.insert(key, value);

            self.skip_blank();
            if self.cur == Some(',') {
                self.advance()?;
            }
        }
        self.expect('}')?;

        Ok(Value::Dict(dict))
    }

    fn list(&mut self) -> Result<Value> {
        self.expect('[')?;

        let mut items = Vec::new();
        loop {
            self.skip_blank();
            if self.cur == Some(']') {
                break;
            }
            if self.cur.is_none() {
                return Err(Error::eof(self.offset));
            }

            items.push(self.value()?);

            self.skip_blank();
            if self.cur == Some(',') {
                self.advance()?;
            }
        }
        self.expect(']')?;

        Ok(Value::List(items))
    }

    /// `'...'` with doubled-quote escaping: `''` inside the literal decodes
    /// to one quote character. Backslashes are ordinary characters here.
    fn single_quoted(&mut self) -> Result<String> {
        self.expect('\'')?;

        let mut buf = String::new();
        loop {
            match self.cur {
                None => return Err(Error::eof(self.offset)),
                Some('\'') if self.next == Some('\'') => {
                    buf.push('\'');
                    self.advance()?;
                    self.advance()?;
                }
                Some('\'') => break,
                Some(c) => {
                    buf.push(c);
                    self.advance()?;
                }
            }
        }
        self.expect('\'')?;

        Ok(buf)
    }

    /// `"..."` with backslash escaping.
    fn double_quoted(&mut self) -> Result<String> {
        self.expect('"')?;

        let mut buf = String::new();
        loop {
            match self.cur {
                None => return Err(Error::eof(self.offset)),
                Some('"') => break,
                Some('\\') => {
                    self.advance()?;
                    self.escape(&mut buf)?;
                }
                Some(c) => {
                    buf.push(c);
                    self.advance()?;
                }
            }
        }
        self.expect('"')?;

        Ok(buf)
    }

    /// Decodes the escape body following a backslash. Recognized: octal
    /// `\N`..`\NNN`, hex `\xN`/`\xNN` (and `\X`), unicode `\uNNNN`/`\UNNNN`,
    /// and the letters `b e f n r t " \`.
    fn escape(&mut self, buf: &mut String) -> Result<()> {
        let offset = self.offset;
        let first = match self.cur {
            None => return Err(Error::eof(offset)),
            Some(c) => c,
        };

        if let Some(digit) = first.to_digit(8) {
            let mut code = digit;
            self.advance()?;
            for _ in 0..2 {
                match self.cur.and_then(|c| c.to_digit(8)) {
                    Some(digit) => {
                        code = code * 8 + digit;
                        self.advance()?;
                    }
                    None => break,
                }
            }
            buf.push(Self::code_point(offset, code)?);
            return Ok(());
        }

        match first {
            'x' | 'X' => {
                self.advance()?;
                let mut code = 0;
                let mut count = 0;
                while count < 2 {
                    match self.cur.and_then(|c| c.to_digit(16)) {
                        Some(digit) => {
                            code = code * 16 + digit;
                            self.advance()?;
                            count += 1;
                        }
                        None => break,
                    }
                }
                if count == 0 {
                    return Err(Error::syntax(offset, "expected hex digits after `\\x`"));
                }
                buf.push(Self::code_point(offset, code)?);
            }
            'u' | 'U' => {
                self.advance()?;
                let mut code = 0;
                for _ in 0..4 {
                    match self.cur.and_then(|c| c.to_digit(16)) {
                        Some(digit) => {
                            code = code * 16 + digit;
                            self.advance()?;
                        }
                        None => {
                            return Err(Error::syntax(
                                offset,
                                "expected 4 hex digits after `\\u`",
                            ))
                        }
                    }
                }
                buf.push(Self::code_point(offset, code)?);
            }
            'b' => {
                self.advance()?;
                buf.push('\u{0008}');
            }
            'e' => {
                self.advance()?;
                buf.push('\u{001B}');
            }
            'f' => {
                self.advance()?;
                buf.push('\u{000C}');
            }
            'n' => {
                self.advance()?;
                buf.push('\n');
            }
            'r' => {
                self.advance()?;
                buf.push('\r');
            }
            't' => {
                self.advance()?;
                buf.push('\t');
            }
            '"' => {
                self.advance()?;
                buf.push('"');
            }
            '\\' => {
                self.advance()?;
                buf.push('\\');
            }
            other => return Err(Error::UnsupportedEscape { offset, escape: other }),
        }
        Ok(())
    }

    fn code_point(offset: usize, code: u32) -> Result<char> {
        char::from_u32(code)
            .ok_or_else(|| Error::syntax(offset, format!("invalid escape code point {:#x}", code)))
    }

    /// Lexes a numeric literal. A leading `0` selects octal unless a digit
    /// outside `0`-`7` reclassifies the run as decimal; `0x`/`0X` selects
    /// hex. A `.` or exponent marker after the integer run re-lexes the
    /// literal as a float, except after a hex prefix, which stays integer.
    fn number(&mut self) -> Result<Value> {
        let start = self.offset;
        let mut buf = String::new();

        if let Some(sign @ ('+' | '-')) = self.cur {
            buf.push(sign);
            self.advance()?;
        }

        let mut radix = 10;
        if self.cur == Some('0') {
            buf.push('0');
            self.advance()?;
            if matches!(self.cur, Some('x') | Some('X')) {
                self.advance()?;
                return self.hex_number(start, buf.starts_with('-'));
            }
            radix = 8;
        }

        while let Some(c) = self.cur {
            if !c.is_ascii_digit() {
                break;
            }
            if radix == 8 && c > '7' {
                radix = 10;
            }
            buf.push(c);
            self.advance()?;
        }

        match self.cur {
            Some('.') => {
                buf.push('.');
                self.advance()?;
                self.fraction(start, buf)
            }
            Some('e') | Some('E') => self.exponent(start, buf),
            _ => {
                if buf.is_empty() || buf == "+" || buf == "-" {
                    return Err(match self.cur {
                        Some(c) => {
                            Error::syntax(start, format!("unexpected character `{}`", c))
                        }
                        None => Error::eof(self.offset),
                    });
                }
                i64::from_str_radix(&buf, radix).map(Value::Int).map_err(|_| {
                    Error::syntax(start, format!("invalid integer literal `{}`", buf))
                })
            }
        }
    }

    fn hex_number(&mut self, start: usize, negative: bool) -> Result<Value> {
        let mut digits = String::new();
        while let Some(c) = self.cur {
            if !c.is_ascii_hexdigit() {
                break;
            }
            digits.push(c);
            self.advance()?;
        }
        if digits.is_empty() {
            return Err(Error::syntax(start, "expected hex digits after `0x`"));
        }
        let magnitude = i64::from_str_radix(&digits, 16).map_err(|_| {
            Error::syntax(start, format!("invalid hex literal `0x{}`", digits))
        })?;
        Ok(Value::Int(if negative { -magnitude } else { magnitude }))
    }

    fn fraction(&mut self, start: usize, mut buf: String) -> Result<Value> {
        while let Some(c) = self.cur {
            if !c.is_ascii_digit() {
                break;
            }
            buf.push(c);
            self.advance()?;
        }
        if matches!(self.cur, Some('e') | Some('E')) {
            return self.exponent(start, buf);
        }
        Self::float(start, &buf)
    }

    fn exponent(&mut self, start: usize, mut buf: String) -> Result<Value> {
        buf.push('e');
        self.advance()?;
        if let Some(sign @ ('+' | '-')) = self.cur {
            buf.push(sign);
            self.advance()?;
        }
        let mut any = false;
        while let Some(c) = self.cur {
            if !c.is_ascii_digit() {
                break;
            }
            buf.push(c);
            self.advance()?;
            any = true;
        }
        if !any {
            return Err(Error::syntax(start, "missing digits in exponent"));
        }
        Self::float(start, &buf)
    }

    fn float(start: usize, buf: &str) -> Result<Value> {
        buf.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| Error::syntax(start, format!("invalid float literal `{}`", buf)))
    }
}

impl<'de> de::Deserializer<'de> for &mut Parser<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = self.parse()?;
        ValueDeserializer::new(value).deserialize_any(visitor)
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = self.parse()?;
        ValueDeserializer::new(value).deserialize_bool(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        // The format has no nil lexeme, so a present value is all there is.
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported_type("unit is not representable in VIMSON"))
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = self.parse()?;
        ValueDeserializer::new(value).deserialize_enum(name, variants, visitor)
    }

    forward_to_deserialize_any! {
        i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf seq tuple tuple_struct map struct identifier
        ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(items: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: items.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(dict: Dict) -> Self {
        MapDeserializer {
            iter: dict.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::Str(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::Str(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            None => Ok(()),
            Some(value) => Err(Error::type_mismatch("unit variant", value.kind())),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::type_mismatch("newtype variant", "nothing")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::List(items)) => visitor.visit_seq(SeqDeserializer::new(items)),
            Some(value) => Err(Error::type_mismatch("tuple variant", value.kind())),
            None => Err(Error::type_mismatch("tuple variant", "nothing")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Dict(dict)) => visitor.visit_map(MapDeserializer::new(dict)),
            Some(value) => Err(Error::type_mismatch("struct variant", value.kind())),
            None => Err(Error::type_mismatch("struct variant", "nothing")),
        }
    }
}

/// Deserializer over an already-parsed [`Value`].
struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Str(s) => visitor.visit_string(s),
            Value::Int(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::List(items) => visitor.visit_seq(SeqDeserializer::new(items)),
            Value::Dict(dict) => visitor.visit_map(MapDeserializer::new(dict)),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        // Booleans ride the wire as the integers 0 and 1.
        match self.value {
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Int(0) => visitor.visit_bool(false),
            Value::Int(1) => visitor.visit_bool(true),
            value => Err(Error::type_mismatch("boolean", value.kind())),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported_type("unit is not representable in VIMSON"))
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Str(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Dict(dict) => {
                let mut iter = dict.into_iter();
                match (iter.next(), iter.next()) {
                    (Some((variant, value)), None) => visitor.visit_enum(EnumDeserializer {
                        variant,
                        value: Some(value),
                    }),
                    _ => Err(Error::type_mismatch(
                        "dictionary with a single variant key",
                        "dictionary",
                    )),
                }
            }
            value => Err(Error::type_mismatch("enum", value.kind())),
        }
    }

    forward_to_deserialize_any! {
        i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf seq tuple tuple_struct map struct identifier
        ignored_any
    }
}
