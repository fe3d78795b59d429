//! VIMSON generation and serialization.
//!
//! This module provides the [`Generator`], a streaming writer driven by
//! `write_*` calls that mirror a value tree depth-first, plus the serde glue
//! that lets any `T: Serialize` be encoded to the same text.
//!
//! ## Overview
//!
//! - **Context stack**: the generator records every open list/dictionary
//!   scope; that record alone decides comma placement
//! - **Mandatory trailing commas**: every value written inside an open scope
//!   is comma-terminated, including the last one
//! - **Check before emit**: a mismatched `write_end_*` call fails without
//!   writing anything, so the sink never holds corrupt text
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use vimson::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let text = to_string(&Data { x: 1, y: 2 }).unwrap();
//! assert_eq!(text, "{'x':1,'y':2,}");
//! ```
//!
//! ## Direct Generator Usage
//!
//! The generator can be driven by hand when no `Serialize` type exists:
//!
//! ```rust
//! use vimson::Generator;
//!
//! let mut generator = Generator::new();
//! generator.write_start_dict().unwrap();
//! generator.write_str_field("text", "hello").unwrap();
//! generator.write_end_dict().unwrap();
//!
//! assert_eq!(generator.as_str(), "{'text':'hello',}");
//! ```

use crate::{Error, Result, Value};
use serde::{ser, Serialize};
use std::any::Any;

/// Caller-supplied hook that writes one arbitrary host value.
///
/// The hook must issue `write_*` calls forming exactly one complete value:
/// no partial value, and no more than one top-level value. A generator holds
/// at most one hook; installing another replaces it.
pub trait ObjectCodec {
    fn write_object(&self, generator: &mut Generator, value: &dyn Any) -> Result<()>;
}

/// One open scope on the generator's context stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    List,
    Dict,
}

impl Context {
    const fn name(self) -> &'static str {
        match self {
            Context::List => "list",
            Context::Dict => "dictionary",
        }
    }
}

/// The VIMSON generator.
///
/// A streaming writer over an in-memory sink. The caller issues `write_*`
/// calls mirroring the value tree depth-first; the context stack decides
/// where separating commas go. One instance produces one output and is not
/// meant to be shared across call sequences.
pub struct Generator {
    out: String,
    stack: Vec<Context>,
    codec: Option<Box<dyn ObjectCodec>>,
}

impl Generator {
    #[must_use]
    pub fn new() -> Self {
        Generator {
            out: String::with_capacity(256),
            stack: Vec::new(),
            codec: None,
        }
    }

    /// Creates a generator with an object codec installed.
    #[must_use]
    pub fn with_codec(codec: Box<dyn ObjectCodec>) -> Self {
        Generator {
            out: String::with_capacity(256),
            stack: Vec::new(),
            codec: Some(codec),
        }
    }

    /// Installs an object codec, replacing any previous one.
    pub fn set_codec(&mut self, codec: Box<dyn ObjectCodec>) {
        self.codec = Some(codec);
    }

    /// The text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the generator and returns its output.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    /// Comma automaton: a value completed inside an open scope is
    /// comma-terminated; a top-level value is not.
    fn terminate(&mut self) {
        if !self.stack.is_empty() {
            self.out.push(',');
        }
    }

    /// Emits `'s'`. The single-quoted form has no backslash escaping, so a
    /// payload containing a quote character cannot be written validly and
    /// fails instead of corrupting the output.
    fn quoted(&mut self, s: &str) -> Result<()> {
        if s.contains('\'') {
            return Err(Error::InvalidString { ch: '\'' });
        }
        self.out.push('\'');
        self.out.push_str(s);
        self.out.push('\'');
        Ok(())
    }

    pub fn write_str(&mut self, v: &str) -> Result<()> {
        self.quoted(v)?;
        self.terminate();
        Ok(())
    }

    /// Booleans ride the wire as the digits `1` and `0`.
    pub fn write_bool(&mut self, v: bool) -> Result<()> {
        self.out.push(if v { '1' } else { '0' });
        self.terminate();
        Ok(())
    }

    pub fn write_i8(&mut self, v: i8) -> Result<()> {
        self.write_i64(v as i64)
    }

    pub fn write_i16(&mut self, v: i16) -> Result<()> {
        self.write_i64(v as i64)
    }

    pub fn write_i32(&mut self, v: i32) -> Result<()> {
        self.write_i64(v as i64)
    }

    pub fn write_i64(&mut self, v: i64) -> Result<()> {
        self.out.push_str(&v.to_string());
        self.terminate();
        Ok(())
    }

    pub fn write_u8(&mut self, v: u8) -> Result<()> {
        self.write_i64(v as i64)
    }

    pub fn write_u16(&mut self, v: u16) -> Result<()> {
        self.write_i64(v as i64)
    }

    pub fn write_u32(&mut self, v: u32) -> Result<()> {
        self.write_i64(v as i64)
    }

    /// Writes pre-encoded text as one value token. The text goes to the sink
    /// verbatim and is comma-terminated like any other value; the caller is
    /// responsible for it being well-formed.
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.out.push_str(text);
        self.terminate();
        Ok(())
    }

    pub fn write_f32(&mut self, v: f32) -> Result<()> {
        self.write_f64(v as f64)
    }

    /// Whole floats are written with a `.0` suffix so they re-parse as
    /// floats rather than integers. Non-finite floats have no textual form
    /// and fail.
    pub fn write_f64(&mut self, v: f64) -> Result<()> {
        if !v.is_finite() {
            return Err(Error::unsupported_type(
                "non-finite floats are not representable in VIMSON",
            ));
        }
        if v.fract() == 0.0 {
            self.out.push_str(&format!("{:.1}", v));
        } else {
            self.out.push_str(&v.to_string());
        }
        self.terminate();
        Ok(())
    }

    /// Emits `'name':`. Subject to the same quote restriction as
    /// [`write_str`](Generator::write_str).
    pub fn write_field_name(&mut self, name: &str) -> Result<()> {
        self.quoted(name)?;
        self.out.push(':');
        Ok(())
    }

    pub fn write_start_dict(&mut self) -> Result<()> {
        self.stack.push(Context::Dict);
        self.out.push('{');
        Ok(())
    }

    pub fn write_end_dict(&mut self) -> Result<()> {
        self.close("write_end_dict", Context::Dict, '}')
    }

    pub fn write_start_list(&mut self) -> Result<()> {
        self.stack.push(Context::List);
        self.out.push('[');
        Ok(())
    }

    pub fn write_end_list(&mut self) -> Result<()> {
        self.close("write_end_list", Context::List, ']')
    }

    /// Pops the innermost scope, verifying its kind before anything is
    /// emitted. A mismatch is a caller defect and leaves both the stack and
    /// the output untouched.
    fn close(&mut self, call: &'static str, expected: Context, delim: char) -> Result<()> {
        match self.stack.last() {
            Some(&open) if open == expected => {
                self.stack.pop();
                self.out.push(delim);
                self.terminate();
                Ok(())
            }
            Some(&open) => Err(Error::ProtocolViolation {
                call,
                open: open.name(),
            }),
            None => Err(Error::ProtocolViolation { call, open: "nothing" }),
        }
    }

    /// Writes an arbitrary host value through the installed codec.
    ///
    /// Fails with [`Error::UnconfiguredCodec`] when no codec is installed.
    pub fn write_object(&mut self, value: &dyn Any) -> Result<()> {
        let codec = self.codec.take().ok_or(Error::UnconfiguredCodec)?;
        let result = codec.write_object(self, value);
        self.codec = Some(codec);
        result
    }

    // Compound calls, pure sugar over the primitives.

    pub fn write_str_field(&mut self, name: &str, v: &str) -> Result<()> {
        self.write_field_name(name)?;
        self.write_str(v)
    }

    pub fn write_bool_field(&mut self, name: &str, v: bool) -> Result<()> {
        self.write_field_name(name)?;
        self.write_bool(v)
    }

    pub fn write_i64_field(&mut self, name: &str, v: i64) -> Result<()> {
        self.write_field_name(name)?;
        self.write_i64(v)
    }

    pub fn write_f64_field(&mut self, name: &str, v: f64) -> Result<()> {
        self.write_field_name(name)?;
        self.write_f64(v)
    }

    pub fn write_object_field(&mut self, name: &str, v: &dyn Any) -> Result<()> {
        self.write_field_name(name)?;
        self.write_object(v)
    }

    pub fn write_dict_field_start(&mut self, name: &str) -> Result<()> {
        self.write_field_name(name)?;
        self.write_start_dict()
    }

    pub fn write_list_field_start(&mut self, name: &str) -> Result<()> {
        self.write_field_name(name)?;
        self.write_start_list()
    }

    /// Writes a whole [`Value`] tree depth-first.
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Str(s) => self.write_str(s),
            Value::Int(i) => self.write_i64(*i),
            Value::Float(f) => self.write_f64(*f),
            Value::Bool(b) => self.write_bool(*b),
            Value::List(items) => {
                self.write_start_list()?;
                for item in items {
                    self.write_value(item)?;
                }
                self.write_end_list()
            }
            Value::Dict(dict) => {
                self.write_start_dict()?;
                for (key, item) in dict.iter() {
                    self.write_field_name(key)?;
                    self.write_value(item)?;
                }
                self.write_end_dict()
            }
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new()
    }
}

impl<'a> ser::Serializer for &'a mut Generator {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Compound<'a>;
    type SerializeTuple = Compound<'a>;
    type SerializeTupleStruct = Compound<'a>;
    type SerializeTupleVariant = VariantCompound<'a>;
    type SerializeMap = Compound<'a>;
    type SerializeStruct = Compound<'a>;
    type SerializeStructVariant = VariantCompound<'a>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.write_bool(v)
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.write_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.write_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.write_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.write_i64(v)
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.write_i64(v as i64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.write_i64(v as i64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.write_i64(v as i64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        if v <= i64::MAX as u64 {
            self.write_i64(v as i64)
        } else {
            Err(Error::custom(format!("integer {} out of range", v)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.write_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        self.write_f64(v)
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.write_str(&v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        self.write_str(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        use ser::SerializeSeq;
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for byte in v {
            seq.serialize_element(byte)?;
        }
        seq.end()
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Err(Error::unsupported_type(
            "Option::None is not representable in VIMSON",
        ))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::unsupported_type("unit is not representable in VIMSON"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.write_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        self.write_start_dict()?;
        self.write_field_name(variant)?;
        value.serialize(&mut *self)?;
        self.write_end_dict()
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.write_start_list()?;
        Ok(Compound { gen: self })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.write_start_dict()?;
        self.write_field_name(variant)?;
        self.write_start_list()?;
        Ok(VariantCompound { gen: self })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.write_start_dict()?;
        Ok(Compound { gen: self })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.write_start_dict()?;
        Ok(Compound { gen: self })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.write_start_dict()?;
        self.write_field_name(variant)?;
        self.write_start_dict()?;
        Ok(VariantCompound { gen: self })
    }
}

pub struct Compound<'a> {
    gen: &'a mut Generator,
}

impl ser::SerializeSeq for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.gen)
    }

    fn end(self) -> Result<Self::Ok> {
        self.gen.write_end_list()
    }
}

impl ser::SerializeTuple for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.gen)
    }

    fn end(self) -> Result<Self::Ok> {
        self.gen.write_end_list()
    }
}

impl ser::SerializeTupleStruct for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.gen)
    }

    fn end(self) -> Result<Self::Ok> {
        self.gen.write_end_list()
    }
}

impl ser::SerializeMap for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match value_of(key)? {
            Value::Str(s) => self.gen.write_field_name(&s),
            other => Err(Error::type_mismatch("string key", other.kind())),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.gen)
    }

    fn end(self) -> Result<Self::Ok> {
        self.gen.write_end_dict()
    }
}

impl ser::SerializeStruct for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.gen.write_field_name(key)?;
        value.serialize(&mut *self.gen)
    }

    fn end(self) -> Result<Self::Ok> {
        self.gen.write_end_dict()
    }
}

/// Compound serializer for enum variants, which carry one extra enclosing
/// dictionary keyed by the variant name.
pub struct VariantCompound<'a> {
    gen: &'a mut Generator,
}

impl ser::SerializeTupleVariant for VariantCompound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.gen)
    }

    fn end(self) -> Result<Self::Ok> {
        self.gen.write_end_list()?;
        self.gen.write_end_dict()
    }
}

impl ser::SerializeStructVariant for VariantCompound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.gen.write_field_name(key)?;
        value.serialize(&mut *self.gen)
    }

    fn end(self) -> Result<Self::Ok> {
        self.gen.write_end_dict()?;
        self.gen.write_end_dict()
    }
}

/// Serializer producing a [`Value`] instead of text; backs `to_value`.
pub(crate) struct ValueSerializer;

pub(crate) struct SerializeVec {
    vec: Vec<Value>,
}

pub(crate) struct SerializeTaggedVec {
    variant: &'static str,
    vec: Vec<Value>,
}

pub(crate) struct SerializeDict {
    dict: crate::Dict,
    current_key: Option<String>,
}

pub(crate) struct SerializeTaggedDict {
    variant: &'static str,
    dict: crate::Dict,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTaggedVec;
    type SerializeMap = SerializeDict;
    type SerializeStruct = SerializeDict;
    type SerializeStructVariant = SerializeTaggedDict;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Int(v as i64))
        } else {
            Err(Error::custom(format!("integer {} out of range", v)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::List(
            v.iter().map(|&b| Value::Int(b as i64)).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        Err(Error::unsupported_type(
            "Option::None is not representable in VIMSON",
        ))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Err(Error::unsupported_type("unit is not representable in VIMSON"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Str(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut dict = crate::Dict::with_capacity(1);
        dict.insert(variant.to_string(), value.serialize(ValueSerializer)?);
        Ok(Value::Dict(dict))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTaggedVec> {
        Ok(SerializeTaggedVec {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeDict> {
        Ok(SerializeDict {
            dict: crate::Dict::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeDict> {
        Ok(SerializeDict {
            dict: crate::Dict::new(),
            current_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTaggedDict> {
        Ok(SerializeTaggedDict {
            variant,
            dict: crate::Dict::new(),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value_of(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value_of(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value_of(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTaggedVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value_of(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut dict = crate::Dict::with_capacity(1);
        dict.insert(self.variant.to_string(), Value::List(self.vec));
        Ok(Value::Dict(dict))
    }
}

impl ser::SerializeMap for SerializeDict {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match value_of(key)? {
            Value::Str(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::type_mismatch("string key", other.kind())),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.dict.insert(key, value_of(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Dict(self.dict))
    }
}

impl ser::SerializeStruct for SerializeDict {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.dict.insert(key.to_string(), value_of(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Dict(self.dict))
    }
}

impl ser::SerializeStructVariant for SerializeTaggedDict {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.dict.insert(key.to_string(), value_of(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = crate::Dict::with_capacity(1);
        outer.insert(self.variant.to_string(), Value::Dict(self.dict));
        Ok(Value::Dict(outer))
    }
}

pub(crate) fn value_of<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
