//! Zero-value detection and captured field values
//!
//! Zero-ness is decided from the shape a value reports to `serde` while it
//! serializes, not from the JSON it turns into. `Some(0)` reports an `Option`
//! holding a value and is therefore not zero, even though both `Some(0)` and
//! `0` become the same JSON number.

use serde::ser::{self, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Check if a value equals the default of its type.
///
/// | Shape                           | Zero when                      |
/// |---------------------------------|--------------------------------|
/// | `bool`, integers, floats, `char`| `false`, `0`, `0.0`, `'\0'`    |
/// | strings, byte strings           | empty                          |
/// | `Option`                        | `None`                         |
/// | `Vec`, sets, maps               | no elements                    |
/// | tuples, fixed arrays, structs   | every member is zero           |
/// | `()`, unit structs              | always                         |
/// | enum variants                   | never                          |
///
/// `NaN` is never zero. Enum variants never are either, since an enum has no
/// shape-level default. Fields hidden with `#[serde(skip_serializing_if)]`
/// count as zero.
pub fn is_zero<V>(value: &V) -> bool
where
    V: Serialize + ?Sized,
{
    value.serialize(ZeroProbe).unwrap_or(false)
}

/// A field value captured from a record: its serialized form plus whether
/// the original value was its type's zero value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    value: Value,
    zero: bool,
}

impl FieldValue {
    /// Capture a value
    pub fn of<V>(value: &V) -> Result<Self, serde_json::Error>
    where
        V: Serialize + ?Sized,
    {
        Ok(Self {
            value: serde_json::to_value(value)?,
            zero: is_zero(value),
        })
    }

    /// A field the record declares but left out of its serialization
    pub fn skipped() -> Self {
        Self {
            value: Value::Null,
            zero: true,
        }
    }

    /// The serialized value handed to validators
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.zero
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        let zero = is_zero(&value);
        Self { value, zero }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct ProbeError(String);

impl ser::Error for ProbeError {
    fn custom<M: Display>(msg: M) -> Self {
        ProbeError(msg.to_string())
    }
}

struct ZeroProbe;

/// Folds the members of a compound value.
///
/// With `fold` set every member must be zero; otherwise any member at all
/// makes the value non-zero.
struct Members {
    zero: bool,
    fold: bool,
}

impl Members {
    fn all_zero() -> Self {
        Self {
            zero: true,
            fold: true,
        }
    }

    fn empty() -> Self {
        Self {
            zero: true,
            fold: false,
        }
    }

    fn never() -> Self {
        Self {
            zero: false,
            fold: true,
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, member: &T) -> Result<(), ProbeError> {
        if self.fold {
            self.zero = self.zero && member.serialize(ZeroProbe)?;
        } else {
            self.zero = false;
        }
        Ok(())
    }
}

impl ser::Serializer for ZeroProbe {
    type Ok = bool;
    type Error = ProbeError;
    type SerializeSeq = Members;
    type SerializeTuple = Members;
    type SerializeTupleStruct = Members;
    type SerializeTupleVariant = Members;
    type SerializeMap = Members;
    type SerializeStruct = Members;
    type SerializeStructVariant = Members;

    fn serialize_bool(self, v: bool) -> Result<bool, ProbeError> {
        Ok(!v)
    }

    fn serialize_i8(self, v: i8) -> Result<bool, ProbeError> {
        Ok(v == 0)
    }

    fn serialize_i16(self, v: i16) -> Result<bool, ProbeError> {
        Ok(v == 0)
    }

    fn serialize_i32(self, v: i32) -> Result<bool, ProbeError> {
        Ok(v == 0)
    }

    fn serialize_i64(self, v: i64) -> Result<bool, ProbeError> {
        Ok(v == 0)
    }

    fn serialize_i128(self, v: i128) -> Result<bool, ProbeError> {
        Ok(v == 0)
    }

    fn serialize_u8(self, v: u8) -> Result<bool, ProbeError> {
        Ok(v == 0)
    }

    fn serialize_u16(self, v: u16) -> Result<bool, ProbeError> {
        Ok(v == 0)
    }

    fn serialize_u32(self, v: u32) -> Result<bool, ProbeError> {
        Ok(v == 0)
    }

    fn serialize_u64(self, v: u64) -> Result<bool, ProbeError> {
        Ok(v == 0)
    }

    fn serialize_u128(self, v: u128) -> Result<bool, ProbeError> {
        Ok(v == 0)
    }

    // NaN compares unequal to zero, so it is a value
    fn serialize_f32(self, v: f32) -> Result<bool, ProbeError> {
        Ok(v == 0.0)
    }

    fn serialize_f64(self, v: f64) -> Result<bool, ProbeError> {
        Ok(v == 0.0)
    }

    fn serialize_char(self, v: char) -> Result<bool, ProbeError> {
        Ok(v == '\0')
    }

    fn serialize_str(self, v: &str) -> Result<bool, ProbeError> {
        Ok(v.is_empty())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<bool, ProbeError> {
        Ok(v.is_empty())
    }

    fn serialize_none(self) -> Result<bool, ProbeError> {
        Ok(true)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, _value: &T) -> Result<bool, ProbeError> {
        Ok(false)
    }

    fn serialize_unit(self) -> Result<bool, ProbeError> {
        Ok(true)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<bool, ProbeError> {
        Ok(true)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<bool, ProbeError> {
        Ok(false)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<bool, ProbeError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<bool, ProbeError> {
        Ok(false)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Members, ProbeError> {
        Ok(Members::empty())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Members, ProbeError> {
        Ok(Members::all_zero())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Members, ProbeError> {
        Ok(Members::all_zero())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Members, ProbeError> {
        Ok(Members::never())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Members, ProbeError> {
        Ok(Members::empty())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Members, ProbeError> {
        Ok(Members::all_zero())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Members, ProbeError> {
        Ok(Members::never())
    }
}

impl ser::SerializeSeq for Members {
    type Ok = bool;
    type Error = ProbeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ProbeError> {
        self.push(value)
    }

    fn end(self) -> Result<bool, ProbeError> {
        Ok(self.zero)
    }
}

impl ser::SerializeTuple for Members {
    type Ok = bool;
    type Error = ProbeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ProbeError> {
        self.push(value)
    }

    fn end(self) -> Result<bool, ProbeError> {
        Ok(self.zero)
    }
}

impl ser::SerializeTupleStruct for Members {
    type Ok = bool;
    type Error = ProbeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ProbeError> {
        self.push(value)
    }

    fn end(self) -> Result<bool, ProbeError> {
        Ok(self.zero)
    }
}

impl ser::SerializeTupleVariant for Members {
    type Ok = bool;
    type Error = ProbeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ProbeError> {
        self.push(value)
    }

    fn end(self) -> Result<bool, ProbeError> {
        Ok(self.zero)
    }
}

impl ser::SerializeMap for Members {
    type Ok = bool;
    type Error = ProbeError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), ProbeError> {
        self.push(key)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ProbeError> {
        self.push(value)
    }

    fn end(self) -> Result<bool, ProbeError> {
        Ok(self.zero)
    }
}

impl ser::SerializeStruct for Members {
    type Ok = bool;
    type Error = ProbeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<(), ProbeError> {
        self.push(value)
    }

    fn end(self) -> Result<bool, ProbeError> {
        Ok(self.zero)
    }
}

impl ser::SerializeStructVariant for Members {
    type Ok = bool;
    type Error = ProbeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<(), ProbeError> {
        self.push(value)
    }

    fn end(self) -> Result<bool, ProbeError> {
        Ok(self.zero)
    }
}
