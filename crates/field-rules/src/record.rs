//! Struct-shaped view over a validation target
//!
//! Targets are inspected through their `serde` serialization: the field
//! names a rule map refers to are the serialized names, so
//! `#[serde(rename = "...")]` applies. A field hidden by
//! `#[serde(skip_serializing_if = "...")]` stays on the record as a zero
//! value. Fields marked `#[serde(skip)]` are invisible and cannot be
//! validated.

use crate::value::FieldValue;
use indexmap::IndexMap;
use serde::ser::{self, Impossible, Serialize};
use std::fmt::Display;

/// Snapshot of a record's fields, keyed by serialized field name
#[derive(Debug, Clone, PartialEq)]
pub struct RecordView {
    fields: IndexMap<String, FieldValue>,
}

/// Why a target could not be viewed as a record
#[derive(Debug, thiserror::Error)]
enum RecordError {
    #[error("value must be a struct, got {0}")]
    NotAStruct(&'static str),

    #[error("record could not be serialized: {0}")]
    Serialize(String),
}

impl ser::Error for RecordError {
    fn custom<M: Display>(msg: M) -> Self {
        RecordError::Serialize(msg.to_string())
    }
}

impl RecordView {
    /// Take a snapshot of `target`.
    ///
    /// # Panics
    ///
    /// Panics if `target` does not serialize as a struct (or a string-keyed
    /// map), or if serializing one of its fields fails. Validating a
    /// primitive or a sequence is a wiring mistake, not bad input.
    pub fn of<T>(target: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match target.serialize(RecordCapture) {
            Ok(fields) => Self { fields },
            Err(err) => panic!("{}", err),
        }
    }

    /// Check if the record has a field with this name
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get a field's serialized value by name
    pub fn get_field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name).map(FieldValue::value)
    }

    /// Get a captured field by name
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Get a field a rule map declared.
    ///
    /// # Panics
    ///
    /// Panics if the field is absent: the rule map was built for another type.
    pub fn field_or_panic(&self, name: &str) -> &FieldValue {
        match self.fields.get(name) {
            Some(field) => field,
            None => panic!("field {:?} is not present on the validated record", name),
        }
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

struct RecordCapture;

#[derive(Default)]
struct Fields {
    fields: IndexMap<String, FieldValue>,
    pending_key: Option<String>,
}

impl Fields {
    fn capture<V: Serialize + ?Sized>(&mut self, name: String, value: &V) -> Result<(), RecordError> {
        let field = FieldValue::of(value)
            .map_err(|err| RecordError::Serialize(format!("field {:?}: {}", name, err)))?;
        self.fields.insert(name, field);
        Ok(())
    }
}

type NotARecord = Impossible<IndexMap<String, FieldValue>, RecordError>;

impl ser::Serializer for RecordCapture {
    type Ok = IndexMap<String, FieldValue>;
    type Error = RecordError;
    type SerializeSeq = NotARecord;
    type SerializeTuple = NotARecord;
    type SerializeTupleStruct = NotARecord;
    type SerializeTupleVariant = NotARecord;
    type SerializeMap = Fields;
    type SerializeStruct = Fields;
    type SerializeStructVariant = NotARecord;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_i128(self, _v: i128) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_u128(self, _v: u128) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("number"))
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("string"))
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("bytes"))
    }

    fn serialize_none(self) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("null"))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Self::Ok, RecordError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("null"))
    }

    // A struct without fields is still a struct
    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, RecordError> {
        Ok(IndexMap::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("enum variant"))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, RecordError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, RecordError> {
        Err(RecordError::NotAStruct("enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<NotARecord, RecordError> {
        Err(RecordError::NotAStruct("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<NotARecord, RecordError> {
        Err(RecordError::NotAStruct("sequence"))
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<NotARecord, RecordError> {
        Err(RecordError::NotAStruct("sequence"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<NotARecord, RecordError> {
        Err(RecordError::NotAStruct("enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Fields, RecordError> {
        Ok(Fields::default())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Fields, RecordError> {
        Ok(Fields::default())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<NotARecord, RecordError> {
        Err(RecordError::NotAStruct("enum variant"))
    }
}

impl ser::SerializeStruct for Fields {
    type Ok = IndexMap<String, FieldValue>;
    type Error = RecordError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), RecordError> {
        self.capture(key.to_string(), value)
    }

    fn skip_field(&mut self, key: &'static str) -> Result<(), RecordError> {
        self.fields.insert(key.to_string(), FieldValue::skipped());
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, RecordError> {
        Ok(self.fields)
    }
}

// Flattened structs and plain maps arrive as maps
impl ser::SerializeMap for Fields {
    type Ok = IndexMap<String, FieldValue>;
    type Error = RecordError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), RecordError> {
        match serde_json::to_value(key) {
            Ok(serde_json::Value::String(name)) => {
                self.pending_key = Some(name);
                Ok(())
            }
            Ok(_) => Err(RecordError::NotAStruct("map with non-string keys")),
            Err(err) => Err(RecordError::Serialize(err.to_string())),
        }
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), RecordError> {
        match self.pending_key.take() {
            Some(name) => self.capture(name, value),
            None => Err(RecordError::Serialize("map value without a key".to_string())),
        }
    }

    fn end(self) -> Result<Self::Ok, RecordError> {
        Ok(self.fields)
    }
}
