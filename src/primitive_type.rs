//! Classification of JSON values for the `type` keyword and the
//! kind guards every other keyword relies on.

use serde_json::Value;
use std::fmt;

/// The eight value kinds the engine distinguishes.
///
/// Booleans are split into their two literals and integral numbers
/// are a kind of their own, so that `"boolean"` and `"number"` in a
/// `type` argument can expand to the right pair of bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Array,
    False,
    Integer,
    Null,
    Number,
    Object,
    String,
    True,
}

impl JsonKind {
    /// Classify an instance value.
    pub(crate) fn of(instance: &Value) -> JsonKind {
        match instance {
            Value::Null => JsonKind::Null,
            Value::Bool(true) => JsonKind::True,
            Value::Bool(false) => JsonKind::False,
            Value::Number(number) => {
                if number.is_u64()
                    || number.is_i64()
                    || number.as_f64().map_or(false, |value| value.fract() == 0.0)
                {
                    JsonKind::Integer
                } else {
                    JsonKind::Number
                }
            }
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            JsonKind::Array => 1,
            JsonKind::False => 1 << 1,
            JsonKind::Integer => 1 << 2,
            JsonKind::Null => 1 << 3,
            JsonKind::Number => 1 << 4,
            JsonKind::Object => 1 << 5,
            JsonKind::String => 1 << 6,
            JsonKind::True => 1 << 7,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonKind::Array => f.write_str("array"),
            JsonKind::False => f.write_str("false"),
            JsonKind::Integer => f.write_str("integer"),
            JsonKind::Null => f.write_str("null"),
            JsonKind::Number => f.write_str("number"),
            JsonKind::Object => f.write_str("object"),
            JsonKind::String => f.write_str("string"),
            JsonKind::True => f.write_str("true"),
        }
    }
}

/// Compact set of [`JsonKind`] bits, the payload of a compiled
/// `type` keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct KindSet(u8);

impl KindSet {
    pub(crate) const fn empty() -> KindSet {
        KindSet(0)
    }

    pub(crate) const fn contains(self, kind: JsonKind) -> bool {
        self.0 & kind.bit() != 0
    }

    const fn with(self, kind: JsonKind) -> KindSet {
        KindSet(self.0 | kind.bit())
    }

    /// Add the kinds named by a `type` argument entry. Returns
    /// `false` for names outside the vocabulary.
    pub(crate) fn insert_name(&mut self, name: &str) -> bool {
        *self = match name {
            "array" => self.with(JsonKind::Array),
            // "number" admits integral values, "boolean" both literals
            "boolean" => self.with(JsonKind::True).with(JsonKind::False),
            "integer" => self.with(JsonKind::Integer),
            "null" => self.with(JsonKind::Null),
            "number" => self.with(JsonKind::Number).with(JsonKind::Integer),
            "object" => self.with(JsonKind::Object),
            "string" => self.with(JsonKind::String),
            _ => return false,
        };
        true
    }
}
