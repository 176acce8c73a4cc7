//! Value tree produced by the COS parser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A dictionary with string keys, as stored in COS objects.
pub type CosDict = BTreeMap<String, CosValue>;

/// A decoded COS value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CosValue {
    /// The `null` keyword.
    Null,
    /// A `true` or `false` keyword.
    Boolean(bool),
    /// An integer number.
    Integer(i64),
    /// A real number.
    Real(f64),
    /// A `/name` token.
    Name(String),
    /// A `(string)` that decoded cleanly as text.
    String(String),
    /// A `(string)` whose bytes did not decode as text.
    RawString(Vec<u8>),
    /// A `<hex>` string.
    HexString(Vec<u8>),
    /// A `[ ... ]` array.
    Array(Vec<CosValue>),
    /// A `<< ... >>` dictionary.
    Dict(CosDict),
    /// A dictionary followed by a `stream ... endstream` payload.
    Stream {
        /// The dictionary preceding the stream keyword.
        dict: CosDict,
        /// Verbatim bytes between `stream` and `endstream`.
        data: Vec<u8>,
    },
    /// An `N G obj ... endobj` definition.
    Indirect {
        /// Object number.
        object_number: i64,
        /// Generation number.
        generation_number: i64,
        /// The wrapped value.
        value: Box<CosValue>,
    },
    /// An `N G R` reference.
    Reference {
        /// Object number.
        object_number: i64,
        /// Generation number.
        generation_number: i64,
    },
}

impl CosValue {
    /// Look up a key if this value is a dictionary.
    pub fn get(&self, key: &str) -> Option<&CosValue> {
        match self {
            Self::Dict(dict) | Self::Stream { dict, .. } => dict.get(key),
            _ => None,
        }
    }

    /// Index into this value if it is an array.
    pub fn at(&self, index: usize) -> Option<&CosValue> {
        match self {
            Self::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Walk a path of keys, trying each step as a dictionary key first and
    /// as an array index second. Returns `None` when any step is missing.
    pub fn traverse(&self, path: &[&str]) -> Option<&CosValue> {
        let mut cur = self;
        for key in path {
            cur = match cur {
                Self::Dict(dict) | Self::Stream { dict, .. } => dict.get(*key)?,
                Self::Array(items) => items.get(key.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(cur)
    }

    /// The text content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric content as a float, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Real(n) => Some(*n),
            _ => None,
        }
    }

    /// The numeric content as an integer, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// A boolean reading of this value; integers read as `!= 0`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Integer(n) => Some(*n != 0),
            _ => None,
        }
    }

    /// The array items, if this is an array.
    pub fn as_array(&self) -> Option<&[CosValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}
