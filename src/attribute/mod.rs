//! Attribute values - the decoded form of DynamoDB-JSON.
//!
//! [`AttributeValue`] is a closed sum type over the ten wire tags. Decoded values
//! are plain owned data: they compare structurally, clone deeply and carry no
//! link back to the input buffer.

use std::collections::HashMap;

pub mod tag;

pub use tag::Tag;

/// A single typed DynamoDB attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Binary blob, base64 on the wire.
    B(Vec<u8>),
    Bool(bool),
    /// Binary set. Order is kept as received and duplicates are not removed.
    Bs(Vec<Vec<u8>>),
    L(Vec<AttributeValue>),
    M(HashMap<String, AttributeValue>),
    /// Number in its original textual form.
    N(String),
    /// Number set, each entry in its original textual form.
    Ns(Vec<String>),
    /// Explicit null marker. The flag is conventionally `true`.
    Null(bool),
    S(String),
    Ss(Vec<String>),
}

impl AttributeValue {
    pub fn tag(&self) -> Tag {
        match self {
            AttributeValue::B(_) => Tag::B,
            AttributeValue::Bool(_) => Tag::Bool,
            AttributeValue::Bs(_) => Tag::Bs,
            AttributeValue::L(_) => Tag::L,
            AttributeValue::M(_) => Tag::M,
            AttributeValue::N(_) => Tag::N,
            AttributeValue::Ns(_) => Tag::Ns,
            AttributeValue::Null(_) => Tag::Null,
            AttributeValue::S(_) => Tag::S,
            AttributeValue::Ss(_) => Tag::Ss,
        }
    }

    pub fn as_b(&self) -> Option<&[u8]> {
        match self {
            AttributeValue::B(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_bs(&self) -> Option<&[Vec<u8>]> {
        match self {
            AttributeValue::Bs(blobs) => Some(blobs),
            _ => None,
        }
    }

    pub fn as_l(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::L(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_m(&self) -> Option<&HashMap<String, AttributeValue>> {
        match self {
            AttributeValue::M(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_n(&self) -> Option<&str> {
        match self {
            AttributeValue::N(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_ns(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Ns(ns) => Some(ns),
            _ => None,
        }
    }

    pub fn as_null(&self) -> Option<bool> {
        match self {
            AttributeValue::Null(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ss(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Ss(ss) => Some(ss),
            _ => None,
        }
    }

    /// True only for `NULL: true`.
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null(true))
    }
}
