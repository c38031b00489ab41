//! Tagged value decoding.
//!
//! Each value object is parsed into a map of borrowed [`RawValue`] slices, the single
//! key is resolved to a [`Tag`], and only then is the payload deserialized into the
//! type that tag names. `L` and `M` members go back through [`ValueDecoder::decode`]
//! one by one, so every nested value gets its own tag dispatch.
//!
//! Each level re-scans its raw subtree once more when splitting it into members,
//! so decode cost grows with depth times input size. Nesting is capped by
//! `DecoderConfig::max_depth`, which also keeps the recursion within the stack.

use std::collections::HashMap;

use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::attribute::{AttributeValue, Tag};
use crate::types::{Error, PathSegment, Result};

/// Standard padded alphabet. Non-zero trailing bits in the last symbol are accepted.
const BINARY: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// JSON object with its member values left unparsed.
pub(super) type RawObject<'a> = HashMap<String, &'a RawValue>;

/// Recursive tagged value decoder.
#[derive(Debug, Clone, Copy)]
pub(super) struct ValueDecoder {
    max_depth: usize,
}

impl ValueDecoder {
    pub(super) fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Decode a top-level value from raw bytes.
    pub(super) fn decode_slice(&self, bytes: &[u8]) -> Result<AttributeValue> {
        let object: RawObject<'_> = serde_json::from_slice(bytes)
            .map_err(|e| Error::envelope(format!("malformed JSON: {e}")))?;
        self.decode_object(object, 0)
    }

    /// Decode a value found `depth` levels below the top-level value.
    pub(super) fn decode(&self, raw: &RawValue, depth: usize) -> Result<AttributeValue> {
        if depth > self.max_depth {
            return Err(Error::envelope(format!(
                "nesting depth {depth} exceeds limit of {}",
                self.max_depth
            )));
        }

        let object: RawObject<'_> = serde_json::from_str(raw.get())
            .map_err(|e| Error::envelope(format!("malformed JSON: {e}")))?;
        self.decode_object(object, depth)
    }

    fn decode_object(&self, object: RawObject<'_>, depth: usize) -> Result<AttributeValue> {
        let count = object.len();
        let mut entries = object.into_iter();
        let (key, payload) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(Error::envelope(format!(
                    "wrong key count: expected 1, found {count}"
                )))
            }
        };

        let tag: Tag = key.parse()?;
        tracing::trace!(tag = %tag, depth, "decoding tagged value");

        match tag {
            Tag::B => {
                let encoded: String = payload_as(payload, tag)?;
                decode_base64(&encoded).map(AttributeValue::B)
            }
            Tag::Bool => payload_as(payload, tag).map(AttributeValue::Bool),
            Tag::Bs => {
                let encoded: Vec<String> = payload_as(payload, tag)?;
                encoded
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        decode_base64(entry).map_err(|e| e.within(PathSegment::Index(index)))
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(AttributeValue::Bs)
            }
            Tag::L => {
                let items: Vec<&RawValue> = payload_as(payload, tag)?;
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        self.decode(item, depth + 1)
                            .map_err(|e| e.within(PathSegment::Index(index)))
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(AttributeValue::L)
            }
            Tag::M => {
                let members: RawObject<'_> = payload_as(payload, tag)?;
                members
                    .into_iter()
                    .map(|(key, member)| match self.decode(member, depth + 1) {
                        Ok(value) => Ok((key, value)),
                        Err(e) => Err(e.within(PathSegment::Key(key))),
                    })
                    .collect::<Result<HashMap<_, _>>>()
                    .map(AttributeValue::M)
            }
            // Kept as text so precision and formatting survive untouched.
            Tag::N => payload_as(payload, tag).map(AttributeValue::N),
            Tag::Ns => payload_as(payload, tag).map(AttributeValue::Ns),
            Tag::Null => payload_as(payload, tag).map(AttributeValue::Null),
            Tag::S => payload_as(payload, tag).map(AttributeValue::S),
            Tag::Ss => payload_as(payload, tag).map(AttributeValue::Ss),
        }
    }
}

/// Deserialize the payload under `tag` into its expected JSON type.
fn payload_as<'a, T: Deserialize<'a>>(payload: &'a RawValue, tag: Tag) -> Result<T> {
    serde_json::from_str(payload.get())
        .map_err(|e| Error::value(format!("failed to unmarshal {tag} payload: {e}")))
}

fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    BINARY
        .decode(encoded)
        .map_err(|e| Error::value(format!("base64 decode failed: {e}")))
}
