//! DynamoDB-JSON decoding entry points.
//!
//! [`decode_value`] turns one tagged value object into an [`AttributeValue`];
//! [`decode_item`] unwraps an item envelope and decodes every attribute. Both use
//! the default [`DecoderConfig`]; build a [`Decoder`] to change the wrapper field
//! name or bound the nesting depth.
//!
//! ```
//! use ddbjson::{decode_item, AttributeValue};
//!
//! let item = decode_item(br#"{"Item": {"name": {"S": "hello"}, "age": {"N": "42"}}}"#)?;
//! assert_eq!(item["age"], AttributeValue::N("42".to_string()));
//! # Ok::<(), ddbjson::Error>(())
//! ```

use std::collections::HashMap;

use crate::attribute::AttributeValue;
use crate::types::{DecoderConfig, Result};

mod item;
mod value;

use value::ValueDecoder;

/// Decoded item: attribute name to value.
pub type Item = HashMap<String, AttributeValue>;

/// Configured decoder. Stateless apart from its configuration, so one instance can
/// be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a single tagged value object.
    pub fn decode_value(&self, bytes: &[u8]) -> Result<AttributeValue> {
        ValueDecoder::new(self.config.max_depth).decode_slice(bytes)
    }

    /// Decode an item envelope into its attribute map.
    pub fn decode_item(&self, bytes: &[u8]) -> Result<Item> {
        item::decode_item(bytes, &self.config)
    }
}

/// Decode a single tagged value object with the default configuration.
pub fn decode_value(bytes: &[u8]) -> Result<AttributeValue> {
    Decoder::default().decode_value(bytes)
}

/// Decode an item envelope with the default configuration.
pub fn decode_item(bytes: &[u8]) -> Result<Item> {
    Decoder::default().decode_item(bytes)
}
