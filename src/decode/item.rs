//! Item envelope decoding.
//!
//! An item envelope is a JSON object whose wrapper field (`"Item"` unless configured
//! otherwise) holds the attribute map. Fields other than the wrapper are ignored.

use super::value::{RawObject, ValueDecoder};
use super::Item;
use crate::types::{DecoderConfig, Error, PathSegment, Result};

pub(super) fn decode_item(bytes: &[u8], config: &DecoderConfig) -> Result<Item> {
    let result = decode_envelope(bytes, config);
    match &result {
        Ok(item) => tracing::debug!(attributes = item.len(), "decoded item"),
        Err(err) => tracing::debug!(
            kind = ?err.kind(),
            path = %err.path(),
            "rejected item: {}",
            err.message()
        ),
    }
    result
}

fn decode_envelope(bytes: &[u8], config: &DecoderConfig) -> Result<Item> {
    let mut envelope: RawObject<'_> = serde_json::from_slice(bytes)
        .map_err(|e| Error::envelope(format!("malformed item envelope: {e}")))?;

    let body = envelope.remove(&config.item_field).ok_or_else(|| {
        Error::envelope(format!("missing {:?} field", config.item_field))
    })?;

    let attributes: RawObject<'_> = serde_json::from_str(body.get())
        .map_err(|e| Error::value(format!("malformed item body: {e}")))?;

    let decoder = ValueDecoder::new(config.max_depth);
    attributes
        .into_iter()
        .map(|(name, raw)| match decoder.decode(raw, 0) {
            Ok(value) => Ok((name, value)),
            Err(e) => Err(e.within(PathSegment::Key(name))),
        })
        .collect()
}
