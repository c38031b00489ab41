//! # ddbjson - DynamoDB-JSON decoder
//!
//! Decodes the self-describing tagged-union JSON format used by DynamoDB into
//! typed values:
//! - A single value object such as `{"N": "3.14159"}` becomes an [`AttributeValue`]
//! - An item envelope such as `{"Item": {"name": {"S": "hello"}}}` becomes an [`Item`]
//!
//! ## Architecture
//!
//! ```text
//!   bytes ──→ item decoder ──(each attribute)──→ value decoder ──┐
//!   bytes ─────────────────────────────────────→ value decoder ←─┘ (L / M members)
//! ```
//!
//! Every failure is an [`Error`] of one of two kinds: [`ErrorKind::Envelope`] for
//! input with the wrong shape, [`ErrorKind::Value`] for a payload that does not match
//! its tag. Nothing in the decode path panics on bad input.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod attribute;
pub mod decode;
pub mod types;

// Internal utilities
pub mod observability;

pub use attribute::{AttributeValue, Tag};
pub use decode::{decode_item, decode_value, Decoder, Item};
pub use types::{Config, DecoderConfig, Error, ErrorKind, Result};
