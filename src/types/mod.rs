//! Core types for the decoder.
//!
//! - **Errors**: the two decode failure kinds and their locations
//! - **Config**: decoder and observability configuration

mod config;
mod errors;

pub use config::{
    Config, DecoderConfig, ObservabilityConfig, DEFAULT_ITEM_FIELD, DEFAULT_MAX_DEPTH,
};
pub use errors::{Error, ErrorKind, Path, PathSegment, Result};
