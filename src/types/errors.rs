//! Decoder error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. Every decode
//! failure is one of two kinds: the JSON object has the wrong shape for a tagged
//! value ([`ErrorKind::Envelope`]), or the shape is right but the payload under the
//! tag cannot be converted ([`ErrorKind::Value`]).

use std::fmt;

use thiserror::Error;

/// Decoder result type.
pub type Result<T> = std::result::Result<T, Error>;

/// One step in the location of a failing value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Map key or item attribute name.
    Key(String),
    /// Position in a list or set.
    Index(usize),
}

/// Location of a failing value, outermost segment first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<PathSegment>);

impl Path {
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Error category, stable across message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: wrong shape for a tagged value or item envelope.
    Envelope,
    /// Unexpected content: payload does not convert to its tagged type.
    Value,
}

/// Main error enum for DynamoDB-JSON decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unparseable JSON, not an object, wrong key count, unknown tag, missing
    /// item field, nesting too deep.
    #[error("invalid DynamoDB object at {path}: {message}")]
    Envelope { path: Path, message: String },

    /// Wrong JSON type for the tag, invalid base64, malformed item body.
    #[error("invalid DynamoDB value at {path}: {message}")]
    Value { path: Path, message: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Envelope { .. } => ErrorKind::Envelope,
            Error::Value { .. } => ErrorKind::Value,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Error::Envelope { path, .. } | Error::Value { path, .. } => path,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Envelope { message, .. } | Error::Value { message, .. } => message,
        }
    }

    pub fn is_envelope(&self) -> bool {
        self.kind() == ErrorKind::Envelope
    }

    pub fn is_value(&self) -> bool {
        self.kind() == ErrorKind::Value
    }

    /// Prefix the error location with one enclosing segment.
    ///
    /// Called while unwinding out of nested collections, so the outermost
    /// segment ends up first. The kind is never changed.
    pub(crate) fn within(mut self, segment: PathSegment) -> Self {
        match &mut self {
            Error::Envelope { path, .. } | Error::Value { path, .. } => {
                path.0.insert(0, segment);
            }
        }
        self
    }
}

// Convenience constructors
impl Error {
    pub fn envelope(msg: impl Into<String>) -> Self {
        Self::Envelope {
            path: Path::default(),
            message: msg.into(),
        }
    }

    pub fn value(msg: impl Into<String>) -> Self {
        Self::Value {
            path: Path::default(),
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_display() {
        let err = Error::envelope("wrong key count: 0");
        assert!(err.path().is_root());
        assert_eq!(
            err.to_string(),
            "invalid DynamoDB object at $: wrong key count: 0"
        );
    }

    #[test]
    fn test_within_prefixes_outermost_first() {
        let err = Error::value("expected string")
            .within(PathSegment::Key("k".to_string()))
            .within(PathSegment::Index(2))
            .within(PathSegment::Key("list".to_string()));

        assert_eq!(err.path().to_string(), "$.list[2].k");
        assert_eq!(err.path().segments().len(), 3);
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_within_keeps_kind() {
        let err = Error::envelope("unknown tag: X").within(PathSegment::Index(0));
        assert!(err.is_envelope());
        assert!(!err.is_value());
        assert_eq!(err.message(), "unknown tag: X");
    }
}
