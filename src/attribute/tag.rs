//! Wire type tags.
//!
//! Canonical spellings of the ten DynamoDB-JSON type keys.

use std::fmt;
use std::str::FromStr;

use crate::types::Error;

/// Type key of a tagged value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    B,
    Bool,
    Bs,
    L,
    M,
    N,
    Ns,
    Null,
    S,
    Ss,
}

impl Tag {
    /// All tags in wire order.
    pub const ALL: [Tag; 10] = [
        Tag::B,
        Tag::Bool,
        Tag::Bs,
        Tag::L,
        Tag::M,
        Tag::N,
        Tag::Ns,
        Tag::Null,
        Tag::S,
        Tag::Ss,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::B => "B",
            Tag::Bool => "BOOL",
            Tag::Bs => "BS",
            Tag::L => "L",
            Tag::M => "M",
            Tag::N => "N",
            Tag::Ns => "NS",
            Tag::Null => "NULL",
            Tag::S => "S",
            Tag::Ss => "SS",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Tag keys are case-sensitive; anything else is an envelope error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::envelope(format!("unknown tag: {s:?}")))
    }
}
