//! Error types for session description parsing.

use std::fmt;
use std::num::ParseIntError;
use std::str::Utf8Error;

use thiserror::Error;

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The block a line belongs to when its key is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Session-level lines, before the first `m=` line.
    Session,
    /// Lines of a media block, from an `m=` line up to the next one.
    Media,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session => f.write_str("session"),
            Self::Media => f.write_str("media"),
        }
    }
}

/// Errors that can occur while parsing a session description.
///
/// Every error is terminal: the parse stops at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Fewer than two bytes remained where a `<key>=` prefix was expected.
    #[error("Incomplete data: expected a `<key>=` line")]
    IncompleteData,

    /// A line or field is missing a required delimiter or token.
    #[error("Bad syntax: {0}")]
    BadSyntax(&'static str),

    /// The key is not defined for the block it appeared in.
    #[error("Unrecognized {block} key: {key:?}")]
    UnrecognizedKey {
        /// Block the line was found in.
        block: Block,
        /// The offending key.
        key: char,
    },

    /// Network type other than `IN`.
    #[error("Unknown network type: {0}")]
    UnknownNetType(String),

    /// Address type other than `IP4` or `IP6`.
    #[error("Unknown address type: {0}")]
    UnknownAddrType(String),

    /// A TTL or address range is not a base-10 integer.
    #[error("Invalid number: {0}")]
    NumberFormat(#[from] ParseIntError),

    /// A field value is not valid UTF-8.
    #[error("Invalid UTF-8 in field value: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

impl Error {
    /// Creates an unrecognized-key error for the given block.
    #[must_use]
    pub const fn unrecognized_key(block: Block, key: u8) -> Self {
        Self::UnrecognizedKey {
            block,
            key: key as char,
        }
    }
}
