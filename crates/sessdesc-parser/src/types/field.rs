//! Session-level fields stored as their raw values.

use std::fmt;

use super::split_colon;

/// Session attribute (`a=`).
///
/// Either a property attribute (`recvonly`) or a value attribute
/// (`rtpmap:99 h263-1998/90000`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Attribute {
    raw: String,
}

impl Attribute {
    /// Creates an attribute from the raw line value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the raw value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the attribute name, the part before the first `:`.
    #[must_use]
    pub fn name(&self) -> &str {
        split_colon(&self.raw).0
    }

    /// Returns the attribute value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        split_colon(&self.raw).1
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Bandwidth information (`b=`), `<bwtype>:<bandwidth>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Bandwidth {
    raw: String,
}

impl Bandwidth {
    /// Creates a bandwidth field from the raw line value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the raw value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the bandwidth modifier (`CT`, `AS`, ...).
    #[must_use]
    pub fn bw_type(&self) -> &str {
        split_colon(&self.raw).0
    }

    /// Returns the bandwidth value as written, without checking it is numeric.
    #[must_use]
    pub fn bandwidth(&self) -> Option<&str> {
        split_colon(&self.raw).1
    }
}

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Encryption key (`k=`), `<method>[:<encryption key>]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct EncryptionKey {
    raw: String,
}

impl EncryptionKey {
    /// Creates an encryption key field from the raw line value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the raw value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if no `k=` line was seen (or it was empty).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the key method (`clear`, `base64`, `uri`, `prompt`).
    #[must_use]
    pub fn method(&self) -> &str {
        split_colon(&self.raw).0
    }

    /// Returns the key material, absent for `prompt`.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        split_colon(&self.raw).1
    }
}

impl fmt::Display for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
