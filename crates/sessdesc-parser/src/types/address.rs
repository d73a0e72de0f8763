//! Network and address type tokens shared by `o=` and `c=` lines.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Network type.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NetType {
    /// Internet (`IN`).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "IN"))]
    In,
}

impl NetType {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "IN",
        }
    }
}

impl FromStr for NetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN" => Ok(Self::In),
            _ => Err(Error::UnknownNetType(s.to_string())),
        }
    }
}

impl fmt::Display for NetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AddrType {
    /// IPv4 (`IP4`).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "IP4"))]
    Ip4,
    /// IPv6 (`IP6`).
    #[cfg_attr(feature = "serde", serde(rename = "IP6"))]
    Ip6,
}

impl AddrType {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ip4 => "IP4",
            Self::Ip6 => "IP6",
        }
    }
}

impl FromStr for AddrType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IP4" => Ok(Self::Ip4),
            "IP6" => Ok(Self::Ip6),
            _ => Err(Error::UnknownAddrType(s.to_string())),
        }
    }
}

impl fmt::Display for AddrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
