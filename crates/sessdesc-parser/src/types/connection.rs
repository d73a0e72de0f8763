//! Connection information (`c=`) field.

use super::split_token;
use super::{AddrType, NetType};
use crate::error::Result;

/// TTL value meaning "not specified".
const NO_TTL: i64 = -1;

/// Address range value meaning "not specified".
const NO_ADDR_RANGE: i64 = 0;

/// Connection data.
///
/// Format: `<nettype> <addrtype> <connection-address>`, where the address is
/// `<address>[/<ttl>[/<addr-range>]]`.
///
/// A single slash suffix is always the TTL, and an address range is only
/// recognized after a TTL. This differs from RFC 4566, where the TTL is only
/// present for IPv4 multicast and a lone suffix on an IPv6 address is the
/// range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConnectionInfo {
    /// Network type.
    pub net_type: NetType,
    /// Address type.
    pub addr_type: AddrType,
    /// Connection address, without the TTL and range suffixes.
    pub address: String,
    /// Multicast TTL, `-1` when absent.
    pub ttl: i64,
    /// Number of contiguous addresses, `0` when absent.
    pub addr_range: i64,
}

impl Default for ConnectionInfo {
    fn default() -> Self {
        Self {
            net_type: NetType::default(),
            addr_type: AddrType::default(),
            address: String::new(),
            ttl: NO_TTL,
            addr_range: NO_ADDR_RANGE,
        }
    }
}

impl ConnectionInfo {
    /// Parses the value of a `c=` line.
    ///
    /// Anything after a space following the address is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::BadSyntax`] if the type tokens are not followed
    /// by a space, [`crate::Error::UnknownNetType`] /
    /// [`crate::Error::UnknownAddrType`] for unsupported tokens and
    /// [`crate::Error::NumberFormat`] for a malformed TTL or range.
    pub fn parse(value: &str) -> Result<Self> {
        let (net_type, rest) = split_token(value, "connection: missing address type")?;
        let net_type: NetType = net_type.parse()?;
        let (addr_type, rest) = split_token(rest, "connection: missing address")?;
        let addr_type: AddrType = addr_type.parse()?;

        let expr = rest.split_once(' ').map_or(rest, |(expr, _)| expr);
        let (address, ttl, addr_range) = parse_address(expr)?;

        Ok(Self {
            net_type,
            addr_type,
            address: address.to_string(),
            ttl,
            addr_range,
        })
    }

    /// Returns the TTL if one was given.
    #[must_use]
    pub const fn ttl(&self) -> Option<i64> {
        if self.ttl == NO_TTL {
            None
        } else {
            Some(self.ttl)
        }
    }

    /// Returns the address range if one was given.
    #[must_use]
    pub const fn addr_range(&self) -> Option<i64> {
        if self.addr_range == NO_ADDR_RANGE {
            None
        } else {
            Some(self.addr_range)
        }
    }
}

/// Parses `<address>[/<ttl>[/<addr-range>]]`.
///
/// Returns the bare address, the TTL (`-1` if absent) and the range (`0` if
/// absent). With two suffixes the range is converted first.
fn parse_address(expr: &str) -> Result<(&str, i64, i64)> {
    let Some((address, suffix)) = expr.split_once('/') else {
        return Ok((expr, NO_TTL, NO_ADDR_RANGE));
    };

    let (ttl, addr_range) = match suffix.split_once('/') {
        Some((ttl, range)) => {
            let range: i64 = range.parse()?;
            (ttl, range)
        }
        None => (suffix, NO_ADDR_RANGE),
    };

    let ttl: i64 = ttl.parse()?;
    Ok((address, ttl, addr_range))
}
