//! Originator (`o=`) field.

use super::split_token;
use super::{AddrType, NetType};
use crate::error::{Error, Result};

/// Session originator and identifier.
///
/// Format: `<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>`
///
/// The session id and version are kept as strings; they are not checked to
/// be numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Origin {
    /// Login of the originating user, `-` when not available.
    pub username: String,
    /// Session identifier.
    pub session_id: String,
    /// Session version.
    pub session_version: String,
    /// Network type.
    pub net_type: NetType,
    /// Address type.
    pub addr_type: AddrType,
    /// Address of the originating machine.
    pub unicast_address: String,
}

impl Origin {
    /// Parses the value of an `o=` line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadSyntax`] if a field is missing or the address is
    /// empty, and [`Error::UnknownNetType`] / [`Error::UnknownAddrType`] for
    /// unsupported type tokens.
    pub fn parse(value: &str) -> Result<Self> {
        let (username, rest) = split_token(value, "origin: missing session id")?;
        let (session_id, rest) = split_token(rest, "origin: missing session version")?;
        let (session_version, rest) = split_token(rest, "origin: missing network type")?;
        let (net_type, rest) = split_token(rest, "origin: missing address type")?;
        let net_type: NetType = net_type.parse()?;
        let (addr_type, unicast_address) = split_token(rest, "origin: missing unicast address")?;
        let addr_type: AddrType = addr_type.parse()?;

        if unicast_address.is_empty() {
            return Err(Error::BadSyntax("origin: empty unicast address"));
        }

        Ok(Self {
            username: username.to_string(),
            session_id: session_id.to_string(),
            session_version: session_version.to_string(),
            net_type,
            addr_type,
            unicast_address: unicast_address.to_string(),
        })
    }
}
