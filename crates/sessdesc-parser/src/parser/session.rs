//! Session-level block parser.

use super::lexer::Lexer;
use crate::error::{Block, Error, Result};
use crate::types::{Attribute, Bandwidth, ConnectionInfo, EncryptionKey, Origin, Session};

/// Keys accepted before the first media block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionKey {
    Version,
    Origin,
    Name,
    Info,
    Uri,
    Email,
    Phone,
    Connection,
    Bandwidth,
    TimeZone,
    EncryptionKey,
    Attribute,
}

impl TryFrom<u8> for SessionKey {
    type Error = Error;

    fn try_from(key: u8) -> Result<Self> {
        match key {
            b'v' => Ok(Self::Version),
            b'o' => Ok(Self::Origin),
            b's' => Ok(Self::Name),
            b'i' => Ok(Self::Info),
            b'u' => Ok(Self::Uri),
            b'e' => Ok(Self::Email),
            b'p' => Ok(Self::Phone),
            b'c' => Ok(Self::Connection),
            b'b' => Ok(Self::Bandwidth),
            b'z' => Ok(Self::TimeZone),
            b'k' => Ok(Self::EncryptionKey),
            b'a' => Ok(Self::Attribute),
            _ => Err(Error::unrecognized_key(Block::Session, key)),
        }
    }
}

/// Parses session-level lines up to the first `m=` line.
///
/// The `m=` line is left in the lexer. If the input starts with a media
/// line, every session field keeps its default.
pub(super) fn parse_session(lexer: &mut Lexer<'_>) -> Result<Session> {
    let mut session = Session::default();

    while let Some(key) = lexer.peek_key()? {
        if key == b'm' {
            break;
        }

        let field = SessionKey::try_from(key)?;
        let value = lexer.next_str()?;
        tracing::trace!(key = %char::from(key), "session line");

        match field {
            SessionKey::Version => session.protocol = value.to_string(),
            SessionKey::Origin => session.originator = Origin::parse(value)?,
            SessionKey::Name => session.name = value.to_string(),
            SessionKey::Info => session.info = value.to_string(),
            SessionKey::Uri => session.uri = value.to_string(),
            SessionKey::Email => session.email = value.to_string(),
            SessionKey::Phone => session.phone = value.to_string(),
            SessionKey::Connection => session.connection_info.push(ConnectionInfo::parse(value)?),
            SessionKey::Bandwidth => session.bandwidth_info.push(Bandwidth::new(value)),
            SessionKey::TimeZone => session.time_zone_adjustments.push(value.to_string()),
            SessionKey::EncryptionKey => session.encryption_key = EncryptionKey::new(value),
            SessionKey::Attribute => session.attributes.push(Attribute::new(value)),
        }
    }

    tracing::debug!(
        attributes = session.attributes.len(),
        connections = session.connection_info.len(),
        "parsed session block"
    );

    Ok(session)
}
