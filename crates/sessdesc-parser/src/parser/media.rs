//! Media block parser.

use super::lexer::Lexer;
use crate::error::{Block, Error, Result};
use crate::types::{ConnectionInfo, Media};

/// Keys accepted inside a media block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaKey {
    Name,
    Title,
    Connection,
    Bandwidth,
    EncryptionKey,
    Attribute,
}

impl TryFrom<u8> for MediaKey {
    type Error = Error;

    fn try_from(key: u8) -> Result<Self> {
        match key {
            b'm' => Ok(Self::Name),
            b'i' => Ok(Self::Title),
            b'c' => Ok(Self::Connection),
            b'b' => Ok(Self::Bandwidth),
            b'k' => Ok(Self::EncryptionKey),
            b'a' => Ok(Self::Attribute),
            _ => Err(Error::unrecognized_key(Block::Media, key)),
        }
    }
}

/// Parses one media block.
///
/// An `m=` line opens the block while its name is still empty; once the
/// name is set, the next `m=` line is left in the lexer for the following
/// block.
pub(super) fn parse_media(lexer: &mut Lexer<'_>) -> Result<Media> {
    let mut media = Media::default();

    while let Some(key) = lexer.peek_key()? {
        if key == b'm' && !media.name.is_empty() {
            break;
        }

        let field = MediaKey::try_from(key)?;
        let value = lexer.next_str()?;
        tracing::trace!(key = %char::from(key), "media line");

        match field {
            MediaKey::Name => media.name = value.to_string(),
            MediaKey::Title => media.title = value.to_string(),
            MediaKey::Connection => media.connection_info.push(ConnectionInfo::parse(value)?),
            MediaKey::Bandwidth => media.bandwidth_info.push(value.to_string()),
            MediaKey::EncryptionKey => media.encryption_key = value.to_string(),
            MediaKey::Attribute => media.attributes.push(value.to_string()),
        }
    }

    tracing::debug!(
        media = %media.name,
        attributes = media.attributes.len(),
        "parsed media block"
    );

    Ok(media)
}
