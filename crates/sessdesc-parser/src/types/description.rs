//! Session and media records.

use super::{Attribute, Bandwidth, ConnectionInfo, EncryptionKey, Origin};

/// A parsed session description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Description {
    /// Session-level fields.
    pub session: Session,
    /// Media blocks, in input order.
    pub media: Vec<Media>,
}

/// Session-level section, everything before the first `m=` line.
///
/// Fields that were not present keep their default (empty) value. A
/// repeated single-valued line overwrites the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Session {
    /// Protocol version (`v=`).
    pub protocol: String,
    /// Originator (`o=`).
    pub originator: Origin,
    /// Session name (`s=`).
    pub name: String,
    /// Session information (`i=`).
    pub info: String,
    /// Description URI (`u=`).
    pub uri: String,
    /// Email address (`e=`).
    pub email: String,
    /// Phone number (`p=`).
    pub phone: String,
    /// Connection data (`c=`).
    pub connection_info: Vec<ConnectionInfo>,
    /// Bandwidth lines (`b=`).
    pub bandwidth_info: Vec<Bandwidth>,
    /// Raw time zone adjustment lines (`z=`).
    pub time_zone_adjustments: Vec<String>,
    /// Encryption key (`k=`).
    pub encryption_key: EncryptionKey,
    /// Session attributes (`a=`).
    pub attributes: Vec<Attribute>,
}

impl Session {
    /// Returns the first attribute with the given name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }
}

/// A media block, from its `m=` line up to the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Media {
    /// Raw media line (`m=`), e.g. `audio 49170 RTP/AVP 0`.
    pub name: String,
    /// Media title (`i=`).
    pub title: String,
    /// Connection data (`c=`).
    pub connection_info: Vec<ConnectionInfo>,
    /// Raw bandwidth lines (`b=`).
    pub bandwidth_info: Vec<String>,
    /// Raw encryption key (`k=`).
    pub encryption_key: String,
    /// Raw attribute lines (`a=`).
    pub attributes: Vec<String>,
}

impl Media {
    /// Returns the media type, the first token of the media line.
    #[must_use]
    pub fn media_type(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }
}
