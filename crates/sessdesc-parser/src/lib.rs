//! # sessdesc-parser
//!
//! Session description (SDP) parsing for media session signaling.
//!
//! ## Features
//!
//! - **Line lexer**: CRLF and LF terminated `<key>=<value>` lines
//! - **Block parsing**: one session block followed by any number of media
//!   blocks, in input order
//! - **Structured fields**: originator (`o=`) and connection data (`c=`),
//!   including the `/ttl/range` address suffix
//! - **Classified errors**: the first malformed line stops the parse with a
//!   specific [`Error`] variant
//!
//! Timing (`t=`) and repeat (`r=`) lines are not supported and are rejected
//! as unrecognized keys.
//!
//! ## Quick Start
//!
//! ```
//! use sessdesc_parser::{AddrType, parse};
//!
//! let input = b"v=0\r\n\
//!               o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n\
//!               s=SDP Seminar\r\n\
//!               c=IN IP4 224.2.17.12/127\r\n\
//!               m=audio 49170 RTP/AVP 0\r\n";
//!
//! let description = parse(input)?;
//! assert_eq!(description.session.originator.addr_type, AddrType::Ip4);
//! assert_eq!(description.session.connection_info[0].ttl(), Some(127));
//! assert_eq!(description.media[0].name, "audio 49170 RTP/AVP 0");
//! # Ok::<(), sessdesc_parser::Error>(())
//! ```
//!
//! ## Errors
//!
//! ```
//! use sessdesc_parser::{Block, Error, parse};
//!
//! let err = parse(b"v=0\r\nx=foo\r\n").unwrap_err();
//! assert_eq!(err, Error::UnrecognizedKey { block: Block::Session, key: 'x' });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;

pub mod parser;
pub mod types;

pub use error::{Block, Error, Result};
pub use parser::{Parser, parse};
pub use types::{
    AddrType, Attribute, Bandwidth, ConnectionInfo, Description, EncryptionKey, Media, NetType,
    Origin, Session,
};
