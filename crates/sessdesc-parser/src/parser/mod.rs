//! Session description parser.
//!
//! A sans-I/O parser over a complete description held in memory.
//!
//! # Architecture
//!
//! - **Lexer**: splits raw bytes into `<key>=<value>` lines
//! - **Block parsers**: dispatch each line on its key, first for the session
//!   block and then for every media block
//!
//! Composite values (`o=`, `c=`) are handed to the sub-grammars on the
//! [`types`](crate::types) they produce.
//!
//! # Example
//!
//! ```
//! use sessdesc_parser::Parser;
//!
//! let input = b"v=0\r\ns=Call\r\nm=audio 49170 RTP/AVP 0\r\n";
//! let description = Parser::new().parse(input).unwrap();
//!
//! assert_eq!(description.session.name, "Call");
//! assert_eq!(description.media[0].media_type(), "audio");
//! ```

pub mod lexer;
mod media;
mod session;

pub use lexer::{Lexer, split_value};

use crate::Result;
use crate::types::Description;

/// Session description parser.
///
/// Holds no state between calls; one value can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    /// Creates a new parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses a complete session description.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. No partial description is
    /// returned.
    pub fn parse(&self, input: &[u8]) -> Result<Description> {
        let mut lexer = Lexer::new(input);

        let session = session::parse_session(&mut lexer)?;

        let mut media = Vec::new();
        while !lexer.is_eof() {
            media.push(media::parse_media(&mut lexer)?);
        }

        tracing::debug!(
            bytes = input.len(),
            media = media.len(),
            "parsed session description"
        );

        Ok(Description { session, media })
    }
}

/// Parses a complete session description with a default [`Parser`].
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(input: &[u8]) -> Result<Description> {
    Parser::new().parse(input)
}
