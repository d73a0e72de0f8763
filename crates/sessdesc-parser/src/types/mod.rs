//! Session description model types.
//!
//! Composite field values (`o=`, `c=`) are decomposed by their own
//! sub-grammars; everything else is stored as the raw line value.

mod address;
mod connection;
mod description;
mod field;
mod origin;

pub use address::{AddrType, NetType};
pub use connection::ConnectionInfo;
pub use description::{Description, Media, Session};
pub use field::{Attribute, Bandwidth, EncryptionKey};
pub use origin::Origin;

use crate::error::{Error, Result};

/// Splits `value` at its first space.
///
/// Returns the token before the space and everything after it.
fn split_token<'a>(value: &'a str, missing: &'static str) -> Result<(&'a str, &'a str)> {
    value.split_once(' ').ok_or(Error::BadSyntax(missing))
}

/// Splits `value` at the first `:`, for `<name>[:<value>]` shaped fields.
fn split_colon(value: &str) -> (&str, Option<&str>) {
    match value.split_once(':') {
        Some((name, rest)) => (name, Some(rest)),
        None => (value, None),
    }
}
