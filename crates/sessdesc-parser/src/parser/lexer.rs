//! Line lexer for session descriptions.
//!
//! Splits raw bytes into `<key>=<value>` lines. Lines end with LF; a single
//! CR before the LF is dropped. Values are not trimmed or unescaped.

use crate::{Error, Result};

/// Line lexer state.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current position in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining input.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Returns true if at end of input.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the key of the line at the cursor without consuming it.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteData`] if only one byte is left and
    /// [`Error::BadSyntax`] if the second byte is not `=`.
    pub fn peek_key(&self) -> Result<Option<u8>> {
        match self.remaining() {
            [] => Ok(None),
            [_] => Err(Error::IncompleteData),
            [key, b'=', ..] => Ok(Some(*key)),
            _ => Err(Error::BadSyntax("expected '=' after line key")),
        }
    }

    /// Consumes the line at the cursor and returns its raw value.
    ///
    /// Must follow a successful [`peek_key`](Self::peek_key).
    pub fn next_value(&mut self) -> &'a [u8] {
        let line = self.remaining().get(2..).unwrap_or_default();
        let (value, rest) = split_value(line);
        self.pos = self.input.len() - rest.len();
        value
    }

    /// Consumes the line at the cursor and returns its value as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUtf8`] if the value is not UTF-8. The line is
    /// consumed either way.
    pub fn next_str(&mut self) -> Result<&'a str> {
        Ok(std::str::from_utf8(self.next_value())?)
    }
}

/// Splits one line value off the front of `data`.
///
/// Returns the bytes before the first LF, minus one trailing CR, and the
/// bytes after the LF. Without an LF the whole input is the value and the
/// rest is empty.
#[must_use]
pub fn split_value(data: &[u8]) -> (&[u8], &[u8]) {
    let Some(lf) = data.iter().position(|&b| b == b'\n') else {
        return (data, &[]);
    };

    let (line, rest) = data.split_at(lf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    (line, &rest[1..])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_value_crlf() {
        assert_eq!(split_value(b"0\r\ns=x\r\n"), (&b"0"[..], &b"s=x\r\n"[..]));
    }

    #[test]
    fn test_split_value_lf() {
        assert_eq!(split_value(b"0\ns=x"), (&b"0"[..], &b"s=x"[..]));
    }

    #[test]
    fn test_split_value_no_terminator() {
        assert_eq!(split_value(b"recvonly"), (&b"recvonly"[..], &b""[..]));
        // CR is only stripped in front of LF
        assert_eq!(split_value(b"abc\r"), (&b"abc\r"[..], &b""[..]));
    }

    #[test]
    fn test_split_value_strips_one_cr() {
        assert_eq!(split_value(b"a\r\r\n"), (&b"a\r"[..], &b""[..]));
        assert_eq!(split_value(b"\r\n"), (&b""[..], &b""[..]));
        assert_eq!(split_value(b"\n"), (&b""[..], &b""[..]));
    }

    #[test]
    fn test_split_value_keeps_whitespace() {
        assert_eq!(split_value(b"  x y \n"), (&b"  x y "[..], &b""[..]));
    }

    #[test]
    fn test_lexer_lines() {
        let mut lexer = Lexer::new(b"v=0\r\ns=Seminar\na=recvonly");

        assert_eq!(lexer.peek_key().unwrap(), Some(b'v'));
        assert_eq!(lexer.next_str().unwrap(), "0");
        assert_eq!(lexer.position(), 5);
        assert_eq!(lexer.peek_key().unwrap(), Some(b's'));
        assert_eq!(lexer.next_str().unwrap(), "Seminar");
        assert_eq!(lexer.peek_key().unwrap(), Some(b'a'));
        assert_eq!(lexer.next_str().unwrap(), "recvonly");
        assert!(lexer.is_eof());
        assert_eq!(lexer.peek_key().unwrap(), None);
    }

    #[test]
    fn test_peek_key_does_not_consume() {
        let lexer = Lexer::new(b"m=audio 0 RTP/AVP 0\r\n");
        assert_eq!(lexer.peek_key().unwrap(), Some(b'm'));
        assert_eq!(lexer.peek_key().unwrap(), Some(b'm'));
        assert_eq!(lexer.position(), 0);
    }

    #[test]
    fn test_peek_key_errors() {
        assert_eq!(Lexer::new(b"a").peek_key(), Err(Error::IncompleteData));
        assert!(matches!(
            Lexer::new(b"ab=x").peek_key(),
            Err(Error::BadSyntax(_))
        ));
        assert!(matches!(
            Lexer::new(b"\r\n").peek_key(),
            Err(Error::BadSyntax(_))
        ));
    }

    #[test]
    fn test_empty_value() {
        let mut lexer = Lexer::new(b"s=\r\ni=x");
        assert_eq!(lexer.next_str().unwrap(), "");
        assert_eq!(lexer.remaining(), b"i=x");
    }

    #[test]
    fn test_invalid_utf8_consumes_line() {
        let mut lexer = Lexer::new(b"s=\xff\xfe\r\nv=0");
        assert!(matches!(lexer.next_str(), Err(Error::InvalidUtf8(_))));
        assert_eq!(lexer.remaining(), b"v=0");
    }
}
