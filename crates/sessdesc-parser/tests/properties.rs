//! Property tests for the session description parser.

#![allow(clippy::unwrap_used)]

use std::fmt::Write;

use proptest::prelude::*;
use sessdesc_parser::parser::split_value;
use sessdesc_parser::{ConnectionInfo, Media, parse};

proptest! {
    /// Parsing never panics, whatever the input.
    #[test]
    fn parse_arbitrary_bytes(input in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = parse(&input);
    }

    /// Parsing the same buffer twice gives the same result.
    #[test]
    fn parse_is_deterministic(input in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    /// The value never spans a line and the split loses nothing but the terminator.
    #[test]
    fn split_value_reconstructs(input in "[a-z=\\r\\n ]{0,40}") {
        let (value, rest) = split_value(input.as_bytes());
        prop_assert!(!value.contains(&b'\n'));

        let consumed = input.len() - rest.len();
        prop_assert!(input.as_bytes().ends_with(rest));
        if consumed == input.len() && !input.contains('\n') {
            prop_assert_eq!(value, input.as_bytes());
        } else {
            let line = &input.as_bytes()[..consumed - 1];
            prop_assert!(line == value || line == [value, &b"\r"[..]].concat().as_slice());
        }
    }

    /// Address, TTL and range come back out of a generated `c=` value.
    #[test]
    fn connection_address_forms(
        octets in prop::array::uniform4(0u8..=255),
        ttl in proptest::option::of(0i64..=255),
        range in 1i64..=16,
        with_range in any::<bool>(),
    ) {
        let address = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        let mut value = format!("IN IP4 {address}");
        if let Some(ttl) = ttl {
            write!(value, "/{ttl}").unwrap();
            if with_range {
                write!(value, "/{range}").unwrap();
            }
        }

        let conn = ConnectionInfo::parse(&value).unwrap();
        prop_assert_eq!(&conn.address, &address);
        prop_assert_eq!(conn.ttl(), ttl);
        let expected_range = if ttl.is_some() && with_range { Some(range) } else { None };
        prop_assert_eq!(conn.addr_range(), expected_range);
    }

    /// Media blocks come back in the order they were written.
    #[test]
    fn media_order_preserved(kinds in prop::collection::vec("[a-z]{1,8}", 0..6)) {
        let mut input = String::from("v=0\r\ns=-\r\n");
        for (port, kind) in kinds.iter().enumerate() {
            write!(input, "m={kind} {port} RTP/AVP 0\r\na=sendrecv\r\n").unwrap();
        }

        let desc = parse(input.as_bytes()).unwrap();
        let parsed: Vec<&str> = desc.media.iter().map(Media::media_type).collect();
        prop_assert_eq!(parsed, kinds.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
