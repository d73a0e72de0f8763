//! Human-readable summary of a parsed description.

use std::fmt::Write;

use sessdesc_parser::{ConnectionInfo, Description};

/// Renders a short multi-line summary.
pub fn render(description: &Description) -> String {
    let session = &description.session;
    let mut out = String::new();

    let name = if session.name.is_empty() {
        "(unnamed)"
    } else {
        session.name.as_str()
    };
    let _ = writeln!(out, "session: {name}");

    let origin = &session.originator;
    if !origin.unicast_address.is_empty() {
        let _ = writeln!(
            out,
            "origin: {} {} {} {} {} {}",
            origin.username,
            origin.session_id,
            origin.session_version,
            origin.net_type,
            origin.addr_type,
            origin.unicast_address
        );
    }

    for conn in &session.connection_info {
        let _ = writeln!(out, "connection: {}", connection(conn));
    }

    for attr in &session.attributes {
        let _ = writeln!(out, "attribute: {attr}");
    }

    for (index, media) in description.media.iter().enumerate() {
        let _ = write!(
            out,
            "media[{index}]: {} ({} attributes",
            media.name,
            media.attributes.len()
        );
        for conn in &media.connection_info {
            let _ = write!(out, ", {}", connection(conn));
        }
        let _ = writeln!(out, ")");
    }

    out.truncate(out.trim_end().len());
    out
}

fn connection(conn: &ConnectionInfo) -> String {
    let mut text = format!("{} {} {}", conn.net_type, conn.addr_type, conn.address);
    if let Some(ttl) = conn.ttl() {
        let _ = write!(text, " ttl={ttl}");
    }
    if let Some(range) = conn.addr_range() {
        let _ = write!(text, " range={range}");
    }
    text
}
