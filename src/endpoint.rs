/// Port validation and `host:port` endpoint parsing.
///
/// Three endpoint forms are recognized, in order: bracketed IPv6
/// (`[::1]:80`), dotted-decimal IPv4 (`192.168.1.1:8080`), and hostname
/// (`example.com:443`). The parser commits to the first form whose delimiter
/// pattern matches and fails closed if that form's host grammar then rejects;
/// it never falls back to another interpretation. More than one colon outside
/// brackets is ambiguous and fails.
use crate::error::{ParseError, Result};
use crate::host::is_hostname;
use crate::ipv4::is_ipv4;
use crate::ipv6::is_ipv6;
use crate::scanner::{LeadingZero, parse_decimal};

/// A parsed `host:port` pair. `host` borrows from the parser input with
/// brackets stripped and any IPv6 zone id retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub host: &'a str,
    pub port: u16,
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    let bytes = port.as_bytes();
    let value = parse_decimal(bytes, 1, bytes.len(), 65535, LeadingZero::Allow)?;
    u16::try_from(value).ok()
}

/// Check if a string is a valid port number in [0, 65535].
pub fn is_port(input: &str) -> bool {
    parse_port(input).is_some()
}

/// Parse a `host:port` endpoint, returning sub-views of the input.
///
/// `"[::1]:80"` yields host `"::1"` and port `80`; `"192.168.1.1:8080"`
/// yields host `"192.168.1.1"`; `"host:80:443"` fails as ambiguous.
pub fn parse_endpoint(input: &str) -> Result<Endpoint<'_>> {
    if let Some(rest) = input.strip_prefix('[') {
        return parse_bracketed(rest);
    }

    // Unbracketed: exactly one colon may separate host and port, since
    // neither an IPv4 address nor a hostname can itself contain one
    let bytes = input.as_bytes();
    let mut colons = memchr::memchr_iter(b':', bytes);
    let sep = colons.next().ok_or(ParseError::InvalidEndpoint)?;
    if colons.next().is_some() {
        return Err(ParseError::InvalidEndpoint);
    }

    let host = &input[..sep];
    let port_str = &input[sep + 1..];
    if host.is_empty() {
        return Err(ParseError::InvalidHost);
    }

    // A host of digits and dots commits to the IPv4 grammar: "999.1.1.1:80"
    // fails rather than being retried as a hostname
    if host.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        if !is_ipv4(host) {
            return Err(ParseError::InvalidIpv4);
        }
    } else if !is_hostname(host) {
        return Err(ParseError::InvalidHost);
    }

    let port = parse_port(port_str).ok_or(ParseError::InvalidPort)?;
    Ok(Endpoint { host, port })
}

/// Bracketed form, `rest` starting just past `[`. The host is everything up
/// to the first `]` and must be an IPv6 address (zone id allowed); the tail
/// must be `:` followed by a valid port.
fn parse_bracketed(rest: &str) -> Result<Endpoint<'_>> {
    let close = memchr::memchr(b']', rest.as_bytes()).ok_or(ParseError::InvalidEndpoint)?;
    let host = &rest[..close];
    let tail = &rest[close + 1..];

    if !is_ipv6(host) {
        return Err(ParseError::InvalidIpv6);
    }
    let port_str = tail.strip_prefix(':').ok_or(ParseError::InvalidEndpoint)?;
    let port = parse_port(port_str).ok_or(ParseError::InvalidPort)?;
    Ok(Endpoint { host, port })
}
