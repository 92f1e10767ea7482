/// IPv4 address validation: strict dotted-decimal notation only.
///
/// Unlike the WHATWG URL host grammar, the RFC form admits no octal, hex, or
/// short notations: exactly four octets, each 1-3 digits in 0-255, with no
/// leading zero unless the octet is the literal `0`.
use crate::scanner::{LeadingZero, scan_decimal};

/// Check if a string is a valid dotted-decimal IPv4 address.
///
/// `"192.168.01.1"` is rejected (leading zero), `"256.1.1.1"` is rejected
/// (octet range), `"1.2.3"` and `"1.2.3.4.5"` are rejected (octet count).
pub fn is_ipv4(input: &str) -> bool {
    is_ipv4_bytes(input.as_bytes())
}

/// Byte-level IPv4 scan; the whole slice must be consumed.
pub(crate) fn is_ipv4_bytes(bytes: &[u8]) -> bool {
    let mut pos = 0;

    for octet in 0..4 {
        if octet > 0 {
            if bytes.get(pos) != Some(&b'.') {
                return false;
            }
            pos += 1;
        }
        if scan_decimal(bytes, &mut pos, 1, 3, 255, LeadingZero::Forbid).is_none() {
            return false;
        }
    }

    pos == bytes.len()
}
