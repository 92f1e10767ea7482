/// IPv6 address validation (RFC 4291 text representation).
///
/// Accepts up to eight groups of 1-4 hex digits separated by `:`, at most one
/// `::` run standing for one or more all-zero groups, an optional embedded
/// dotted-decimal tail for the last 32 bits, and an optional `%zone` suffix.
/// This is the bare-address grammar: brackets belong to the endpoint grammar
/// and are rejected here, as are CIDR suffixes.
use crate::ipv4::is_ipv4_bytes;

/// Check if a string is a valid IPv6 address, optionally carrying a zone id.
pub fn is_ipv6(input: &str) -> bool {
    let bytes = input.as_bytes();

    match memchr::memchr(b'%', bytes) {
        Some(pos) => is_ipv6_address(&bytes[..pos]) && is_zone_id(&bytes[pos + 1..]),
        None => is_ipv6_address(bytes),
    }
}

/// Zone ids are opaque interface names: non-empty, no colon, no bracket.
fn is_zone_id(zone: &[u8]) -> bool {
    !zone.is_empty() && !zone.iter().any(|&b| matches!(b, b':' | b'[' | b']'))
}

/// Single forward scan over the address proper (zone id already split off).
/// `groups` counts explicit 16-bit groups; a dotted-quad tail counts as two.
/// With a `::` present at most seven explicit groups may appear, since the
/// compression stands for at least one zero group.
fn is_ipv6_address(bytes: &[u8]) -> bool {
    let mut pos = 0;
    let mut groups = 0usize;
    let mut compressed = false;

    if bytes.starts_with(b"::") {
        compressed = true;
        pos = 2;
        if pos == bytes.len() {
            return true;
        }
    } else if bytes.first() == Some(&b':') {
        // single leading colon
        return false;
    }

    loop {
        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_hexdigit() {
            pos += 1;
        }
        if pos == start {
            return false;
        }

        match bytes.get(pos) {
            None => {
                if pos - start > 4 {
                    return false;
                }
                groups += 1;
                break;
            }
            Some(b'.') => {
                // dotted-quad tail: re-scan from the group start as IPv4,
                // which must consume the rest of the address
                if !is_ipv4_bytes(&bytes[start..]) {
                    return false;
                }
                groups += 2;
                break;
            }
            Some(b':') => {
                if pos - start > 4 {
                    return false;
                }
                groups += 1;
                if bytes.get(pos + 1) == Some(&b':') {
                    if compressed {
                        return false;
                    }
                    compressed = true;
                    pos += 2;
                    if pos == bytes.len() {
                        // trailing "::"
                        return groups <= 7;
                    }
                } else {
                    pos += 1;
                    if pos == bytes.len() {
                        // trailing single colon
                        return false;
                    }
                }
            }
            Some(_) => return false,
        }

        if groups > 7 {
            return false;
        }
    }

    if compressed { groups <= 7 } else { groups == 8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_form() {
        assert!(is_ipv6("2001:0db8:0000:0000:0001:0000:0000:0001"));
        assert!(is_ipv6("2001:db8:0:0:1:0:0:1"));
        assert!(is_ipv6("fe80:0:0:0:0:0:0:1"));
    }

    #[test]
    fn test_compression() {
        assert!(is_ipv6("::"));
        assert!(is_ipv6("::1"));
        assert!(is_ipv6("1::"));
        assert!(is_ipv6("2001:db8::1"));
        assert!(is_ipv6("1::2:3:4:5:6:7"));
    }

    #[test]
    fn test_single_compression_only() {
        assert!(!is_ipv6("1::2::3"));
        assert!(!is_ipv6("::1::"));
        assert!(!is_ipv6(":::"));
    }

    #[test]
    fn test_group_bounds() {
        assert!(!is_ipv6("1:2:3:4:5:6:7"));
        assert!(!is_ipv6("1:2:3:4:5:6:7:8:9"));
        assert!(!is_ipv6("1:2:3:4:5:6:7:8::"));
        assert!(!is_ipv6("1::2:3:4:5:6:7:8"));
        assert!(!is_ipv6("12345::"));
        assert!(!is_ipv6("1:2:3:4:5:6:7:12345"));
    }

    #[test]
    fn test_embedded_ipv4() {
        assert!(is_ipv6("::ffff:192.0.2.1"));
        assert!(is_ipv6("::192.0.2.1"));
        assert!(is_ipv6("64:ff9b::1.2.3.4"));
        assert!(is_ipv6("1:2:3:4:5:6:192.0.2.1"));
        assert!(!is_ipv6("1:2:3:4:5:6:7:192.0.2.1"));
        assert!(!is_ipv6("::ffff:192.0.2.256"));
        assert!(!is_ipv6("::ffff:192.0.2"));
    }

    #[test]
    fn test_zone_id() {
        assert!(is_ipv6("fe80::1%eth0"));
        assert!(is_ipv6("fe80::1%25"));
        assert!(!is_ipv6("fe80::1%"));
        assert!(!is_ipv6("fe80::1%et:h0"));
        assert!(!is_ipv6("%eth0"));
    }

    #[test]
    fn test_not_bare_address() {
        assert!(!is_ipv6("[::1]"));
        assert!(!is_ipv6("::1/64"));
        assert!(!is_ipv6(" ::1"));
        assert!(!is_ipv6("::1 "));
        assert!(!is_ipv6(""));
        assert!(!is_ipv6(":"));
        assert!(!is_ipv6("1.2.3.4"));
        assert!(!is_ipv6("g::1"));
    }
}
