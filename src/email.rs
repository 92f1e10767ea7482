/// Email address validation (RFC 5321, dot-atom form).
///
/// The local part is one or more atoms of `atext` characters separated by
/// single dots; the domain must be a full domain name (at least two labels).
/// No quoted-string local parts, no address literals. The IDN variant admits
/// non-ASCII code points in the local part and internationalized domains.
use crate::character_sets::is_atext;
use crate::host::{is_domain, is_idn_domain};

/// Check if a string is a valid email address with an ASCII dot-atom local
/// part and a domain-name host.
pub fn is_email(input: &str) -> bool {
    let Some(at) = memchr::memchr(b'@', input.as_bytes()) else {
        return false;
    };
    is_dot_atom(&input.as_bytes()[..at], false) && is_domain(&input[at + 1..])
}

/// Check if a string is a valid internationalized email address: non-ASCII
/// code points allowed in the local part, domain checked as IDN.
pub fn is_idn_email(input: &str) -> bool {
    let Some(at) = memchr::memchr(b'@', input.as_bytes()) else {
        return false;
    };
    is_dot_atom(&input.as_bytes()[..at], true) && is_idn_domain(&input[at + 1..])
}

/// Dot-separated atoms: no leading, trailing, or consecutive dots, every
/// other byte `atext` (or any non-ASCII byte when `allow_unicode`; the
/// enclosing `&str` already guarantees UTF-8 structure).
fn is_dot_atom(local: &[u8], allow_unicode: bool) -> bool {
    if local.is_empty() {
        return false;
    }
    let mut prev_dot = true; // dot at the start is illegal
    for &b in local {
        if b == b'.' {
            if prev_dot {
                return false;
            }
            prev_dot = true;
        } else if is_atext(b) || (allow_unicode && b >= 0x80) {
            prev_dot = false;
        } else {
            return false;
        }
    }
    !prev_dot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last@example.com"));
        assert!(is_email("user+tag@example.co.uk"));
        assert!(is_email("!#$%&'*+-/=?^_`{|}~@example.com"));
    }

    #[test]
    fn test_local_part_dots() {
        assert!(!is_email(".user@example.com"));
        assert!(!is_email("user.@example.com"));
        assert!(!is_email("us..er@example.com"));
    }

    #[test]
    fn test_structure() {
        assert!(!is_email("userexample.com"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@@example.com"));
        assert!(!is_email("us er@example.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_domain_needs_two_labels() {
        assert!(!is_email("user@localhost"));
        assert!(!is_email("user@example..com"));
    }

    #[test]
    fn test_idn_addresses() {
        assert!(is_idn_email("user@example.com"));
        assert!(is_idn_email("用户@例え.jp"));
        assert!(is_idn_email("user@xn--r8jz45g.jp"));
        assert!(!is_idn_email("用户@例え"));
        assert!(!is_email("用户@example.com"));
    }
}
