/// Hostname, domain, and IDN validation (RFC 1123 label rules).
///
/// A hostname is a dot-separated sequence of labels, each 1-63 characters,
/// alphanumeric at both ends with hyphens allowed between, 253 characters
/// total. A domain is a hostname with at least two labels, which rejects
/// bare names like `localhost`. The IDN variants admit non-ASCII code points
/// as label characters (lengths counted in code points) and `xn--` ACE labels
/// checked syntactically without decoding.

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Check if a string is a valid RFC 1123 hostname.
pub fn is_hostname(input: &str) -> bool {
    if input.is_empty() || input.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    // split() yields empty strings for leading/trailing/doubled dots,
    // which the label check rejects
    input.split('.').all(is_label)
}

/// Check if a string is a valid domain name: a hostname with at least two
/// labels. `"localhost"` fails, `"example.com"` passes.
pub fn is_domain(input: &str) -> bool {
    is_hostname(input) && memchr::memchr(b'.', input.as_bytes()).is_some()
}

/// Check if a string is a valid internationalized hostname: labels may hold
/// non-ASCII code points or be ACE-encoded (`xn--`), plain ASCII labels keep
/// the RFC 1123 rules.
pub fn is_idn_hostname(input: &str) -> bool {
    if input.is_empty() || input.chars().count() > MAX_HOSTNAME_LEN {
        return false;
    }
    input.split('.').all(is_idn_label)
}

/// Check if a string is a valid internationalized domain name (IDN hostname
/// with at least two labels).
pub fn is_idn_domain(input: &str) -> bool {
    is_idn_hostname(input) && memchr::memchr(b'.', input.as_bytes()).is_some()
}

fn is_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    let len = bytes.len();
    if len == 0 || len > MAX_LABEL_LEN {
        return false;
    }
    if !bytes[0].is_ascii_alphanumeric() || !bytes[len - 1].is_ascii_alphanumeric() {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_ace_prefix(bytes: &[u8]) -> bool {
    bytes.len() >= 4
        && matches!(bytes[0], b'x' | b'X')
        && matches!(bytes[1], b'n' | b'N')
        && bytes[2] == b'-'
        && bytes[3] == b'-'
}

fn is_idn_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if is_ace_prefix(bytes) {
        // ACE label: the remainder must be non-empty LDH, no nested decode
        let rest = &bytes[4..];
        return !rest.is_empty()
            && bytes.len() <= MAX_LABEL_LEN
            && rest.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'-');
    }

    let count = label.chars().count();
    if count == 0 || count > MAX_LABEL_LEN {
        return false;
    }
    let edges_ok = label
        .chars()
        .next()
        .zip(label.chars().next_back())
        .is_some_and(|(first, last)| is_idn_label_edge(first) && is_idn_label_edge(last));
    edges_ok
        && label
            .chars()
            .all(|c| c == '-' || is_idn_label_edge(c))
}

/// Non-ASCII code points count as letters for label-position purposes.
fn is_idn_label_edge(c: char) -> bool {
    c.is_ascii_alphanumeric() || !c.is_ascii()
}
