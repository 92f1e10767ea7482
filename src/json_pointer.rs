/// JSON Pointer validation (RFC 6901) and Relative JSON Pointers.
///
/// A pointer is the empty string (whole document) or one or more
/// `/`-prefixed reference tokens. Inside a token `~` is legal only as the
/// escapes `~0` and `~1`; every other character passes through, empty tokens
/// included. A relative pointer prefixes a non-negative integer (no leading
/// zero except the literal `0`) to either nothing, a `#`, or a pointer.
use crate::scanner::{LeadingZero, scan_decimal};

/// Check if a string is a valid JSON Pointer.
pub fn is_json_pointer(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return true;
    }
    if bytes[0] != b'/' {
        return false;
    }
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] == b'~' {
            if !matches!(bytes.get(pos + 1), Some(b'0' | b'1')) {
                return false;
            }
            pos += 2;
        } else {
            pos += 1;
        }
    }
    true
}

/// Check if a string is a valid Relative JSON Pointer.
pub fn is_relative_json_pointer(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut pos = 0;
    if scan_decimal(bytes, &mut pos, 1, 10, u32::MAX, LeadingZero::Forbid).is_none() {
        return false;
    }
    match &input[pos..] {
        "" | "#" => true,
        rest => is_json_pointer(rest),
    }
}
