/// URI and IRI validation (RFC 3986 / RFC 3987).
///
/// A URI needs a valid scheme before the first colon and a remainder free of
/// control characters and unescaped spaces; the hierarchical productions are
/// not recursively validated beyond character legality. A URI-Reference also
/// accepts scheme-less relative references, the empty string included. The
/// IRI forms relax ASCII-only to any code point outside the C0/C1 controls.
use crate::character_sets::{is_iri_char, is_scheme_byte, is_uri_byte};

/// Check if a string is a valid URI: `scheme:` plus a legal-character
/// remainder.
pub fn is_uri(input: &str) -> bool {
    let bytes = input.as_bytes();
    let Some(colon) = memchr::memchr(b':', bytes) else {
        return false;
    };
    is_scheme(&bytes[..colon]) && bytes[colon + 1..].iter().all(|&b| is_uri_byte(b))
}

/// Check if a string is a valid URI-Reference: a URI or a relative reference
/// with no scheme. The empty string is a valid reference.
pub fn is_uri_reference(input: &str) -> bool {
    // every URI is also graphic-ASCII, so one pass covers both branches
    input.bytes().all(is_uri_byte)
}

/// Check if a string is a valid IRI: URI grammar with non-ASCII code points
/// admitted outside the C0/C1 control ranges.
pub fn is_iri(input: &str) -> bool {
    let bytes = input.as_bytes();
    let Some(colon) = memchr::memchr(b':', bytes) else {
        return false;
    };
    is_scheme(&bytes[..colon]) && input[colon + 1..].chars().all(is_iri_char)
}

/// Check if a string is a valid IRI-Reference.
pub fn is_iri_reference(input: &str) -> bool {
    input.chars().all(is_iri_char)
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(scheme: &[u8]) -> bool {
    let Some((&first, rest)) = scheme.split_first() else {
        return false;
    };
    first.is_ascii_alphabetic() && rest.iter().all(|&b| is_scheme_byte(b))
}
