/// Character classes shared by the grammar validators.
/// All predicates are total over the full byte/char range and ASCII-only
/// unless noted; bytes >= 0x80 never classify as digit or alpha.

/// Check if a byte is a reserved URI character (RFC 3986 section 2.2,
/// gen-delims plus sub-delims).
pub fn is_uri_reserved(b: u8) -> bool {
    matches!(
        b,
        b':' | b'/'
            | b'?'
            | b'#'
            | b'['
            | b']'
            | b'@'
            | b'!'
            | b'$'
            | b'&'
            | b'\''
            | b'('
            | b')'
            | b'*'
            | b'+'
            | b','
            | b';'
            | b'='
    )
}

/// Check if a byte is an unreserved URI character (RFC 3986 section 2.3).
pub fn is_uri_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Check if a byte may appear in a URI scheme after the leading letter
/// (RFC 3986 section 3.1).
pub fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Check if a byte is `atext` per RFC 5321/5322: the characters legal in an
/// unquoted email local-part atom.
pub fn is_atext(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'/'
                | b'='
                | b'?'
                | b'^'
                | b'_'
                | b'`'
                | b'{'
                | b'|'
                | b'}'
                | b'~'
        )
}

/// URI byte classification for fast path
/// Returns: 0=illegal (control/space/non-ASCII), 1=legal URI byte
const URI_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // Graphic ASCII: everything between '!' (0x21) and '~' (0x7E)
    let mut i = 0x21u8;
    while i <= 0x7E {
        table[i as usize] = 1;
        i += 1;
    }

    table
};

/// Check if a byte may appear anywhere in a URI: graphic ASCII only, no
/// controls, no space, no bytes >= 0x80 (branchless via lookup table).
pub fn is_uri_byte(b: u8) -> bool {
    URI_CHAR_TABLE[b as usize] == 1
}

/// Check if a code point may appear in an IRI (RFC 3987): graphic ASCII or
/// any non-ASCII code point outside the C1 control range U+0080..U+009F.
pub fn is_iri_char(c: char) -> bool {
    if c.is_ascii() {
        is_uri_byte(c as u8)
    } else {
        c >= '\u{A0}'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_reserved() {
        for b in b":/?#[]@!$&'()*+,;=" {
            assert!(is_uri_reserved(*b));
        }
        assert!(!is_uri_reserved(b'a'));
        assert!(!is_uri_reserved(b'~'));
        assert!(!is_uri_reserved(b' '));
    }

    #[test]
    fn test_uri_unreserved() {
        assert!(is_uri_unreserved(b'a'));
        assert!(is_uri_unreserved(b'Z'));
        assert!(is_uri_unreserved(b'0'));
        assert!(is_uri_unreserved(b'~'));
        assert!(!is_uri_unreserved(b':'));
        assert!(!is_uri_unreserved(0x80));
    }

    #[test]
    fn test_uri_byte_table() {
        assert!(is_uri_byte(b'!'));
        assert!(is_uri_byte(b'~'));
        assert!(!is_uri_byte(b' '));
        assert!(!is_uri_byte(b'\t'));
        assert!(!is_uri_byte(0x7F));
        assert!(!is_uri_byte(0x80));
    }

    #[test]
    fn test_iri_char() {
        assert!(is_iri_char('a'));
        assert!(is_iri_char('\u{00E9}'));
        assert!(is_iri_char('\u{65E5}'));
        assert!(!is_iri_char(' '));
        assert!(!is_iri_char('\u{0085}'));
    }
}
