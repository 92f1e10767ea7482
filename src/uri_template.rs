/// URI Template validation (RFC 6570).
///
/// A template is literal text with embedded `{...}` expressions. Expressions
/// take an optional single operator, then a non-empty comma-separated list of
/// variable names, each optionally suffixed with `*` (explode) or `:n`
/// (prefix length, 1-4 digits, no leading zero). Braces never nest and no
/// whitespace is allowed anywhere.
use crate::character_sets::is_iri_char;
use crate::scanner::{LeadingZero, scan_decimal};

/// Check if a string is a valid URI Template.
pub fn is_uri_template(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => {
                pos += 1;
                if !scan_expression(bytes, &mut pos) {
                    return false;
                }
            }
            b'}' => return false, // unmatched close
            _ => {
                let Some(c) = input[pos..].chars().next() else {
                    return false;
                };
                if !is_iri_char(c) {
                    return false;
                }
                pos += c.len_utf8();
            }
        }
    }
    true
}

/// Expression body, cursor just past `{`; consumes through the closing `}`.
fn scan_expression(bytes: &[u8], pos: &mut usize) -> bool {
    if let Some(&b) = bytes.get(*pos)
        && matches!(b, b'+' | b'#' | b'.' | b'/' | b';' | b'?' | b'&')
    {
        *pos += 1;
    }

    loop {
        if !scan_varname(bytes, pos) {
            return false;
        }
        match bytes.get(*pos) {
            Some(b'*') => *pos += 1,
            Some(b':') => {
                *pos += 1;
                // prefix length 1-9999, first digit nonzero
                match scan_decimal(bytes, pos, 1, 4, 9999, LeadingZero::Forbid) {
                    Some(n) if n >= 1 => {}
                    _ => return false,
                }
            }
            _ => {}
        }
        match bytes.get(*pos) {
            Some(b',') => *pos += 1,
            Some(b'}') => {
                *pos += 1;
                return true;
            }
            _ => return false, // nested brace, whitespace, or unterminated
        }
    }
}

/// Variable names are non-empty runs of alphanumerics, `_`, `.`, and
/// complete `%XX` escapes.
fn scan_varname(bytes: &[u8], pos: &mut usize) -> bool {
    let start = *pos;
    loop {
        match bytes.get(*pos) {
            Some(b) if b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.') => *pos += 1,
            Some(b'%') => {
                let escaped = bytes.get(*pos + 1).is_some_and(u8::is_ascii_hexdigit)
                    && bytes.get(*pos + 2).is_some_and(u8::is_ascii_hexdigit);
                if !escaped {
                    return false;
                }
                *pos += 3;
            }
            _ => break,
        }
    }
    *pos > start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_literals() {
        assert!(is_uri_template(""));
        assert!(is_uri_template("http://example.com/"));
        assert!(is_uri_template("no-expressions-at-all"));
    }

    #[test]
    fn test_simple_expressions() {
        assert!(is_uri_template("{var}"));
        assert!(is_uri_template("http://example.com/{id}"));
        assert!(is_uri_template("{x,y}"));
        assert!(is_uri_template("{var_1.b}"));
        assert!(is_uri_template("{%20}"));
    }

    #[test]
    fn test_operators() {
        assert!(is_uri_template("{+path}/here"));
        assert!(is_uri_template("X{#frag}"));
        assert!(is_uri_template("{.ext}"));
        assert!(is_uri_template("{/path,sub}"));
        assert!(is_uri_template("{;params}"));
        assert!(is_uri_template("{?q,lang}"));
        assert!(is_uri_template("{&cont}"));
        assert!(!is_uri_template("{=var}"));
    }

    #[test]
    fn test_modifiers() {
        assert!(is_uri_template("{var*}"));
        assert!(is_uri_template("{var:3}"));
        assert!(is_uri_template("{var:9999}"));
        assert!(is_uri_template("{?list*,name:5}"));
        assert!(!is_uri_template("{var:0}"));
        assert!(!is_uri_template("{var:03}"));
        assert!(!is_uri_template("{var:10000}"));
        assert!(!is_uri_template("{var:}"));
        assert!(!is_uri_template("{var*3}"));
    }

    #[test]
    fn test_brace_balance() {
        assert!(!is_uri_template("{unclosed"));
        assert!(!is_uri_template("unopened}"));
        assert!(!is_uri_template("{a{b}}"));
        assert!(!is_uri_template("{}"));
        assert!(!is_uri_template("{,}"));
    }

    #[test]
    fn test_whitespace_and_escapes() {
        assert!(!is_uri_template("{a b}"));
        assert!(!is_uri_template("has space{var}"));
        assert!(!is_uri_template("{%2}"));
        assert!(!is_uri_template("{%gg}"));
    }
}
