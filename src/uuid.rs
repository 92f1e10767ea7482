/// UUID validation (RFC 4122 textual form).

/// Check if a string is a valid UUID: exactly the 8-4-4-4-12 hex groups with
/// hyphens at the four fixed positions, case-insensitive.
pub fn is_uuid(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| match i {
        8 | 13 | 18 | 23 => b == b'-',
        _ => b.is_ascii_hexdigit(),
    })
}
