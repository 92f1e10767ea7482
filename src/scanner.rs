/// Bounded decimal scanner shared by every validator with numeric fields.
///
/// Each scan consumes a maximal run of ASCII digits at a cursor and yields its
/// value, failing on runs outside `[min_digits, max_digits]`, on values above
/// `max_value` (overflow is failure, never wraparound), and on forbidden
/// leading zeros. A single `"0"` is always legal.

/// Leading-zero policy for a digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingZero {
    /// Leading zeros are legal (fixed-width fields like `09` in dates).
    Allow,
    /// Any multi-digit run starting with `0` is rejected (IPv4 octets,
    /// relative JSON Pointer prefixes).
    Forbid,
}

/// Scan a run of decimal digits starting at `*pos`, advancing the cursor past
/// the run on success. Returns `None` without advancing if the run length is
/// outside `[min_digits, max_digits]`, the value exceeds `max_value`, or a
/// leading zero violates `policy`.
pub fn scan_decimal(
    bytes: &[u8],
    pos: &mut usize,
    min_digits: usize,
    max_digits: usize,
    max_value: u32,
    policy: LeadingZero,
) -> Option<u32> {
    let start = *pos;
    let mut cursor = start;
    let mut value: u32 = 0;

    while let Some(b) = bytes.get(cursor) {
        if !b.is_ascii_digit() {
            break;
        }
        // Maximal-run rule: a too-long run is a failure, not an early stop
        if cursor - start == max_digits {
            return None;
        }
        value = value
            .checked_mul(10)?
            .checked_add(u32::from(b - b'0'))
            .filter(|&v| v <= max_value)?;
        cursor += 1;
    }

    let len = cursor - start;
    if len < min_digits {
        return None;
    }
    if policy == LeadingZero::Forbid && len > 1 && bytes[start] == b'0' {
        return None;
    }

    *pos = cursor;
    Some(value)
}

/// Scan a run that must cover the entire slice (fixed-width or whole-field
/// numerics such as date components and ports).
pub fn parse_decimal(
    bytes: &[u8],
    min_digits: usize,
    max_digits: usize,
    max_value: u32,
    policy: LeadingZero,
) -> Option<u32> {
    let mut pos = 0;
    let value = scan_decimal(bytes, &mut pos, min_digits, max_digits, max_value, policy)?;
    if pos == bytes.len() { Some(value) } else { None }
}
