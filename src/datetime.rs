/// RFC 3339 date/time validation and ISO 8601 durations.
///
/// Dates use a fixed month-length table with no leap-year special case, so
/// February 29 is always rejected; this mirrors the reference behavior and is
/// a documented simplification. Times require a timezone designator and admit
/// the leap second 60. The `T`/`Z` literals are accepted case-insensitively
/// as RFC 3339 permits; ISO 8601 duration designators stay uppercase.
use crate::scanner::{LeadingZero, parse_decimal, scan_decimal};

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Check if a string is a valid RFC 3339 full-date (`YYYY-MM-DD`).
pub fn is_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    if parse_decimal(&bytes[..4], 4, 4, 9999, LeadingZero::Allow).is_none() {
        return false;
    }
    let Some(month) = parse_decimal(&bytes[5..7], 2, 2, 12, LeadingZero::Allow) else {
        return false;
    };
    if month == 0 {
        return false;
    }
    let Some(day) = parse_decimal(&bytes[8..10], 2, 2, 31, LeadingZero::Allow) else {
        return false;
    };
    day >= 1 && day <= DAYS_IN_MONTH[(month - 1) as usize]
}

/// Check if a string is a valid RFC 3339 time (`HH:MM:SS`, optional
/// fractional seconds, mandatory `Z` or `±HH:MM` offset).
pub fn is_time(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut pos = 0;

    if !scan_clock(bytes, &mut pos) {
        return false;
    }

    // optional fraction: '.' followed by one or more digits
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == start {
            return false;
        }
    }

    // mandatory timezone designator
    match bytes.get(pos) {
        Some(b'Z' | b'z') => pos + 1 == bytes.len(),
        Some(b'+' | b'-') => {
            pos += 1;
            scan_offset(bytes, &mut pos) && pos == bytes.len()
        }
        _ => false,
    }
}

/// Check if a string is a valid RFC 3339 date-time: full-date, a literal
/// `T`/`t`, then a valid time. No space substitute for the separator.
pub fn is_date_time(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() < 11 || !matches!(bytes[10], b'T' | b't') {
        return false;
    }
    is_date(&input[..10]) && is_time(&input[11..])
}

/// `HH:MM:SS` with hour <= 23, minute <= 59, second <= 60 (leap second).
fn scan_clock(bytes: &[u8], pos: &mut usize) -> bool {
    if scan_decimal(bytes, pos, 2, 2, 23, LeadingZero::Allow).is_none() {
        return false;
    }
    for max in [59, 60] {
        if bytes.get(*pos) != Some(&b':') {
            return false;
        }
        *pos += 1;
        if scan_decimal(bytes, pos, 2, 2, max, LeadingZero::Allow).is_none() {
            return false;
        }
    }
    true
}

/// `HH:MM` numeric offset, hour <= 23, minute <= 59.
fn scan_offset(bytes: &[u8], pos: &mut usize) -> bool {
    if scan_decimal(bytes, pos, 2, 2, 23, LeadingZero::Allow).is_none() {
        return false;
    }
    if bytes.get(*pos) != Some(&b':') {
        return false;
    }
    *pos += 1;
    scan_decimal(bytes, pos, 2, 2, 59, LeadingZero::Allow).is_some()
}

/// Check if a string is a valid ISO 8601 duration.
///
/// `P` followed by `nY nM nD` components in order, optionally `T` plus
/// `nH nM nS` in order (seconds may carry a fraction) — or exclusively the
/// week form `PnW`. At least one designator must follow `P`.
pub fn is_duration(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'P') {
        return false;
    }
    let mut pos = 1;
    let mut any = false;

    // date components, each designator usable at most once and in order
    const DATE_DESIGNATORS: [u8; 3] = [b'Y', b'M', b'D'];
    let mut order = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        if scan_decimal(bytes, &mut pos, 1, 10, u32::MAX, LeadingZero::Allow).is_none() {
            return false;
        }
        let Some(&designator) = bytes.get(pos) else {
            return false;
        };
        if designator == b'W' {
            // week form is mutually exclusive with everything else
            return !any && pos + 1 == bytes.len();
        }
        let Some(idx) = DATE_DESIGNATORS[order..]
            .iter()
            .position(|&d| d == designator)
        else {
            return false;
        };
        order += idx + 1;
        pos += 1;
        any = true;
    }

    if pos == bytes.len() {
        return any;
    }

    // time components after 'T'
    if bytes[pos] != b'T' {
        return false;
    }
    pos += 1;

    const TIME_DESIGNATORS: [u8; 3] = [b'H', b'M', b'S'];
    let mut t_order = 0;
    let mut t_any = false;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        if scan_decimal(bytes, &mut pos, 1, 10, u32::MAX, LeadingZero::Allow).is_none() {
            return false;
        }
        // fraction is legal on the seconds component only
        let mut fractional = false;
        if bytes.get(pos) == Some(&b'.') {
            pos += 1;
            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos == start {
                return false;
            }
            fractional = true;
        }
        let Some(&designator) = bytes.get(pos) else {
            return false;
        };
        if fractional && designator != b'S' {
            return false;
        }
        let Some(idx) = TIME_DESIGNATORS[t_order..]
            .iter()
            .position(|&d| d == designator)
        else {
            return false;
        };
        t_order += idx + 1;
        pos += 1;
        t_any = true;
    }

    t_any && pos == bytes.len()
}
