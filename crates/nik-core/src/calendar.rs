//! Gregorian calendar helpers used by the NIK decoder.
//!
//! Dates are handled as `DD-MM-YYYY` strings because that is the shape the
//! decoder composes from the identifier's birth-date digits. No date crate is
//! involved: validation is plain month-length arithmetic and the current year
//! is derived from `std::time::SystemTime`.

/// Returns `true` if `s` is a real calendar date in `DD-MM-YYYY` form.
///
/// The day and month must be exactly two ASCII digits and the year exactly
/// four. Month must be 1–12 and the day must exist in that month of that
/// year, with February 29 accepted only in leap years.
///
/// # Examples
///
/// ```
/// use nik_core::calendar::is_valid_dmy;
///
/// assert!(is_valid_dmy("29-02-1996"));
/// assert!(!is_valid_dmy("29-02-1997"));
/// assert!(!is_valid_dmy("32-01-1998"));
/// ```
pub fn is_valid_dmy(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'-' || bytes[5] != b'-' {
        return false;
    }
    let (Some(day), Some(month), Some(year)) = (
        parse_u32_fixed(&bytes[0..2]),
        parse_u32_fixed(&bytes[3..5]),
        parse_u32_fixed(&bytes[6..10]),
    ) else {
        return false;
    };

    if !(1..=12).contains(&month) {
        return false;
    }
    day >= 1 && day <= days_in_month(year, month)
}

/// Parses a fixed-width ASCII decimal slice into a `u32`.
///
/// Returns `None` if any byte is not an ASCII digit.
fn parse_u32_fixed(bytes: &[u8]) -> Option<u32> {
    let mut n: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        n = n * 10 + u32::from(b - b'0');
    }
    Some(n)
}

/// Returns the number of days in a given month of a given year.
///
/// Returns `0` for a month outside 1–12.
pub fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the current calendar year (UTC) from the system clock.
///
/// A clock set before the Unix epoch reads as 1970.
pub fn current_year() -> u32 {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    epoch_secs_to_ymd(secs).0
}

/// Converts a Unix timestamp in seconds to `(year, month, day)`.
///
/// Uses the proleptic Gregorian calendar algorithm; accurate for all dates
/// from 1970-01-01 onwards.
pub(crate) fn epoch_secs_to_ymd(secs: u64) -> (u32, u32, u32) {
    let days = u32::try_from(secs / 86_400).unwrap_or(u32::MAX - 719_468);

    // Algorithm from http://howardhinnant.github.io/date_algorithms.html
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };

    (y, m, d)
}
