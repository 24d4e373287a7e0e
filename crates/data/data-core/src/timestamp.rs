//! Timestamp parsing.
//!
//! Accepts integer keys verbatim and ISO dates (`YYYY-MM-DD`, optionally
//! followed by a time part, which is ignored) as Unix seconds at UTC midnight.

use data_spi::{DataError, Result};

const SECONDS_PER_DAY: i64 = 86_400;

/// Parse a timestamp cell.
pub fn parse_timestamp(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }
    parse_date(raw)
        .map(|days| days * SECONDS_PER_DAY)
        .ok_or_else(|| DataError::ParseError(format!("unrecognized timestamp '{}'", raw)))
}

/// Days since 1970-01-01 for a `YYYY-MM-DD` prefix.
fn parse_date(raw: &str) -> Option<i64> {
    let date = raw.get(..10)?;
    let mut parts = date.split('-');
    let year: i64 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return None;
    }
    Some(days_from_civil(year, month, day))
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// Proleptic Gregorian calendar, era-based day count.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}
