//! Display formatting for dashboard values
//!
//! Pure helpers that turn raw numbers and dates into the strings widgets
//! render. All functions are total over well-formed inputs; only string
//! date parsing can fail.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Default date pattern, renders as "Jan 20, 2024".
pub const DEFAULT_DATE_PATTERN: &str = "%b %d, %Y";

/// Errors from formatting operations that accept untrusted input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A date-like string could not be parsed
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Round to a fixed number of decimals, half away from zero.
///
/// `format!("{:.1}")` alone rounds ties to even, which turns 5.25 into
/// "5.2"; display strings are expected to show "5.3".
fn round_decimals(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Abbreviate a number for compact display.
///
/// Values of a million or more render with one decimal and an "M" suffix,
/// thousands with a "K" suffix, and anything below 1000 as a plain integer.
///
/// # Examples
/// - `format_number(2_500_000.0)` -> "2.5M"
/// - `format_number(45_000.0)` -> "45.0K"
/// - `format_number(999.0)` -> "999"
pub fn format_number(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", round_decimals(n / 1_000_000.0, 1))
    } else if n >= 1_000.0 {
        format!("{:.1}K", round_decimals(n / 1_000.0, 1))
    } else {
        format!("{}", n as i64)
    }
}

/// Format an amount as a currency string with thousands grouping and two
/// decimals, e.g. `format_currency(45231.89, "USD")` -> "$45,231.89".
///
/// Unknown currency codes fall back to a "CODE amount" prefix form.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let grouped = group_thousands(whole);
    let body = format!("{}.{:02}", grouped, frac);

    let with_symbol = match currency {
        "USD" => format!("${}", body),
        "EUR" => format!("\u{20ac}{}", body),
        "GBP" => format!("\u{a3}{}", body),
        other => format!("{} {}", other, body),
    };

    if negative {
        format!("-{}", with_symbol)
    } else {
        with_symbol
    }
}

/// Insert comma separators into a whole number ("45231" -> "45,231").
fn group_thousands(mut n: u64) -> String {
    let mut groups: Vec<String> = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

/// Format a signed percentage with an explicit sign prefix.
///
/// Non-negative values get a "+" prefix. Callers that render a separate
/// trend glyph pass the absolute value and keep the sign semantics
/// themselves; the signed contract stays intact for everyone else.
///
/// # Examples
/// - `format_percentage(5.25, 1)` -> "+5.3%"
/// - `format_percentage(-5.25, 1)` -> "-5.3%"
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let rounded = round_decimals(value, decimals);
    format!("{:+.*}%", decimals, rounded)
}

/// Format a file size for the media library ("2.4 MB", "45.0 KB").
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1000.0;
    const MB: f64 = KB * 1000.0;
    let bytes = bytes as f64;
    if bytes >= MB {
        format!("{:.1} MB", round_decimals(bytes / MB, 1))
    } else if bytes >= KB {
        format!("{:.1} KB", round_decimals(bytes / KB, 1))
    } else {
        format!("{} B", bytes as u64)
    }
}

/// Format a date with a chrono strftime pattern.
///
/// See [`DEFAULT_DATE_PATTERN`] for the house default.
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    date.format(pattern).to_string()
}

/// Parse a date-like string and format it with the given pattern.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates. Anything
/// else is an [`FormatError::InvalidDate`]; malformed input is never
/// silently coerced.
pub fn format_date_str(date: &str, pattern: &str) -> Result<String, FormatError> {
    let parsed = parse_date(date)?;
    Ok(format_date(&parsed, pattern))
}

/// Parse a date-like string into a UTC timestamp.
pub fn parse_date(date: &str) -> Result<DateTime<Utc>, FormatError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        if let Some(dt) = d.and_hms_opt(0, 0, 0) {
            return Ok(DateTime::from_naive_utc_and_offset(dt, Utc));
        }
    }
    Err(FormatError::InvalidDate(date.to_string()))
}

/// Render a human relative duration with a directional suffix.
///
/// `now` is passed explicitly so call sites stay deterministic under test.
///
/// # Examples
/// - five minutes in the past -> "5 minutes ago"
/// - two days in the future -> "in 2 days"
/// - under half a minute either way -> "just now"
pub fn format_relative_time(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(*then);
    let past = delta >= chrono::Duration::zero();
    let secs = delta.num_seconds().unsigned_abs();

    if secs < 30 {
        return "just now".to_string();
    }

    let (count, unit) = if secs < 60 * 60 {
        ((secs / 60).max(1), "minute")
    } else if secs < 60 * 60 * 24 {
        (secs / (60 * 60), "hour")
    } else if secs < 60 * 60 * 24 * 30 {
        (secs / (60 * 60 * 24), "day")
    } else if secs < 60 * 60 * 24 * 365 {
        (secs / (60 * 60 * 24 * 30), "month")
    } else {
        (secs / (60 * 60 * 24 * 365), "year")
    };

    let plural = if count == 1 { "" } else { "s" };
    if past {
        format!("{} {}{} ago", count, unit, plural)
    } else {
        format!("in {} {}{}", count, unit, plural)
    }
}
