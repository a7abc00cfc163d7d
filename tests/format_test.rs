//! Display formatting contract tests.

use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use pulse::format::{
    format_bytes, format_currency, format_date_str, format_number, format_percentage,
    format_relative_time, FormatError, DEFAULT_DATE_PATTERN,
};

// ============================================================================
// Number abbreviation
// ============================================================================

#[test]
fn test_number_abbreviation_tiers() {
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(1500.0), "1.5K");
    assert_eq!(format_number(2_500_000.0), "2.5M");
}

#[test]
fn test_values_under_a_thousand_have_no_decimals() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(7.0), "7");
    assert_eq!(format_number(999.4), "999");
}

#[test]
fn test_boundary_values_pick_up_suffixes() {
    assert_eq!(format_number(1000.0), "1.0K");
    assert_eq!(format_number(1_000_000.0), "1.0M");
}

// ============================================================================
// Percentages
// ============================================================================

#[test]
fn test_percentage_signs() {
    assert_eq!(format_percentage(5.25, 1), "+5.3%");
    assert_eq!(format_percentage(-5.25, 1), "-5.3%");
    assert_eq!(format_percentage(0.0, 1), "+0.0%");
}

#[test]
fn test_percentage_decimal_control() {
    assert_eq!(format_percentage(20.1, 1), "+20.1%");
    assert_eq!(format_percentage(20.456, 2), "+20.46%");
    assert_eq!(format_percentage(20.456, 0), "+20%");
}

// ============================================================================
// Currency
// ============================================================================

#[test]
fn test_currency_grouping_and_symbols() {
    assert_eq!(format_currency(45231.89, "USD"), "$45,231.89");
    assert_eq!(format_currency(999.9, "USD"), "$999.90");
    assert_eq!(format_currency(1234.0, "EUR"), "\u{20ac}1,234.00");
    assert_eq!(format_currency(5.0, "JPY"), "JPY 5.00");
}

// ============================================================================
// Dates
// ============================================================================

#[test]
fn test_date_strings_parse_or_fail_loudly() {
    assert_eq!(
        format_date_str("2024-01-20", DEFAULT_DATE_PATTERN).unwrap(),
        "Jan 20, 2024"
    );
    assert_eq!(
        format_date_str("2024-01-20T10:30:00+00:00", DEFAULT_DATE_PATTERN).unwrap(),
        "Jan 20, 2024"
    );
    // Malformed input is an error, never a silently coerced date
    assert!(matches!(
        format_date_str("20/01/2024", DEFAULT_DATE_PATTERN),
        Err(FormatError::InvalidDate(_))
    ));
}

#[test]
fn test_relative_time_directional_suffixes() {
    let now = Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap();

    assert_eq!(
        format_relative_time(&(now - Duration::minutes(3)), &now),
        "3 minutes ago"
    );
    assert_eq!(
        format_relative_time(&(now - Duration::hours(5)), &now),
        "5 hours ago"
    );
    assert_eq!(
        format_relative_time(&(now + Duration::days(2) + Duration::hours(1)), &now),
        "in 2 days"
    );
    assert_eq!(format_relative_time(&now, &now), "just now");
}

// ============================================================================
// Byte sizes
// ============================================================================

#[test]
fn test_byte_sizes() {
    assert_eq!(format_bytes(45_000), "45.0 KB");
    assert_eq!(format_bytes(2_400_000), "2.4 MB");
    assert_eq!(format_bytes(512), "512 B");
}
