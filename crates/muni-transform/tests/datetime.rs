//! Tests for date normalization.

use muni_transform::datetime::{normalize_date, parse_date};
use proptest::prelude::{prop_assert_eq, proptest};

fn norm(value: &str) -> Option<String> {
    normalize_date(value)
}

#[test]
fn canonical_input_is_identity() {
    assert_eq!(norm("2024-03-15"), Some("2024-03-15".to_string()));
    assert_eq!(norm("1999-12-31"), Some("1999-12-31".to_string()));
}

#[test]
fn day_first_numeric_forms() {
    assert_eq!(norm("15/03/2024"), Some("2024-03-15".to_string()));
    assert_eq!(norm("15-03-2024"), Some("2024-03-15".to_string()));
    assert_eq!(norm("5/3/2024"), Some("2024-03-05".to_string()));
}

#[test]
fn year_first_numeric_forms() {
    assert_eq!(norm("2024/03/15"), Some("2024-03-15".to_string()));
    assert_eq!(norm("2024-3-5"), Some("2024-03-05".to_string()));
}

#[test]
fn spanish_long_form() {
    assert_eq!(norm("15 de marzo de 2024"), Some("2024-03-15".to_string()));
    assert_eq!(norm("1 de Enero de 2023"), Some("2023-01-01".to_string()));
    assert_eq!(norm("15 de brumario de 2024"), None);
}

#[test]
fn month_name_first_form() {
    assert_eq!(norm("marzo 15, 2024"), Some("2024-03-15".to_string()));
    assert_eq!(norm("Diciembre 3,2022"), Some("2022-12-03".to_string()));
}

#[test]
fn day_month_name_form() {
    assert_eq!(norm("15 marzo 2024"), Some("2024-03-15".to_string()));
    assert_eq!(norm("9 sep 2024"), Some("2024-09-09".to_string()));
}

#[test]
fn two_digit_years_pivot_at_fifty() {
    assert_eq!(norm("15/03/24"), Some("2024-03-15".to_string()));
    assert_eq!(norm("15/03/49"), Some("2049-03-15".to_string()));
    assert_eq!(norm("15/03/50"), Some("1950-03-15".to_string()));
    assert_eq!(norm("15/03/75"), Some("1975-03-15".to_string()));
}

#[test]
fn dot_separated_form() {
    assert_eq!(norm("15.03.2024"), Some("2024-03-15".to_string()));
}

#[test]
fn whitespace_around_slashes() {
    assert_eq!(norm("15 / 03 / 2024"), Some("2024-03-15".to_string()));
    assert_eq!(norm("  15/03/2024  "), Some("2024-03-15".to_string()));
}

#[test]
fn unparseable_input_yields_none() {
    assert_eq!(norm(""), None);
    assert_eq!(norm("   "), None);
    assert_eq!(norm("not a date"), None);
    assert_eq!(norm("15/03"), None);
    assert_eq!(norm("99/99"), None);
}

#[test]
fn output_is_always_zero_padded() {
    assert_eq!(norm("1/1/2024"), Some("2024-01-01".to_string()));
    assert_eq!(norm("2024/1/1"), Some("2024-01-01".to_string()));
    assert_eq!(norm("3 de mayo de 2024"), Some("2024-05-03".to_string()));
}

#[test]
fn fallback_formats_cover_english_month_names() {
    assert_eq!(norm("15 March 2024"), Some("2024-03-15".to_string()));
    assert_eq!(norm("Mar 15, 2024"), Some("2024-03-15".to_string()));
}

#[test]
fn strict_parse_requires_a_real_calendar_date() {
    assert!(parse_date("31/02/2024").is_none());
    assert!(parse_date("15/03/2024").is_some());
}

proptest! {
    #[test]
    fn canonical_shape_normalizes_to_itself(year in 1000u32..=9999, month in 0u32..=99, day in 0u32..=99) {
        let canonical = format!("{year:04}-{month:02}-{day:02}");
        prop_assert_eq!(normalize_date(&canonical), Some(canonical.clone()));
    }
}
