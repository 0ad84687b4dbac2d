//! Free-text date normalization to the canonical `YYYY-MM-DD` form.
//!
//! Spreadsheet date cells arrive in whatever shape the person typing them
//! used: day-first numeric forms, Spanish long forms ("15 de marzo de 2024"),
//! two-digit years, dot separators, or spaces around the slashes. This module
//! recognizes each dialect in a fixed order and emits a zero-padded canonical
//! date string; anything unrecognized yields `None` plus a debug diagnostic.
//!
//! The explicit patterns build their output textually and do not cross-check
//! day against month length; a string that already has the canonical shape is
//! trusted verbatim. Strict calendar validation happens only where a real
//! [`NaiveDate`] is required, via [`parse_date`].

use chrono::NaiveDate;
use tracing::debug;

/// Spanish month names and three-letter abbreviations, compared lowercase.
const SPANISH_MONTHS: [(&str, u32); 24] = [
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
    ("ene", 1),
    ("feb", 2),
    ("mar", 3),
    ("abr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("ago", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dic", 12),
];

/// Strict format templates tried in order when no explicit pattern matches.
/// Note that `%y` here follows chrono's own century pivot, not the pivot of
/// the dedicated two-digit-year pattern.
const FALLBACK_FORMATS: [&str; 13] = [
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%Y-%m-%d",
    "%d/%m/%y",
    "%d-%m-%y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d.%m.%Y",
    "%d.%m.%y",
    "%Y.%m.%d",
];

/// Two-digit years below this expand to 20xx, the rest to 19xx.
const TWO_DIGIT_YEAR_PIVOT: u32 = 50;

/// Normalize a free-text date to `YYYY-MM-DD`.
///
/// Patterns are tried first-match-wins in this order:
///
/// 1. empty / whitespace-only → `None`
/// 2. already canonical `YYYY-MM-DD` → returned unchanged
/// 3. `D/M/YYYY` or `D-M-YYYY`
/// 4. `YYYY/M/D` or `YYYY-M-D`
/// 5. `D de <mes> de YYYY`
/// 6. `<mes> D, YYYY`
/// 7. `D <mes> YYYY`
/// 8. `D/M/YY` (two-digit year, pivot 50)
/// 9. `D.M.YYYY`
/// 10. `D / M / YYYY` with whitespace around the slashes
/// 11. the [`FALLBACK_FORMATS`] template list
///
/// Never fails; unparseable input logs a diagnostic and returns `None`.
pub fn normalize_date(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_canonical(trimmed) {
        return Some(trimmed.to_string());
    }

    let normalized = day_first(trimmed, '/')
        .or_else(|| day_first(trimmed, '-'))
        .or_else(|| year_first(trimmed, '/'))
        .or_else(|| year_first(trimmed, '-'))
        .or_else(|| spanish_long_form(trimmed))
        .or_else(|| month_name_first(trimmed))
        .or_else(|| day_month_name(trimmed))
        .or_else(|| two_digit_year(trimmed))
        .or_else(|| day_first(trimmed, '.'))
        .or_else(|| spaced_slashes(trimmed))
        .or_else(|| fallback_formats(trimmed));

    if normalized.is_none() {
        debug!(input = %trimmed, "date did not match any known format");
    }
    normalized
}

/// Normalize and then strictly parse to a calendar date.
///
/// Returns `None` for unparseable input and for shapes that pass the
/// canonical check but are not real dates (e.g. month 99).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let normalized = normalize_date(value)?;
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok()
}

pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Whole days from `start` to `end`; 0 when either side is missing.
pub fn days_between(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => end.signed_duration_since(start).num_days(),
        _ => 0,
    }
}

/// Inclusive range check.
pub fn date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// The dashboard display form, `DD/MM/YYYY`; missing dates render as "N/A".
pub fn format_display_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// The `YYYY-MM` bucket key for monthly aggregation.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Exactly 4 digits, '-', 2 digits, '-', 2 digits. Shape only; component
/// ranges are not checked.
fn is_canonical(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0usize, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&idx| bytes[idx].is_ascii_digit())
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn split3(value: &str, sep: char) -> Option<(&str, &str, &str)> {
    let mut parts = value.split(sep);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second, third))
}

fn month_from_name(name: &str) -> Option<u32> {
    let lowered = name.to_lowercase();
    SPANISH_MONTHS
        .iter()
        .find(|(month, _)| *month == lowered)
        .map(|(_, number)| *number)
}

/// Build `YYYY-MM-DD` from string components, zero-padding month and day.
/// The year string is carried through as written.
fn compose(year: &str, month: &str, day: &str) -> Option<String> {
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    Some(format!("{year}-{month:02}-{day:02}"))
}

fn is_day_part(value: &str) -> bool {
    all_digits(value) && value.len() <= 2
}

fn is_year_part(value: &str) -> bool {
    all_digits(value) && value.len() == 4
}

/// `D<sep>M<sep>YYYY` with a uniform separator.
fn day_first(value: &str, sep: char) -> Option<String> {
    let (day, month, year) = split3(value, sep)?;
    if !(is_day_part(day) && is_day_part(month) && is_year_part(year)) {
        return None;
    }
    compose(year, month, day)
}

/// `YYYY<sep>M<sep>D` with a uniform separator.
fn year_first(value: &str, sep: char) -> Option<String> {
    let (year, month, day) = split3(value, sep)?;
    if !(is_year_part(year) && is_day_part(month) && is_day_part(day)) {
        return None;
    }
    compose(year, month, day)
}

/// `D de <mes> de YYYY`, e.g. "15 de marzo de 2024".
fn spanish_long_form(value: &str) -> Option<String> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let [day, de1, month_name, de2, year] = tokens.as_slice() else {
        return None;
    };
    if !(de1.eq_ignore_ascii_case("de") && de2.eq_ignore_ascii_case("de")) {
        return None;
    }
    if !(is_day_part(day) && is_year_part(year)) {
        return None;
    }
    let month = month_from_name(month_name)?;
    let day: u32 = day.parse().ok()?;
    Some(format!("{year}-{month:02}-{day:02}"))
}

/// `<mes> D, YYYY`, e.g. "marzo 15, 2024".
fn month_name_first(value: &str) -> Option<String> {
    let (head, year) = value.rsplit_once(',')?;
    let year = year.trim();
    if !is_year_part(year) {
        return None;
    }
    let mut tokens = head.split_whitespace();
    let month_name = tokens.next()?;
    let day = tokens.next()?;
    if tokens.next().is_some() || !is_day_part(day) {
        return None;
    }
    let month = month_from_name(month_name)?;
    let day: u32 = day.parse().ok()?;
    Some(format!("{year}-{month:02}-{day:02}"))
}

/// `D <mes> YYYY`, e.g. "15 marzo 2024".
fn day_month_name(value: &str) -> Option<String> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let [day, month_name, year] = tokens.as_slice() else {
        return None;
    };
    if !(is_day_part(day) && is_year_part(year)) {
        return None;
    }
    let month = month_from_name(month_name)?;
    let day: u32 = day.parse().ok()?;
    Some(format!("{year}-{month:02}-{day:02}"))
}

/// `D/M/YY`: the two-digit year expands with a fixed pivot of 50, not the
/// current date.
fn two_digit_year(value: &str) -> Option<String> {
    let (day, month, year) = split3(value, '/')?;
    if !(is_day_part(day) && is_day_part(month) && all_digits(year) && year.len() == 2) {
        return None;
    }
    let two_digit: u32 = year.parse().ok()?;
    let century = if two_digit < TWO_DIGIT_YEAR_PIVOT {
        "20"
    } else {
        "19"
    };
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    Some(format!("{century}{year}-{month:02}-{day:02}"))
}

/// `D / M / YYYY` with arbitrary whitespace around the slashes.
fn spaced_slashes(value: &str) -> Option<String> {
    let (day, month, year) = split3(value, '/')?;
    let (day, month, year) = (day.trim(), month.trim(), year.trim());
    if !(is_day_part(day) && is_day_part(month) && is_year_part(year)) {
        return None;
    }
    compose(year, month, day)
}

fn fallback_formats(value: &str) -> Option<String> {
    FALLBACK_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(value, format)
            .ok()
            .map(|date| date.format("%Y-%m-%d").to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_shape_is_trusted_verbatim() {
        assert!(is_canonical("2024-03-15"));
        assert!(!is_canonical("2024-3-15"));
        assert!(!is_canonical("15/03/2024"));
        // shape check only: component ranges are not validated
        assert_eq!(normalize_date("2024-99-99"), Some("2024-99-99".to_string()));
    }

    #[test]
    fn month_names_resolve_case_insensitively() {
        assert_eq!(month_from_name("Marzo"), Some(3));
        assert_eq!(month_from_name("SEP"), Some(9));
        assert_eq!(month_from_name("brumaire"), None);
    }

    #[test]
    fn spaced_slashes_tolerate_whitespace() {
        assert_eq!(
            normalize_date("15 / 03 / 2024"),
            Some("2024-03-15".to_string())
        );
    }

    #[test]
    fn strict_parse_rejects_shape_only_matches() {
        assert!(parse_date("2024-99-99").is_none());
        assert_eq!(
            parse_date("15/03/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn display_form_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(format_display_date(date), "15/03/2024");
        assert_eq!(format_display_date(None), "N/A");
    }

    #[test]
    fn day_arithmetic() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 12);
        let end = NaiveDate::from_ymd_opt(2025, 3, 20);
        assert_eq!(days_between(start, end), 8);
        assert_eq!(days_between(None, end), 0);
    }
}
