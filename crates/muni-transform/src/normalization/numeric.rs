//! Numeric cell cleaning.

use muni_model::CellValue;

/// Coerce a raw cell to a float, degrading to 0.0 on anything unparseable.
///
/// Numeric cells pass through as-is. Text cells keep only digits, '.' and
/// ',', then ',' becomes '.', then the result is parsed.
///
/// Known limitation, inherited from the production sheet handling and kept
/// on purpose: mixed thousands/decimal separators collapse into an
/// unparseable string ("1,234.56" → "1.234.56" → 0.0), and a minus sign in
/// text is stripped by the character filter, so negative magnitudes survive
/// only in numeric cells.
pub fn clean_numeric(value: &CellValue) -> f64 {
    match value {
        CellValue::Null => 0.0,
        CellValue::Number(number) => *number,
        CellValue::Text(text) => clean_numeric_text(text),
    }
}

/// The text-cell half of [`clean_numeric`].
pub fn clean_numeric_text(value: &str) -> f64 {
    let kept: String = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == ',')
        .collect();
    kept.replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

/// Format a float without trailing zeros ("10.50" → "10.5", "10.0" → "10").
pub fn format_numeric(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}
