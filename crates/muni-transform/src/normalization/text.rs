//! Text cell cleaning.

use muni_model::CellValue;

use crate::normalization::numeric::format_numeric;

/// Coerce a raw cell to trimmed text; missing values become the empty
/// string and numeric cells are rendered without trailing zeros.
pub fn clean_text(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::Text(text) => text.trim().to_string(),
        CellValue::Number(number) => format_numeric(*number),
    }
}
