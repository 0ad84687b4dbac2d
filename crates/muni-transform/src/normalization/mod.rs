//! Normalization functions for indicator record processing.
//!
//! - **datetime**: free-text date parsing to canonical `YYYY-MM-DD`
//! - **numeric**: total numeric coercion (unparseable → 0.0)
//! - **text**: trimmed text coercion (missing → empty string)

pub mod datetime;
pub mod numeric;
pub mod text;

// Re-export commonly used items
pub use datetime::{
    date_in_range, days_between, format_display_date, is_valid_date, month_key, normalize_date,
    parse_date,
};
pub use numeric::{clean_numeric, clean_numeric_text, format_numeric};
pub use text::clean_text;
