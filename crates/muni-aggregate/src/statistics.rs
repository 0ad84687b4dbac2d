//! Numeric field statistics.

use muni_model::Record;
use muni_transform::normalization::clean_numeric;

use crate::types::FieldStatistics;

/// Count/sum/average/min/max of a numeric field across a record set.
///
/// Values are cleaned with [`clean_numeric`] and only strictly positive
/// values enter the computation; zeros (the degraded form of every
/// unparseable cell) and negatives are excluded. An empty remainder yields
/// the all-zero result, not an error.
pub fn field_statistics(records: &[Record], numeric_field: &str) -> FieldStatistics {
    let values: Vec<f64> = records
        .iter()
        .map(|record| record.lookup(numeric_field).map(clean_numeric).unwrap_or(0.0))
        .filter(|value| *value > 0.0)
        .collect();

    if values.is_empty() {
        return FieldStatistics::default();
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    FieldStatistics {
        count,
        sum,
        average: sum / count as f64,
        min,
        max,
    }
}
