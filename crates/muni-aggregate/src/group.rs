//! Category grouping.

use std::collections::BTreeMap;

use muni_model::Record;
use muni_transform::normalization::{clean_numeric, clean_text};

use crate::types::GroupBucket;

/// Bucket key for records whose grouping field is absent or empty.
pub const UNSPECIFIED: &str = "unspecified";

/// Group records by the cleaned text of `group_field`.
///
/// When `value_field` is given, each bucket also accumulates the cleaned
/// numeric value of that field; otherwise `total_value` stays 0. Records
/// without a usable group value land under [`UNSPECIFIED`]. The result is
/// ordered by key, so identical input yields identical serialized output.
pub fn aggregate_by_field(
    records: &[Record],
    group_field: &str,
    value_field: Option<&str>,
) -> BTreeMap<String, GroupBucket> {
    let mut buckets: BTreeMap<String, GroupBucket> = BTreeMap::new();

    for record in records {
        let key = match record.lookup(group_field) {
            Some(value) if !value.is_missing() => {
                let text = clean_text(value);
                if text.is_empty() {
                    UNSPECIFIED.to_string()
                } else {
                    text
                }
            }
            _ => UNSPECIFIED.to_string(),
        };

        let bucket = buckets.entry(key).or_default();
        bucket.count += 1;
        bucket.records.push(record.clone());
        if let Some(field) = value_field {
            bucket.total_value += record.lookup(field).map(clean_numeric).unwrap_or(0.0);
        }
    }

    buckets
}
