//! Date-range filtering and monthly bucketing.

use std::collections::BTreeMap;

use tracing::debug;

use muni_model::{ColumnMap, ProcessedRecord, Record};
use muni_transform::normalization::{clean_text, date_in_range, month_key, parse_date};

use crate::types::MonthlyBucket;

/// Keep records whose `date_field` parses to a date inside `[start, end]`
/// (inclusive).
///
/// If either bound fails to parse, the input is returned unchanged; a bad
/// bound disables the filter rather than erroring.
pub fn filter_by_date_range(
    records: &[Record],
    date_field: &str,
    start: &str,
    end: &str,
) -> Vec<Record> {
    let (Some(start), Some(end)) = (parse_date(start), parse_date(end)) else {
        debug!("unparseable date-range bound, returning batch unfiltered");
        return records.to_vec();
    };

    records
        .iter()
        .filter(|record| {
            record
                .lookup(date_field)
                .map(clean_text)
                .and_then(|text| parse_date(&text))
                .is_some_and(|date| date_in_range(date, start, end))
        })
        .cloned()
        .collect()
}

/// Split a batch into records with and without a parseable date.
pub fn partition_by_date(records: &[Record], date_field: &str) -> (Vec<Record>, Vec<Record>) {
    let mut with_date = Vec::new();
    let mut without_date = Vec::new();
    for record in records {
        let parsed = record
            .lookup(date_field)
            .map(clean_text)
            .and_then(|text| parse_date(&text));
        if parsed.is_some() {
            with_date.push(record.clone());
        } else {
            without_date.push(record.clone());
        }
    }
    (with_date, without_date)
}

/// Group processed records into `YYYY-MM` buckets.
///
/// Records without a valid date are excluded here; callers that need them
/// use [`partition_by_date`]. Each bucket counts activities, sums the
/// cleaned population, and collects the distinct entity names.
pub fn monthly_statistics(
    records: &[ProcessedRecord],
    columns: &ColumnMap,
) -> BTreeMap<String, MonthlyBucket> {
    let mut buckets: BTreeMap<String, MonthlyBucket> = BTreeMap::new();

    for processed in records {
        if !processed.has_valid_date {
            continue;
        }
        let Some(date) = processed
            .record
            .lookup(&columns.execution_date)
            .map(clean_text)
            .and_then(|text| parse_date(&text))
        else {
            continue;
        };

        let bucket = buckets.entry(month_key(date)).or_default();
        bucket.activities += 1;
        bucket.total_population += processed.population;
        let entity = processed
            .record
            .lookup(&columns.entity)
            .map(clean_text)
            .unwrap_or_default();
        bucket.entities.insert(entity);
    }

    buckets
}
