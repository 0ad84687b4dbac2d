//! Batch processing: date normalization, field cleaning, and validation
//! bookkeeping over a record batch.
//!
//! Every function here is a pure transformation of its input batch; the
//! caller owns any caching of fetched batches. Diagnostics flow out as
//! counters on the result plus `tracing` events, never as panics or errors.

use tracing::{debug, info};

use muni_model::{
    BatchStatistics, CellValue, ColumnMap, DateNormalizationStats, ProcessedBatch,
    ProcessedRecord, Record, Result,
};
use muni_validate::{missing_in_record, validate_required_fields};

use crate::normalization::datetime::{is_valid_date, normalize_date};
use crate::normalization::numeric::clean_numeric;
use crate::normalization::text::clean_text;

/// Replace each record's execution-date cell with its normalized form.
///
/// Unparseable dates become null cells. The returned stats count only
/// non-empty date cells; individual failures are logged at debug level.
pub fn normalize_batch(
    records: &[Record],
    columns: &ColumnMap,
) -> (Vec<Record>, DateNormalizationStats) {
    let mut stats = DateNormalizationStats::default();
    let mut normalized_records = Vec::with_capacity(records.len());

    for record in records {
        if !record.contains(&columns.execution_date) {
            normalized_records.push(record.clone());
            continue;
        }
        let raw = record
            .lookup(&columns.execution_date)
            .map(clean_text)
            .unwrap_or_default();
        let normalized = normalize_date(&raw);
        if !raw.is_empty() {
            stats.total += 1;
            match &normalized {
                Some(value) => {
                    stats.normalized += 1;
                    debug!(original = %raw, normalized = %value, "date normalized");
                }
                None => {
                    stats.failed += 1;
                    debug!(original = %raw, "date could not be normalized");
                }
            }
        }
        let cell = match normalized {
            Some(value) => CellValue::Text(value),
            None => CellValue::Null,
        };
        normalized_records.push(record.with_value(&columns.execution_date, cell));
    }

    info!(
        total = stats.total,
        normalized = stats.normalized,
        failed = stats.failed,
        "date normalization pass complete"
    );
    (normalized_records, stats)
}

/// Run the full pipeline over a raw batch: validate required fields,
/// normalize dates, clean the population field, and accumulate batch
/// statistics.
///
/// Record validity is judged on the raw input (an unparseable date text
/// still counts as a present value); the records carried on the result are
/// the date-normalized copies. Population and date counters accumulate over
/// valid records only.
///
/// # Errors
///
/// Only configuration problems surface as errors (see
/// [`validate_required_fields`]); malformed data never does.
pub fn process_batch(records: &[Record], columns: &ColumnMap) -> Result<ProcessedBatch> {
    let required = columns.required_fields();
    let validation = validate_required_fields(records, &required)?;
    let (normalized, date_stats) = normalize_batch(records, columns);

    let mut batch = ProcessedBatch {
        records: Vec::with_capacity(records.len()),
        validation,
        statistics: BatchStatistics {
            total_records: records.len(),
            ..Default::default()
        },
        date_stats,
    };

    for (record, normalized_record) in records.iter().zip(&normalized) {
        let missing = missing_in_record(record, &required);
        let is_valid = missing.is_empty();
        let errors = missing
            .into_iter()
            .map(|field| format!("missing required field: {field}"))
            .collect();

        let population = record
            .lookup(&columns.population)
            .map(clean_numeric)
            .unwrap_or(0.0);
        let raw_date = record
            .lookup(&columns.execution_date)
            .map(clean_text)
            .unwrap_or_default();
        let has_valid_date = is_valid_date(&raw_date);

        if is_valid {
            batch.statistics.valid_records += 1;
            batch.statistics.total_population += population;
            if has_valid_date {
                batch.statistics.valid_dates += 1;
            } else {
                batch.statistics.invalid_dates += 1;
            }
        } else {
            batch.statistics.invalid_records += 1;
        }

        batch.records.push(ProcessedRecord {
            record: normalized_record.clone(),
            population,
            has_valid_date,
            is_valid,
            errors,
        });
    }

    info!(
        total = batch.statistics.total_records,
        valid = batch.statistics.valid_records,
        invalid = batch.statistics.invalid_records,
        population = batch.statistics.total_population,
        "batch processed"
    );
    Ok(batch)
}
