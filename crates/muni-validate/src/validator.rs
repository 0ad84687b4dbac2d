//! Required-field checks over a record batch.
//!
//! Header names are compared after trimming so that stray spaces in
//! spreadsheet headers do not produce false negatives. All data-quality
//! findings flow out as report data; only a misconfigured required-field
//! list is an error.

use tracing::debug;

use muni_model::{MuniError, Record, RecordIssue, Result, TrimmedLookup, ValidationReport};

/// Validate that every record carries the required columns with non-missing
/// values.
///
/// The batch-level `missing_fields` check is computed against the first
/// record's trimmed header set. A field counts as present in a record only
/// if its trimmed key exists and the value is neither null nor the empty
/// string. An empty batch is invalid with every required field reported
/// missing.
///
/// # Errors
///
/// Returns [`MuniError::Config`] when `required` is empty; that is a
/// programmer error, not a data-quality finding.
pub fn validate_required_fields(
    records: &[Record],
    required: &[String],
) -> Result<ValidationReport> {
    if required.is_empty() {
        return Err(MuniError::Config(
            "required-field list must not be empty".to_string(),
        ));
    }

    let mut report = ValidationReport {
        valid: true,
        missing_fields: Vec::new(),
        invalid_records: Vec::new(),
        total_records: records.len(),
    };

    let Some(first) = records.first() else {
        report.valid = false;
        report.missing_fields = required.to_vec();
        return Ok(report);
    };

    let header_lookup = TrimmedLookup::new(first.keys());
    for field in required {
        if !header_lookup.contains(field) {
            report.missing_fields.push(field.clone());
            report.valid = false;
        }
    }

    for (index, record) in records.iter().enumerate() {
        let missing = missing_in_record(record, required);
        if !missing.is_empty() {
            debug!(index, fields = ?missing, "record is missing required values");
            report.invalid_records.push(RecordIssue {
                index,
                missing_fields: missing,
            });
        }
    }

    Ok(report)
}

/// Required fields a single record lacks (absent key, null, or empty string).
pub fn missing_in_record(record: &Record, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|field| {
            !record
                .lookup(field)
                .is_some_and(|value| !value.is_missing())
        })
        .cloned()
        .collect()
}
