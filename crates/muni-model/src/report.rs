use serde::{Deserialize, Serialize};

/// A record that is individually missing required values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordIssue {
    pub index: usize,
    pub missing_fields: Vec<String>,
}

/// Result of checking a batch against its required columns.
///
/// `missing_fields` is the batch-level check, computed against the first
/// record's trimmed header set; `invalid_records` lists records that are
/// individually lacking a required value (absent key, null, or empty string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub missing_fields: Vec<String>,
    pub invalid_records: Vec<RecordIssue>,
    pub total_records: usize,
}

impl ValidationReport {
    pub fn issue_count(&self) -> usize {
        self.invalid_records.len()
    }
}
