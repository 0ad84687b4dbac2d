use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::report::ValidationReport;

/// One record after cleaning: the date-normalized copy plus the derived
/// fields the dashboard consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub record: Record,
    pub population: f64,
    pub has_valid_date: bool,
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Batch-level counters accumulated while processing.
///
/// Date counters cover valid records only; records already missing required
/// fields are tallied as invalid without inspecting their dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub total_records: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    pub total_population: f64,
    pub valid_dates: usize,
    pub invalid_dates: usize,
}

/// Outcome counters for one date-normalization pass over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DateNormalizationStats {
    /// Non-empty date cells seen.
    pub total: usize,
    pub normalized: usize,
    pub failed: usize,
}

/// Everything the pipeline produces for one batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedBatch {
    pub records: Vec<ProcessedRecord>,
    pub validation: ValidationReport,
    pub statistics: BatchStatistics,
    pub date_stats: DateNormalizationStats,
}
