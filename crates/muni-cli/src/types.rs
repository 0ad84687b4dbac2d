use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use muni_aggregate::{FieldStatistics, Indicators, MonthlyBucket};
use muni_model::{BatchStatistics, DateNormalizationStats, ValidationReport};

/// One row of the per-group summary table.
#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub key: String,
    pub count: usize,
    pub total_value: f64,
}

/// Everything the report command produces for one batch.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub source: PathBuf,
    pub validation: ValidationReport,
    pub statistics: BatchStatistics,
    pub date_stats: DateNormalizationStats,
    pub indicators: Indicators,
    pub population: FieldStatistics,
    pub groups: Vec<GroupSummary>,
    pub monthly: BTreeMap<String, MonthlyBucket>,
}
