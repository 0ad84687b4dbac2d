//! Per-entity rollups and headline indicators.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use muni_model::{CellValue, ColumnMap, ProcessedBatch, ProcessedRecord};
use muni_transform::normalization::{clean_text, days_between};

use crate::group::UNSPECIFIED;
use crate::types::{ActivitySummary, EntityStats, Indicators};

/// Roll processed records up per entity: activity count, total population,
/// and the activity list the entity pages render.
pub fn entity_statistics(
    records: &[ProcessedRecord],
    columns: &ColumnMap,
) -> BTreeMap<String, EntityStats> {
    let mut stats: BTreeMap<String, EntityStats> = BTreeMap::new();

    for processed in records {
        let entity = match processed.record.lookup(&columns.entity) {
            Some(value) if !value.is_missing() => clean_text(value),
            _ => UNSPECIFIED.to_string(),
        };

        let entry = stats.entry(entity).or_default();
        entry.activities_count += 1;
        entry.total_population += processed.population;
        entry.activities.push(ActivitySummary {
            activity: processed
                .record
                .lookup(&columns.activity)
                .map(clean_text)
                .unwrap_or_default(),
            date: processed
                .record
                .lookup(&columns.execution_date)
                .and_then(CellValue::as_text)
                .map(ToString::to_string),
            population: processed.population,
        });
    }

    stats
}

/// The dashboard's headline numbers for one batch.
pub fn indicator_summary(batch: &ProcessedBatch) -> Indicators {
    Indicators {
        total_population: batch.statistics.total_population,
        total_activities: batch.statistics.total_records,
    }
}

/// Days elapsed since the incident counter was last reset. The reference
/// date is a parameter so the computation stays deterministic; the caller
/// supplies "today".
pub fn days_without_incident(reset: NaiveDate, as_of: NaiveDate) -> i64 {
    days_between(Some(reset), Some(as_of))
}
