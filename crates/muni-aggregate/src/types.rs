use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use muni_model::Record;

/// One aggregation group: member count, accumulated value, and the member
/// records themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupBucket {
    pub count: usize,
    pub total_value: f64,
    pub records: Vec<Record>,
}

/// Basic statistics over a numeric field. All zeros when no value survives
/// the positive-value filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldStatistics {
    pub count: usize,
    pub sum: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

/// One `YYYY-MM` bucket. The entity set serializes as a sorted list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub activities: usize,
    pub total_population: f64,
    pub entities: BTreeSet<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub activity: String,
    /// Normalized execution date, when one parsed.
    pub date: Option<String>,
    pub population: f64,
}

/// Per-entity rollup for the dashboard's entity pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStats {
    pub activities_count: usize,
    pub total_population: f64,
    pub activities: Vec<ActivitySummary>,
}

/// The dashboard's headline numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    pub total_population: f64,
    pub total_activities: usize,
}
