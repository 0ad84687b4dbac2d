//! Aggregation and statistics over indicator record batches.
//!
//! Every operation is stateless and re-derived from its input batch per
//! call; results use ordered maps so repeated runs over the same batch
//! serialize byte-identically.

pub mod dates;
pub mod entity;
pub mod group;
pub mod statistics;
pub mod types;

pub use dates::{filter_by_date_range, monthly_statistics, partition_by_date};
pub use entity::{days_without_incident, entity_statistics, indicator_summary};
pub use group::{UNSPECIFIED, aggregate_by_field};
pub use statistics::field_statistics;
pub use types::{
    ActivitySummary, EntityStats, FieldStatistics, GroupBucket, Indicators, MonthlyBucket,
};
