pub mod columns;
pub mod error;
pub mod lookup;
pub mod processing;
pub mod record;
pub mod report;

pub use columns::ColumnMap;
pub use error::{MuniError, Result};
pub use lookup::{TrimmedLookup, normalize_name};
pub use processing::{BatchStatistics, DateNormalizationStats, ProcessedBatch, ProcessedRecord};
pub use record::{CellValue, Record};
pub use report::{RecordIssue, ValidationReport};
