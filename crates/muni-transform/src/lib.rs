//! Normalization and batch processing for municipal indicator records.
//!
//! - **normalization::datetime**: free-text date parsing to `YYYY-MM-DD`
//! - **normalization::numeric / text**: total field coercion
//! - **pipeline**: whole-batch processing with validation bookkeeping

pub mod normalization;
pub use normalization::datetime;
pub mod pipeline;

// Re-export common functions for external use
pub use normalization::{clean_numeric, clean_text, normalize_date, parse_date};
pub use pipeline::{normalize_batch, process_batch};
