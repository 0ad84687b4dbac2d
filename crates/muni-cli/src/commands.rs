use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use muni_aggregate::{
    aggregate_by_field, field_statistics, filter_by_date_range, indicator_summary,
    monthly_statistics,
};
use muni_ingest::read_csv_table;
use muni_model::{ColumnMap, ValidationReport};
use muni_transform::pipeline::process_batch;
use muni_validate::validate_required_fields;

use crate::cli::{ReportArgs, ValidateArgs};
use crate::types::{BatchReport, GroupSummary};

pub fn run_report(args: &ReportArgs) -> Result<BatchReport> {
    let columns = load_columns(args.columns.as_deref())?;
    let span = info_span!("report", batch = %args.batch.display());
    let _guard = span.enter();

    let table = read_csv_table(&args.batch)?;
    let mut records = table.records();
    info!(records = records.len(), "batch loaded");

    if let (Some(start), Some(end)) = (&args.start, &args.end) {
        records = filter_by_date_range(&records, &columns.execution_date, start, end);
        info!(records = records.len(), "date-range filter applied");
    }

    let batch = process_batch(&records, &columns).context("process batch")?;

    let group_field = args
        .group_by
        .clone()
        .unwrap_or_else(|| columns.entity.clone());
    let value_field = args
        .value_field
        .clone()
        .unwrap_or_else(|| columns.population.clone());
    let groups = aggregate_by_field(&records, &group_field, Some(&value_field))
        .into_iter()
        .map(|(key, bucket)| GroupSummary {
            key,
            count: bucket.count,
            total_value: bucket.total_value,
        })
        .collect();

    let monthly = monthly_statistics(&batch.records, &columns);
    let population = field_statistics(&records, &columns.population);
    let indicators = indicator_summary(&batch);

    Ok(BatchReport {
        source: args.batch.clone(),
        validation: batch.validation,
        statistics: batch.statistics,
        date_stats: batch.date_stats,
        indicators,
        population,
        groups,
        monthly,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let columns = load_columns(args.columns.as_deref())?;
    let table = read_csv_table(&args.batch)?;
    let records = table.records();
    let report = validate_required_fields(&records, &columns.required_fields())
        .context("validate batch")?;
    Ok(report)
}

fn load_columns(path: Option<&Path>) -> Result<ColumnMap> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read column map {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parse column map {}", path.display()))
        }
        None => Ok(ColumnMap::default()),
    }
}
