//! Tests for grouping, statistics, and entity rollups.

use chrono::NaiveDate;
use muni_aggregate::{
    UNSPECIFIED, aggregate_by_field, days_without_incident, entity_statistics, field_statistics,
    indicator_summary,
};
use muni_model::{CellValue, ColumnMap, Record};
use muni_transform::pipeline::process_batch;

fn activity_record(entity: &str, date: &str, population: &str) -> Record {
    Record::from_pairs([
        ("Entidad", entity),
        ("Fecha final de ejecución", date),
        ("Población impactada", population),
    ])
}

#[test]
fn groups_by_field_and_sums_value_field() {
    let records = vec![
        activity_record("A", "15/03/2024", "100"),
        activity_record("A", "16/03/2024", "20"),
        activity_record("B", "17/03/2024", "50"),
    ];

    let buckets = aggregate_by_field(&records, "Entidad", Some("Población impactada"));

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets["A"].count, 2);
    assert_eq!(buckets["A"].total_value, 120.0);
    assert_eq!(buckets["A"].records.len(), 2);
    assert_eq!(buckets["B"].count, 1);
    assert_eq!(buckets["B"].total_value, 50.0);
}

#[test]
fn total_value_stays_zero_without_a_value_field() {
    let records = vec![activity_record("A", "15/03/2024", "100")];
    let buckets = aggregate_by_field(&records, "Entidad", None);
    assert_eq!(buckets["A"].count, 1);
    assert_eq!(buckets["A"].total_value, 0.0);
}

#[test]
fn missing_group_values_bucket_under_the_sentinel() {
    let records = vec![
        activity_record("", "15/03/2024", "10"),
        Record::from_pairs([("Población impactada", "5")]),
        activity_record("A", "16/03/2024", "1"),
    ];

    let buckets = aggregate_by_field(&records, "Entidad", Some("Población impactada"));

    assert_eq!(buckets[UNSPECIFIED].count, 2);
    assert_eq!(buckets[UNSPECIFIED].total_value, 15.0);
    assert_eq!(buckets["A"].count, 1);
}

#[test]
fn statistics_exclude_non_positive_values() {
    let records = vec![
        Record::from_pairs([("v", CellValue::Number(10.0))]),
        Record::from_pairs([("v", CellValue::Number(-5.0))]),
        Record::from_pairs([("v", CellValue::Number(0.0))]),
        Record::from_pairs([("v", CellValue::Number(30.0))]),
    ];

    let stats = field_statistics(&records, "v");

    assert_eq!(stats.count, 2);
    assert_eq!(stats.sum, 40.0);
    assert_eq!(stats.average, 20.0);
    assert_eq!(stats.min, 10.0);
    assert_eq!(stats.max, 30.0);
}

#[test]
fn statistics_over_empty_remainder_are_all_zero() {
    let records = vec![
        Record::from_pairs([("v", "abc")]),
        Record::from_pairs([("v", CellValue::Number(-1.0))]),
    ];
    let stats = field_statistics(&records, "v");
    assert_eq!(stats, muni_aggregate::FieldStatistics::default());

    let none: Vec<Record> = Vec::new();
    assert_eq!(
        field_statistics(&none, "v"),
        muni_aggregate::FieldStatistics::default()
    );
}

#[test]
fn entity_rollup_carries_activity_lists() {
    let columns = ColumnMap::default();
    let records = vec![
        Record::from_pairs([
            ("Entidad", "A"),
            ("Actividad", "Taller"),
            ("Fecha final de ejecución", "15/03/2024"),
            ("Población impactada", "100"),
        ]),
        Record::from_pairs([
            ("Entidad", "A"),
            ("Actividad", "Feria"),
            ("Fecha final de ejecución", "not a date"),
            ("Población impactada", "20"),
        ]),
    ];
    let batch = process_batch(&records, &columns).expect("process batch");

    let stats = entity_statistics(&batch.records, &columns);

    assert_eq!(stats.len(), 1);
    let entity = &stats["A"];
    assert_eq!(entity.activities_count, 2);
    assert_eq!(entity.total_population, 120.0);
    assert_eq!(entity.activities[0].activity, "Taller");
    assert_eq!(entity.activities[0].date.as_deref(), Some("2024-03-15"));
    // the unparseable date comes through as absent, not as the raw text
    assert_eq!(entity.activities[1].date, None);
}

#[test]
fn headline_indicators_derive_from_batch_statistics() {
    let columns = ColumnMap::default();
    let records = vec![
        Record::from_pairs([
            ("Entidad", "A"),
            ("Actividad", "Taller"),
            ("Fecha final de ejecución", "15/03/2024"),
            ("Población impactada", "100"),
        ]),
        Record::from_pairs([
            ("Entidad", "B"),
            ("Actividad", "Feria"),
            ("Fecha final de ejecución", "16/03/2024"),
            ("Población impactada", "50"),
        ]),
    ];
    let batch = process_batch(&records, &columns).expect("process batch");

    let indicators = indicator_summary(&batch);
    assert_eq!(indicators.total_activities, 2);
    assert_eq!(indicators.total_population, 150.0);
}

#[test]
fn incident_counter_is_pure_date_arithmetic() {
    let reset = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
    let as_of = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    assert_eq!(days_without_incident(reset, as_of), 20);
    assert_eq!(days_without_incident(reset, reset), 0);
}

/// The end-to-end scenario the dashboard depends on: one parseable and one
/// unparseable date, population summed over both, one bucket per entity.
#[test]
fn end_to_end_batch_scenario() {
    let records = vec![
        activity_record("A", "15/03/2024", "100"),
        activity_record("B", "not a date", "50"),
    ];

    let columns = ColumnMap::default();
    let (normalized, date_stats) =
        muni_transform::pipeline::normalize_batch(&records, &columns);
    assert_eq!(
        normalized[0].lookup("Fecha final de ejecución"),
        Some(&CellValue::from("2024-03-15"))
    );
    assert_eq!(
        normalized[1].lookup("Fecha final de ejecución"),
        Some(&CellValue::Null)
    );
    assert_eq!(date_stats.normalized, 1);
    assert_eq!(date_stats.failed, 1);

    let population = field_statistics(&records, "Población impactada");
    assert_eq!(population.sum, 150.0);

    let buckets = aggregate_by_field(&records, "Entidad", Some("Población impactada"));
    assert_eq!(buckets["A"].count, 1);
    assert_eq!(buckets["B"].count, 1);
}
