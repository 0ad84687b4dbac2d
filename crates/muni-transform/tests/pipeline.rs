//! Integration tests for the batch pipeline.

use muni_model::{CellValue, ColumnMap, Record};
use muni_transform::pipeline::{normalize_batch, process_batch};

fn full_record(entity: &str, activity: &str, date: &str, population: &str) -> Record {
    Record::from_pairs([
        ("Entidad", entity),
        ("Actividad", activity),
        ("Fecha final de ejecución", date),
        ("Población impactada", population),
    ])
}

#[test]
fn normalize_batch_rewrites_date_cells() {
    let columns = ColumnMap::default();
    let records = vec![
        full_record("A", "Taller", "15/03/2024", "100"),
        full_record("B", "Feria", "not a date", "50"),
        full_record("C", "Jornada", "", "10"),
    ];

    let (normalized, stats) = normalize_batch(&records, &columns);

    assert_eq!(
        normalized[0].lookup("Fecha final de ejecución"),
        Some(&CellValue::from("2024-03-15"))
    );
    assert_eq!(
        normalized[1].lookup("Fecha final de ejecución"),
        Some(&CellValue::Null)
    );
    assert_eq!(
        normalized[2].lookup("Fecha final de ejecución"),
        Some(&CellValue::Null)
    );
    // empty cells are not counted as failures
    assert_eq!(stats.total, 2);
    assert_eq!(stats.normalized, 1);
    assert_eq!(stats.failed, 1);
    // input batch untouched
    assert_eq!(
        records[0].lookup("Fecha final de ejecución"),
        Some(&CellValue::from("15/03/2024"))
    );
}

#[test]
fn normalize_batch_skips_records_without_the_date_column() {
    let columns = ColumnMap::default();
    let records = vec![Record::from_pairs([("Entidad", "A")])];
    let (normalized, stats) = normalize_batch(&records, &columns);
    assert_eq!(normalized[0], records[0]);
    assert_eq!(stats.total, 0);
}

#[test]
fn process_batch_accumulates_statistics() {
    let columns = ColumnMap::default();
    let records = vec![
        full_record("A", "Taller", "15/03/2024", "100"),
        full_record("B", "Feria", "not a date", "50"),
        full_record("C", "", "01/04/2024", "25"),
    ];

    let batch = process_batch(&records, &columns).expect("process batch");

    assert_eq!(batch.statistics.total_records, 3);
    assert_eq!(batch.statistics.valid_records, 2);
    assert_eq!(batch.statistics.invalid_records, 1);
    // only valid records contribute population and date counts
    assert_eq!(batch.statistics.total_population, 150.0);
    assert_eq!(batch.statistics.valid_dates, 1);
    assert_eq!(batch.statistics.invalid_dates, 1);

    assert!(batch.records[0].is_valid);
    assert!(batch.records[0].has_valid_date);
    assert!(batch.records[1].is_valid);
    assert!(!batch.records[1].has_valid_date);
    assert!(!batch.records[2].is_valid);
    assert_eq!(
        batch.records[2].errors,
        vec!["missing required field: Actividad"]
    );

    // the carried records are the date-normalized copies
    assert_eq!(
        batch.records[0].record.lookup("Fecha final de ejecución"),
        Some(&CellValue::from("2024-03-15"))
    );
}

#[test]
fn process_batch_is_idempotent_over_identical_input() {
    let columns = ColumnMap::default();
    let records = vec![
        full_record("A", "Taller", "15 de marzo de 2024", "100"),
        full_record("B", "Feria", "03/04/24", "1,5"),
    ];
    let first = process_batch(&records, &columns).expect("first run");
    let second = process_batch(&records, &columns).expect("second run");
    assert_eq!(first.statistics, second.statistics);
    assert_eq!(first.date_stats, second.date_stats);
    assert_eq!(first.records.len(), second.records.len());
    for (a, b) in first.records.iter().zip(&second.records) {
        assert_eq!(a.record, b.record);
        assert_eq!(a.population, b.population);
    }
}

#[test]
fn whitespace_polluted_headers_still_resolve() {
    let columns = ColumnMap::default();
    let records = vec![Record::from_pairs([
        (" Entidad ", "A"),
        ("Actividad", "Taller"),
        ("Fecha final de ejecución ", "15/03/2024"),
        ("\u{feff}Población impactada", "40"),
    ])];

    let batch = process_batch(&records, &columns).expect("process batch");
    assert!(batch.records[0].is_valid);
    assert_eq!(batch.records[0].population, 40.0);
    assert!(batch.records[0].has_valid_date);
    // the original header spelling survives on the derived record
    assert!(
        batch.records[0]
            .record
            .keys()
            .any(|key| key == "Fecha final de ejecución ")
    );
}
