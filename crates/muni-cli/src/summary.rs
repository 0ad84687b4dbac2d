use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use muni_model::ValidationReport;

use crate::types::BatchReport;

pub fn print_report(report: &BatchReport) {
    println!("Batch: {}", report.source.display());
    println!(
        "Records: {} ({} valid, {} invalid)",
        report.statistics.total_records,
        report.statistics.valid_records,
        report.statistics.invalid_records
    );
    println!(
        "Dates: {} normalized, {} failed (of {} non-empty)",
        report.date_stats.normalized, report.date_stats.failed, report.date_stats.total
    );
    println!(
        "Population impacted: {}",
        report.indicators.total_population
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Activities"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_count = 0usize;
    let mut total_value = 0f64;
    for group in &report.groups {
        total_count += group.count;
        total_value += group.total_value;
        table.add_row(vec![
            Cell::new(&group.key).fg(Color::Blue),
            Cell::new(group.count),
            Cell::new(group.total_value),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_count).add_attribute(Attribute::Bold),
        Cell::new(total_value).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !report.monthly.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Month"),
            header_cell("Activities"),
            header_cell("Population"),
            header_cell("Entities"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        for (month, bucket) in &report.monthly {
            let entities: Vec<&str> = bucket.entities.iter().map(String::as_str).collect();
            table.add_row(vec![
                Cell::new(month).fg(Color::Blue),
                Cell::new(bucket.activities),
                Cell::new(bucket.total_population),
                Cell::new(entities.join(", ")),
            ]);
        }
        println!();
        println!("By month:");
        println!("{table}");
    }

    print_validation(&report.validation);
}

pub fn print_validation(report: &ValidationReport) {
    if report.valid && report.invalid_records.is_empty() {
        println!("Validation: ok ({} records)", report.total_records);
        return;
    }
    if !report.missing_fields.is_empty() {
        eprintln!("Missing required columns:");
        for field in &report.missing_fields {
            eprintln!("- {field}");
        }
    }
    if !report.invalid_records.is_empty() {
        eprintln!(
            "Records missing required values: {}",
            report.invalid_records.len()
        );
        for issue in &report.invalid_records {
            eprintln!(
                "- record {}: {}",
                issue.index + 1,
                issue.missing_fields.join(", ")
            );
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
