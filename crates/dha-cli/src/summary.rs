use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    if result.dry_run {
        println!("Dry run: no files written");
    } else {
        println!("Output: {}", result.output_dir.display());
        for file in &result.files {
            println!("- {}", file.display());
        }
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Records"),
        header_cell("Issues"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        dataset_cell("Population Registry"),
        Cell::new(result.registry_rows),
        count_cell(result.summary.registry.total()),
    ]);
    table.add_row(vec![
        dataset_cell("DHA Applications"),
        Cell::new(result.application_rows),
        count_cell(result.summary.applications.total()),
    ]);
    println!("{table}");

    print_issue_table(result);

    if let Some(mean) = result.summary.applications.mean_valid_processing_days {
        println!("Mean valid processing days: {mean:.1}");
    }
}

fn print_issue_table(result: &GenerateResult) {
    let registry = &result.summary.registry;
    let applications = &result.summary.applications;
    let rows: [(&str, &str, usize); 11] = [
        ("Registry", "Duplicate SA ID numbers", registry.duplicates),
        ("Registry", "Missing values", registry.missing_values),
        ("Registry", "Invalid postal codes", registry.invalid_postal_codes),
        ("Registry", "Future record dates", registry.future_dates),
        ("Registry", "Inconsistent formatting", registry.inconsistent_formatting),
        ("Applications", "Duplicate applications", applications.duplicate_applications),
        ("Applications", "Missing status", applications.missing_status),
        ("Applications", "Province/branch mismatches", applications.province_mismatches),
        ("Applications", "Invalid processing days", applications.invalid_processing_days),
        ("Applications", "Invalid date sequences", applications.invalid_dates),
        ("Applications", "Orphan records", result.summary.orphan_records),
    ];

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Injected Issue"),
        header_cell("Count"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (dataset, issue, count) in rows {
        table.add_row(vec![
            dataset_cell(dataset),
            Cell::new(issue),
            count_cell(count),
        ]);
    }
    println!();
    println!("Injected issues:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn dataset_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
