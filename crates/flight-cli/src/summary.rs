use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::DetectResult;

pub fn print_json_summary(result: &DetectResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize summary")?;
    println!("{json}");
    Ok(())
}

pub fn print_summary(result: &DetectResult) {
    let summary = &result.summary;
    println!("Input: {}", result.input_path.display());
    if result.dry_run {
        println!("Dry run: no files written");
    } else {
        println!(
            "{} and {} were generated successfully",
            result.output_path.display(),
            result.errors_path.display()
        );
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        outcome_cell("Accepted", Color::Green),
        count_cell(summary.accepted, Color::Green),
    ]);
    table.add_row(vec![
        detail_cell("IATA"),
        count_cell(summary.iata, Color::Green),
    ]);
    table.add_row(vec![
        detail_cell("ICAO"),
        count_cell(summary.icao, Color::Green),
    ]);
    if summary.undefined > 0 {
        table.add_row(vec![
            detail_cell("Undefined"),
            count_cell(summary.undefined, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        outcome_cell("Rejected", Color::Red),
        count_cell(summary.rejected, Color::Red),
    ]);
    for (kind, count) in &summary.failures {
        table.add_row(vec![detail_cell(kind), count_cell(*count, Color::Red)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
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
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn outcome_cell(label: &str, color: Color) -> Cell {
    Cell::new(label).fg(color).add_attribute(Attribute::Bold)
}

fn detail_cell(label: &str) -> Cell {
    Cell::new(format!("  -> {label}")).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
