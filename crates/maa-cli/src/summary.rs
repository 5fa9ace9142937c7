//! Human-readable rendering of preview reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use maa_cli::pipeline::{FieldPreview, PreviewReport};

pub fn print_preview(report: &PreviewReport) {
    println!("File: {}", report.filename);
    println!(
        "Rows: {} read, {} after cleaning ({} empty, {} duplicate removed)",
        report.rows_read,
        report.rows_after_cleaning,
        report.clean.empty_rows_removed,
        report.clean.duplicate_rows_removed,
    );
    println!("Source columns: {}", report.source_columns.join(", "));

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Source Column"),
        header_cell("Samples"),
        header_cell("Status"),
    ]);
    for field in &report.fields {
        table.add_row(vec![
            field_cell(field),
            Cell::new(field.source.as_deref().unwrap_or("-")),
            Cell::new(field.samples.join(", ")),
            status_cell(field),
        ]);
    }
    println!("{table}");

    if report.validation.pass {
        println!("PASS: all required fields present");
    } else {
        println!("FAIL:");
        for message in report.validation.messages() {
            println!("- {message}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn field_cell(field: &FieldPreview) -> Cell {
    let label = if field.required {
        format!("{} *", field.canonical)
    } else {
        field.canonical.clone()
    };
    Cell::new(label)
}

fn status_cell(field: &FieldPreview) -> Cell {
    match (&field.source, &field.closest) {
        (Some(_), _) => Cell::new("mapped").fg(Color::Green),
        (None, Some(closest)) => Cell::new(format!(
            "not found (did you mean '{}'?)",
            closest.column
        ))
        .fg(if field.required {
            Color::Red
        } else {
            Color::Yellow
        }),
        (None, None) => Cell::new("not found").fg(if field.required {
            Color::Red
        } else {
            Color::Yellow
        }),
    }
}
