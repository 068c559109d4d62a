//! Terminal summaries for command results.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cellmap_model::{Constraint, ExportConfiguration, MappingKind};
use cellmap_validate::{ImportValidationResult, constraint_summary};

use crate::types::{DiffOutcome, NormalizeOutcome};

pub fn print_validation_summary(file: &Path, result: &ImportValidationResult) {
    match result {
        ImportValidationResult::Success {
            snapshot,
            schema_version,
            ..
        } => {
            println!("Configuration: {}", file.display());
            println!("Version: {}", snapshot.version);
            if let Some(schema_version) = schema_version {
                println!("Schema version: {schema_version}");
            }
            println!("{}", mapping_table(snapshot));
        }
        ImportValidationResult::Failure { errors } => {
            eprintln!("{} failed validation:", file.display());
            for error in errors {
                eprintln!("- {error}");
            }
        }
    }
}

pub fn print_normalize_outcome(outcome: &NormalizeOutcome) {
    // When the result went to stdout the stream stays clean.
    if let Some(path) = &outcome.destination {
        println!("Wrote {} ({})", path.display(), outcome.version);
    }
}

pub fn print_diff_outcome(outcome: &DiffOutcome) {
    if outcome.equal {
        println!(
            "Configurations are semantically equal ({} / {})",
            outcome.left_version, outcome.right_version
        );
    } else {
        println!(
            "Configurations differ ({} vs {})",
            outcome.left_version, outcome.right_version
        );
    }
}

fn mapping_table(snapshot: &ExportConfiguration) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Sheet"),
        header_cell("Cell"),
        header_cell("Label"),
        header_cell("Data type"),
        header_cell("Constraints"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);

    for input in &snapshot.inputs {
        table.add_row(vec![
            kind_cell(input.kind),
            Cell::new(&input.sheet_name),
            Cell::new(&input.cell_id),
            Cell::new(&input.label),
            Cell::new(input.data_type.as_str()),
            constraint_cell(input.constraints.as_ref()),
        ]);
    }
    for output in &snapshot.outputs {
        table.add_row(vec![
            kind_cell(output.kind),
            Cell::new(&output.sheet_name),
            Cell::new(&output.cell_id),
            Cell::new(&output.label),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    table
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

fn kind_cell(kind: MappingKind) -> Cell {
    match kind {
        MappingKind::Input => Cell::new("input")
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        MappingKind::Output => Cell::new("output").fg(Color::Green),
    }
}

fn constraint_cell(constraints: Option<&Constraint>) -> Cell {
    match constraints {
        Some(constraints) => Cell::new(constraint_summary(Some(constraints))),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
