use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use adm_cli::pipeline::RunSummary;
use adm_model::{CoercionReport, DERIVED_COLUMNS, Schema};
use adm_validate::ValidationReport;
use polars::prelude::DataFrame;

pub fn print_summary(result: &RunSummary) {
    println!("Source: {}", result.source.display());
    match &result.load {
        Some(load) => {
            println!("Output: {}", load.path.display());
            println!("SHA-256: {}", load.sha256);
        }
        None => println!("Output: skipped (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Duration (ms)"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let durations = &result.durations;
    table.add_row(vec![
        stage_cell("Extract"),
        Cell::new(result.input_rows),
        Cell::new(result.input_columns),
        Cell::new(durations.extract_ms),
        dim_cell("-"),
    ]);
    let failed = result.coercion.total_failed_cells();
    table.add_row(vec![
        stage_cell("Transform"),
        Cell::new(result.output_rows),
        Cell::new(result.output_columns),
        Cell::new(durations.transform_ms),
        count_cell(failed, "cell(s) set to null", Color::Yellow),
    ]);
    let warnings = result.validation.warning_count();
    table.add_row(vec![
        stage_cell("Validate"),
        Cell::new(result.validation.row_count),
        dim_cell("-"),
        Cell::new(durations.validate_ms),
        count_cell(warnings, "warning(s)", Color::Yellow),
    ]);
    match &result.load {
        Some(load) => table.add_row(vec![
            stage_cell("Load"),
            Cell::new(load.rows),
            Cell::new(result.output_columns),
            Cell::new(durations.load_ms),
            Cell::new(format!("{} bytes", load.bytes)).fg(Color::Green),
        ]),
        None => table.add_row(vec![
            stage_cell("Load"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("skipped"),
        ]),
    };
    println!("{table}");

    print_coercion_table(&result.coercion);
    print_warning_table(&result.validation);
}

fn print_coercion_table(report: &CoercionReport) {
    if report.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Failed"),
        header_cell("Examples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in &report.issues {
        table.add_row(vec![
            Cell::new(&issue.column),
            Cell::new(issue.semantic_type),
            Cell::new(issue.failed_cells).fg(Color::Yellow),
            dim_cell(issue.sample_values.join(", ")),
        ]);
    }
    println!();
    println!("Coercion failures:");
    println!("{table}");
}

fn print_warning_table(report: &ValidationReport) {
    if report.is_clean() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Column"),
        header_cell("Rows"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for warning in &report.warnings {
        table.add_row(vec![
            Cell::new(warning.code()).fg(Color::Yellow),
            Cell::new(warning.column()),
            Cell::new(warning.count()),
            Cell::new(warning.to_string()),
        ]);
    }
    println!();
    println!("Warnings:");
    println!("{table}");
}

pub fn print_schema(schema: &Schema) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Source"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, column) in schema.columns().iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&column.name),
            Cell::new(column.semantic_type),
            dim_cell("csv"),
        ]);
    }
    let derived_types = ["int64", "float64"];
    for (offset, (name, dtype)) in DERIVED_COLUMNS.iter().zip(derived_types).enumerate() {
        table.add_row(vec![
            Cell::new(schema.len() + offset + 1),
            Cell::new(name),
            Cell::new(dtype),
            Cell::new("derived").fg(Color::Cyan),
        ]);
    }
    println!("{table}");
}

pub fn print_inspection(path: &std::path::Path, df: &DataFrame) {
    println!("File: {}", path.display());
    println!("Rows: {}", df.height());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Nulls"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in df.get_columns() {
        table.add_row(vec![
            Cell::new(column.name()),
            Cell::new(column.dtype()),
            count_cell(column.null_count(), "", Color::Yellow),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
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

fn stage_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Highlight non-zero counts; zero is dimmed.
fn count_cell(count: usize, label: &str, color: Color) -> Cell {
    let text = if label.is_empty() {
        count.to_string()
    } else {
        format!("{count} {label}")
    };
    if count > 0 {
        Cell::new(text).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(text)
    }
}
