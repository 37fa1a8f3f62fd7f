use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use qti_core::batch_report;
use qti_model::{Severity, ValidationResult, ValidationStatus};

use crate::types::{ConvertResult, DetectResult, GenerateResult, ValidateResult};

pub fn print_detect(result: &DetectResult) {
    println!("Input: {}", result.input.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Column")]);
    apply_table_style(&mut table);

    let resolved = result.mapping.resolved_roles();
    for role in [
        "question",
        "answer",
        "type",
        "difficulty",
        "solution",
        "points",
        "subject",
        "topic",
        "tolerance",
        "order",
    ] {
        let column = resolved
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, column)| *column);
        table.add_row(vec![
            Cell::new(role).add_attribute(Attribute::Bold),
            column.map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    let options = if result.mapping.option_cols.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(result.mapping.option_cols.join(", "))
    };
    table.add_row(vec![Cell::new("options").add_attribute(Attribute::Bold), options]);
    println!("{table}");

    if !result.unclaimed.is_empty() {
        println!("Unclaimed columns: {}", result.unclaimed.join(", "));
    }
}

pub fn print_validation(result: &ValidateResult) {
    println!("Input: {}", result.input.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("ID"),
        header_cell("Type"),
        header_cell("Status"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);

    for row in &result.results {
        table.add_row(vec![
            Cell::new(row.row_number),
            Cell::new(&row.row_id),
            Cell::new(row.detected_type.as_str()),
            status_cell(row.status),
            count_cell(row.error_count, Color::Red),
            count_cell(row.warning_count, Color::Yellow),
        ]);
    }
    let summary = &result.summary;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!(
            "{} valid / {} caution / {} rejected",
            summary.valid, summary.caution, summary.rejected
        ))
        .add_attribute(Attribute::Bold),
        count_cell(
            result.results.iter().map(|r| r.error_count).sum(),
            Color::Red,
        ),
        count_cell(
            result.results.iter().map(|r| r.warning_count).sum(),
            Color::Yellow,
        ),
    ]);
    println!("{table}");
    print_issue_table(&result.results);
}

fn print_issue_table(results: &[ValidationResult]) {
    let issues: Vec<_> = results
        .iter()
        .flat_map(|row| row.issues().map(move |issue| (row, issue)))
        .collect();
    if issues.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for (row, issue) in issues {
        table.add_row(vec![
            Cell::new(row.row_number),
            severity_cell(issue.level),
            Cell::new(&issue.field),
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn print_convert(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    match &result.output_dir {
        Some(dir) => println!("Output: {}", dir.display()),
        None => println!("Output: (dry run)"),
    }
    if result.run.fallbacks > 0 {
        println!(
            "Rendered by row converter after strict builder refusal: {}",
            result.run.fallbacks
        );
    }
    println!();
    println!("{}", batch_report(&result.run.summary));
}

pub fn print_generation(result: &GenerateResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    println!("Files written: {}", result.written.len());
    println!();
    println!("{}", batch_report(&result.run.summary));
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ]);
    }
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(70)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: ValidationStatus) -> Cell {
    match status {
        ValidationStatus::Valid => Cell::new(status.label()).fg(Color::Green),
        ValidationStatus::Caution => Cell::new(status.label()).fg(Color::Yellow),
        ValidationStatus::Rejected => Cell::new(status.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Critical => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
