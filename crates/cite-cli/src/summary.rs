use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use cite_map::AnnotatedTable;
use cite_model::ErrorLevel;

/// Print run totals and the error catalog to stderr.
pub fn print_summary(table: &AnnotatedTable) {
    eprintln!("Table type: {}", table.table_type);
    let mut totals = Table::new();
    totals.set_header(vec![
        header_cell("Rows"),
        header_cell("Rows with issues"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut totals);
    for index in 0..4 {
        align_column(&mut totals, index, CellAlignment::Right);
    }
    totals.add_row(vec![
        Cell::new(table.rows.len()),
        count_cell(table.rows_with_issues(), Color::Yellow),
        count_cell(table.error_count(), Color::Red),
        count_cell(table.warning_count(), Color::Yellow),
    ]);
    eprintln!("{totals}");

    if table.is_valid() {
        eprintln!("No errors found.");
        return;
    }

    let mut catalog = Table::new();
    catalog.set_header(vec![
        header_cell("Error"),
        header_cell(""),
        header_cell("Level"),
        header_cell("Label"),
        header_cell("Rows"),
        header_cell("Message"),
    ]);
    apply_catalog_style(&mut catalog);
    align_column(&mut catalog, 1, CellAlignment::Center);
    align_column(&mut catalog, 2, CellAlignment::Center);
    for (error_id, entry) in &table.errors {
        let rows = table.affected_rows(*error_id);
        catalog.add_row(vec![
            Cell::new(error_id),
            swatch_cell(&entry.color),
            level_cell(entry.level),
            Cell::new(&entry.label),
            rows_cell(rows.iter().copied()),
            Cell::new(&entry.message),
        ]);
    }
    eprintln!();
    eprintln!("Errors:");
    eprintln!("{catalog}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn level_cell(level: ErrorLevel) -> Cell {
    match level {
        ErrorLevel::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        ErrorLevel::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn swatch_cell(color: &str) -> Cell {
    match parse_hex(color) {
        Some((r, g, b)) => Cell::new("■").fg(Color::Rgb { r, g, b }),
        None => dim_cell("-"),
    }
}

fn rows_cell(rows: impl Iterator<Item = usize>) -> Cell {
    let rows: Vec<String> = rows.map(|row| row.to_string()).collect();
    if rows.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(rows.join(", "))
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_catalog_style(table: &mut Table) {
    apply_table_style(table);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::UpperBoundary(Width::Fixed(3)),
        ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::LowerBoundary(Width::Fixed(20)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
