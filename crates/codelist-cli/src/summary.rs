use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use codelist_model::{CodeList, CodeValue, TextValue, ValueError, value_type_label};
use codelist_validate::ValidationReport;

/// Print the validation summary and, when there are errors, the flagged rows.
pub fn print_report(report: &ValidationReport, list: &CodeList) {
    if let Some(title) = &report.title {
        println!("Code list: {title}");
    }
    println!("Items: {}", report.item_count);
    println!("Value type: {}", value_type_label(report.value_type));
    if !report.is_valid() {
        println!("{}", errors_table(report, list));
    }
    println!("{}", summary_line(report));
}

/// One line stating whether the list is valid.
pub fn summary_line(report: &ValidationReport) -> String {
    match report.error_count() {
        0 => "Code list is valid".to_string(),
        1 => "1 row has an error".to_string(),
        count => format!("{count} rows have errors"),
    }
}

/// Table of flagged rows.
pub fn errors_table(report: &ValidationReport, list: &CodeList) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Value"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, error) in report.errors.iter() {
        let value = list
            .get(index)
            .map_or_else(|| dim_cell("-"), |item| value_cell(&item.value));
        table.add_row(vec![Cell::new(index), value, error_cell(error)]);
    }
    table
}

/// Table of items with their texts resolved for `language`.
pub fn items_table(list: &CodeList, language: &str, fallback_language: Option<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Value"),
        header_cell("Label"),
        header_cell("Description"),
        header_cell("Help text"),
    ]);
    apply_items_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, item) in list.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            value_cell(&item.value),
            Cell::new(item.label.resolve(language, fallback_language)),
            text_cell(item.description.as_ref(), language, fallback_language),
            text_cell(item.help_text.as_ref(), language, fallback_language),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_items_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(3)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: &CodeValue) -> Cell {
    match value {
        CodeValue::Str(text) if text.is_empty() => dim_cell("(empty)"),
        CodeValue::Str(text) => Cell::new(text),
        CodeValue::Num(_) => Cell::new(value).fg(Color::Blue),
        CodeValue::Bool(_) => Cell::new(value).fg(Color::Magenta),
    }
}

fn text_cell(text: Option<&TextValue>, language: &str, fallback_language: Option<&str>) -> Cell {
    match text {
        Some(text) => Cell::new(text.resolve(language, fallback_language)),
        None => dim_cell("-"),
    }
}

fn error_cell(error: ValueError) -> Cell {
    Cell::new(error.message()).fg(Color::Red)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
