use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rosterkit_cli::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    if result.activity.is_empty() {
        println!("Activity: (none)");
    } else {
        println!("Activity: {}", result.activity);
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Records"),
        header_cell("Path"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("kit import").fg(Color::Blue),
        Cell::new(result.kit_rows),
        Cell::new(result.output.display()),
    ]);
    table.add_row(vec![
        Cell::new("companion list").fg(Color::Blue),
        Cell::new(result.companion_rows),
        Cell::new(result.group_output.display()),
    ]);
    println!("{table}");

    match result.subscriber_count {
        Some(subscribers) => println!(
            "Companions: {} found, {} already subscribed (of {}), {} kept",
            result.companion_raw,
            result.companion_excluded,
            subscribers,
            result.companion_rows
        ),
        None => println!(
            "Companions: {} found, {} kept (no subscriber exclusion)",
            result.companion_raw, result.companion_rows
        ),
    }
}

pub fn apply_table_style(table: &mut Table) {
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
