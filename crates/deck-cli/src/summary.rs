use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{DeckSummary, ExportResult};

pub fn print_export_summary(result: &ExportResult) {
    println!("Output: {}", result.output_dir.display());
    if let Some(index) = &result.index {
        println!("Index: {}", index.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Deck"),
        header_cell("Label"),
        header_cell("Theme"),
        header_cell("Slides"),
        header_cell("Unknown"),
        header_cell("File"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    let mut total_slides = 0usize;
    let mut total_unknown = 0usize;
    for deck in &result.decks {
        total_slides += deck.slides;
        total_unknown += deck.unknown_slides;
        table.add_row(vec![
            deck_cell(deck),
            Cell::new(deck.label.as_deref().unwrap_or("-")),
            dim_cell(&deck.theme),
            Cell::new(deck.slides),
            count_cell(deck.unknown_slides, Color::Yellow),
            output_cell(deck),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} decks", result.decks.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_slides).add_attribute(Attribute::Bold),
        count_cell(total_unknown, Color::Yellow),
        dim_cell("-"),
    ]);
    println!("{table}");

    let failures: Vec<&DeckSummary> = result
        .decks
        .iter()
        .filter(|deck| deck.error.is_some())
        .collect();
    if !failures.is_empty() {
        println!();
        println!("Errors:");
        for deck in failures {
            println!(
                "  {}: {}",
                deck.source.display(),
                deck.error.as_deref().unwrap_or_default()
            );
        }
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

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn deck_cell(deck: &DeckSummary) -> Cell {
    let name = if deck.name.is_empty() {
        deck.source.display().to_string()
    } else {
        deck.name.clone()
    };
    if deck.error.is_some() {
        Cell::new(name).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(name).add_attribute(Attribute::Bold)
    }
}

fn output_cell(deck: &DeckSummary) -> Cell {
    match (&deck.output, &deck.error) {
        (Some(path), _) => Cell::new(file_name(path)).fg(Color::Green),
        (None, Some(_)) => Cell::new("✗")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        (None, None) => dim_cell("-"),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
