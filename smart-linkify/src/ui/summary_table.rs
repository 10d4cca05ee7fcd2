// smart-linkify/src/ui/summary_table.rs
//! Tables printed by `scan` and `presets list`.
//! License: MIT OR APACHE 2.0

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use smart_linkify_core::LinkifySummaryItem;

fn new_table(styled: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if styled { UTF8_FULL } else { ASCII_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header(text: &str, styled: bool) -> Cell {
    if styled {
        Cell::new(text.bold().to_string())
    } else {
        Cell::new(text)
    }
}

/// One row per entity kind: kind, occurrence count and the linked texts.
pub fn build_summary_table(summary: &[LinkifySummaryItem], styled: bool) -> Table {
    let mut table = new_table(styled);
    table.set_header(vec![header("Kind", styled), header("Occurrences", styled), header("Texts", styled)]);
    for item in summary {
        let kind = if styled { item.kind.as_str().cyan().to_string() } else { item.kind.to_string() };
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(item.occurrences),
            Cell::new(item.original_texts.join("\n")),
        ]);
    }
    table
}

/// One row per preset: name and description.
pub fn build_presets_table(presets: &[(&str, &str)], styled: bool) -> Table {
    let mut table = new_table(styled);
    table.set_header(vec![header("Preset", styled), header("Description", styled)]);
    for (name, description) in presets {
        let name = if styled { name.green().to_string() } else { name.to_string() };
        table.add_row(vec![Cell::new(name), Cell::new(*description)]);
    }
    table
}
