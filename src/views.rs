//! Format inventory records as text or JSON.

use crate::record::Record;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format a record list as a human-readable table.
pub fn format_records_text(title: &str, records: &[Record]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(title)));
    if records.is_empty() {
        out.push_str("No records.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Name", "Quantity", "Price", "Stock"]);
    for record in records {
        let stock = if record.is_low_stock() { "LOW" } else { "ok" };
        table.add_row(vec![
            record.id.to_string(),
            record.name.clone(),
            record.quantity.to_string(),
            format!("{:.2}", record.price),
            stock.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    let low_count = records.iter().filter(|r| r.is_low_stock()).count();
    out.push_str(&format!(
        "Total: {} records, {} low stock.\n",
        records.len(),
        low_count
    ));
    out
}

/// Format a single record as a detail line.
pub fn format_record_text(record: &Record) -> String {
    record.display_line()
}

#[derive(Serialize)]
struct RecordListOutput<'a> {
    records: &'a [Record],
    total: usize,
    low_stock_count: usize,
}

/// Format a record list as pretty JSON.
pub fn format_records_json(records: &[Record]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RecordListOutput {
        records,
        total: records.len(),
        low_stock_count: records.iter().filter(|r| r.is_low_stock()).count(),
    })
}

/// Format a single record as pretty JSON.
pub fn format_record_json(record: &Record) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}
