//! Text format of the inventory source: a fixed header line followed by one
//! comma-separated record per line. Fields are never quoted.

use crate::core::ShoeRecord;
use crate::utils::error::{InventoryError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

pub const HEADER: &str = "Country,Code,Product,Cost,Quantity";

const FIELD_COUNT: usize = 5;

#[derive(Debug, Default)]
pub struct ParsedSource {
    pub records: Vec<ShoeRecord>,
    /// One `MalformedLine` per skipped line, in file order.
    pub skipped: Vec<InventoryError>,
}

pub fn parse_source(text: &str) -> Result<ParsedSource> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut parsed = ParsedSource::default();
    let mut row = StringRecord::new();

    while reader.read_record(&mut row)? {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        match parse_row(&row) {
            Ok(record) => parsed.records.push(record),
            Err(reason) => {
                let content = row.iter().collect::<Vec<_>>().join(",");
                tracing::warn!("Skipping line {}: {} ({})", line, content, reason);
                parsed.skipped.push(InventoryError::MalformedLine {
                    line,
                    content,
                    reason,
                });
            }
        }
    }

    Ok(parsed)
}

fn parse_row(row: &StringRecord) -> std::result::Result<ShoeRecord, String> {
    if row.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            row.len()
        ));
    }

    let cost = parse_number(&row[3], "cost")?;
    let quantity = parse_number(&row[4], "quantity")?;

    Ok(ShoeRecord::new(&row[0], &row[1], &row[2], cost, quantity))
}

fn parse_number(raw: &str, field: &str) -> std::result::Result<u32, String> {
    raw.parse::<u32>()
        .map_err(|e| format!("invalid {} {:?}: {}", field, raw, e))
}

pub fn format_record(record: &ShoeRecord) -> String {
    format!(
        "{},{},{},{},{}",
        record.country, record.code, record.product, record.cost, record.quantity
    )
}

/// Header plus every record, each line newline-terminated.
pub fn render_source(records: &[ShoeRecord]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + records.len() * 48);
    out.push_str(HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&format_record(record));
        out.push('\n');
    }
    out
}
