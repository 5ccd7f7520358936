//! Export builders: raw JSON, full flattened CSV, and simplified CSV.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::flatten::{flatten_all, simplify_all, FlatRow, SIMPLE_FIELDS};
use crate::types::Filing;

/// Serializes the concatenated records as a pretty-printed JSON array.
pub fn to_json_pretty(records: &[Filing]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(records)
}

/// Builds the full flattened CSV. The header is the sorted union of every
/// dot-joined key across all rows; a row missing a key renders a blank cell.
/// Zero records produce empty output, since no key universe exists to build a
/// header from.
pub fn full_csv(records: &[Filing]) -> Result<Vec<u8>, csv::Error> {
    let rows = flatten_all(records);
    let header: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();
    if header.is_empty() {
        return Ok(Vec::new());
    }
    let header: Vec<&str> = header.into_iter().collect();
    write_csv(&header, &rows)
}

/// Builds the simplified CSV with the fixed six-column header. The header is
/// emitted even for zero records so downstream tooling always gets a
/// well-formed file.
pub fn simple_csv(records: &[Filing]) -> Result<Vec<u8>, csv::Error> {
    write_csv(&SIMPLE_FIELDS, &simplify_all(records))
}

fn write_csv(header: &[&str], rows: &[FlatRow]) -> Result<Vec<u8>, csv::Error> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        wtr.write_record(header)?;
        for row in rows {
            wtr.write_record(header.iter().map(|key| cell(row.get(*key))))?;
        }
        wtr.flush()?;
    }
    Ok(buf)
}

/// Renders one JSON value as a CSV cell. Strings pass through unquoted,
/// null/missing become blank, everything else uses its JSON display form.
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
