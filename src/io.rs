//! Instance text format reader.
//!
//! The format is a whitespace-separated table. The first non-empty row
//! is `n wmax` (item count and capacity); each of the `n` following
//! rows is `value weight` for one item:
//!
//! ```text
//! 3 50
//! 60 10
//! 100 20
//! 120 30
//! ```
//!
//! Parsing keeps degenerate items; they are filtered, with a warning,
//! when the problem is built from the parsed list.

use crate::error::Error;
use crate::problem::Item;
use std::path::Path;

/// Parses instance text into its item list and capacity.
///
/// Blank lines are ignored. Malformed header rows, malformed item rows
/// and a row count that contradicts the header are distinct errors; no
/// partially parsed instance is ever returned.
pub fn parse_instance(input: &str) -> Result<(Vec<Item>, f64), Error> {
    let mut rows = input
        .lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.trim()))
        .filter(|(_, row)| !row.is_empty());

    let (_, header) = rows
        .next()
        .ok_or_else(|| Error::InvalidHeader(String::new()))?;
    let (declared, capacity) = parse_header(header)?;

    let mut items = Vec::with_capacity(declared);
    for (line, row) in rows {
        let item = parse_row(row).ok_or_else(|| Error::InvalidRow {
            line,
            content: row.to_string(),
        })?;
        items.push(item);
    }

    if items.len() != declared {
        return Err(Error::RowCountMismatch {
            declared,
            found: items.len(),
        });
    }

    Ok((items, capacity))
}

/// Reads and parses an instance file.
pub fn read_instance<P: AsRef<Path>>(path: P) -> Result<(Vec<Item>, f64), Error> {
    let content = std::fs::read_to_string(path)?;
    parse_instance(&content)
}

fn parse_header(row: &str) -> Result<(usize, f64), Error> {
    let mut fields = row.split_whitespace();
    let declared = fields.next().and_then(|f| f.parse::<usize>().ok());
    let capacity = fields.next().and_then(|f| f.parse::<f64>().ok());
    match (declared, capacity, fields.next()) {
        (Some(n), Some(wmax), None) => Ok((n, wmax)),
        _ => Err(Error::InvalidHeader(row.to_string())),
    }
}

fn parse_row(row: &str) -> Option<Item> {
    let mut fields = row.split_whitespace();
    let value = fields.next()?.parse::<f64>().ok()?;
    let weight = fields.next()?.parse::<f64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Item::new(value, weight))
}
