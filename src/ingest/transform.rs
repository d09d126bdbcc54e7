//! Converts one CSV member into database-ready rows for one feed table.
//!
//! All values are read as text first so leading zeros and formatting survive
//! until coercion. Columns the feed omits are synthesized as null, columns
//! the registry does not expect are dropped, so output rows always match the
//! target table's column set exactly.

use chrono::NaiveDate;

use super::error::IngestError;
use super::tables::{ColumnType, TableDef};

/// A single coerced value, ready to bind into an INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(Option<String>),
    Integer(Option<i32>),
    Float(Option<f64>),
    Boolean(bool),
    Date(Option<NaiveDate>),
}

/// All rows produced for one target table, cells aligned with
/// `def.columns`.
#[derive(Debug)]
pub struct TableRows {
    pub def: &'static TableDef,
    pub rows: Vec<Vec<Cell>>,
}

#[cfg(test)]
impl TableRows {
    /// Cell of a row by column name. Panics on an unknown column.
    pub fn cell(&self, row: usize, column: &str) -> &Cell {
        let idx = self
            .def
            .columns
            .iter()
            .position(|c| c.name == column)
            .unwrap_or_else(|| panic!("{} has no column {}", self.def.table, column));
        &self.rows[row][idx]
    }
}

/// Parse a CSV member and coerce it against the table definition.
pub fn transform(def: &'static TableDef, data: &[u8]) -> Result<TableRows, IngestError> {
    // Some feeds prefix the first header with a UTF-8 BOM.
    let data = data.strip_prefix(b"\xef\xbb\xbf").unwrap_or(data);

    let mut rdr = csv::Reader::from_reader(data);
    let headers = rdr
        .headers()
        .map_err(|e| IngestError::Csv {
            file: def.file,
            source: e,
        })?
        .clone();

    // Position of each expected column in the source header; None when the
    // feed omits the column entirely.
    let positions: Vec<Option<usize>> = def
        .columns
        .iter()
        .map(|c| headers.iter().position(|h| h == c.name))
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| IngestError::Csv {
            file: def.file,
            source: e,
        })?;
        let row = def
            .columns
            .iter()
            .zip(&positions)
            .map(|(c, pos)| {
                let raw = pos.and_then(|i| record.get(i)).and_then(non_empty);
                coerce(c.ty, raw)
            })
            .collect();
        rows.push(row);
    }

    Ok(TableRows { def, rows })
}

/// Coerce-or-null: a value that fails its column's parse becomes null
/// rather than an error. Booleans are the exception, they collapse to
/// `false` instead.
fn coerce(ty: ColumnType, raw: Option<&str>) -> Cell {
    match ty {
        ColumnType::Text => Cell::Text(raw.map(|s| s.to_string())),
        ColumnType::Integer => Cell::Integer(raw.and_then(|s| s.trim().parse().ok())),
        ColumnType::Float => Cell::Float(raw.and_then(|s| s.trim().parse().ok())),
        // Strict single-sentinel match: only the literal "1" is true.
        ColumnType::Boolean => Cell::Boolean(raw.is_some_and(|s| s.trim() == "1")),
        ColumnType::Date => Cell::Date(raw.and_then(parse_feed_date)),
    }
}

/// Parse a feed date string "YYYYMMDD" to NaiveDate.
fn parse_feed_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.len() != 8 {
        return None;
    }
    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month: u32 = s.get(4..6)?.parse().ok()?;
    let day: u32 = s.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
