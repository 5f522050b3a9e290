//! Parsing raw export bytes into a [`Table`].
//!
//! Exports carry a fixed number of banner rows (fund name, as-of date and
//! similar) before a single header row. The header text is consumed but not
//! trusted: the first six columns are renamed by position to
//! [`COLUMN_NAMES`](crate::types::COLUMN_NAMES).

use tracing::debug;

use crate::error::{HoldingsError, HoldingsResult};
use crate::types::{Record, Table, COLUMN_COUNT};

/// Parses CSV bytes into a table of holdings records.
///
/// The first `skip_rows` physical lines are discarded, blank lines
/// included, and the next row is taken as the header. Every following row
/// is a data row. Rows may have different widths; columns beyond the sixth
/// are ignored and short rows are padded with empty cells.
///
/// # Errors
///
/// Returns [`HoldingsError::Parse`] if the bytes are not valid CSV or UTF-8,
/// if there are fewer than `skip_rows` lines before the header, if the
/// header row is missing, or if the header row has fewer than six columns.
pub fn parse_table(bytes: &[u8], skip_rows: usize) -> HoldingsResult<Table> {
    let body = skip_lines(bytes, skip_rows)?;
    let offset = skip_rows as u64;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body);
    let mut rows = reader.records();

    let header_row = offset + 1;
    let header = rows
        .next()
        .ok_or_else(|| HoldingsError::parse_at(header_row, "missing header row"))?
        .map_err(|e| csv_error(e, offset))?;

    if header.len() < COLUMN_COUNT {
        return Err(HoldingsError::parse_at(
            header_row,
            format!(
                "expected at least {COLUMN_COUNT} columns, found {}",
                header.len()
            ),
        ));
    }

    let records = rows
        .map(|row| row.map(|r| Record::from_row(&r)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| csv_error(e, offset))?;

    debug!(
        skipped = skip_rows,
        columns = header.len(),
        records = records.len(),
        "Parsed holdings table"
    );

    Ok(Table::new(records))
}

/// Returns the bytes after the first `count` lines.
///
/// The csv reader drops empty lines, so banner lines are counted here on
/// the raw bytes.
fn skip_lines(bytes: &[u8], count: usize) -> HoldingsResult<&[u8]> {
    let mut rest = bytes;
    for skipped in 0..count {
        if rest.is_empty() {
            return Err(HoldingsError::parse(format!(
                "expected {count} leading rows before the header, found {skipped}"
            )));
        }
        rest = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => &rest[end + 1..],
            None => &[],
        };
    }
    Ok(rest)
}

/// Converts a csv error, shifting its line back to a position in the export.
fn csv_error(err: csv::Error, offset: u64) -> HoldingsError {
    match HoldingsError::from(err) {
        HoldingsError::Parse { row, reason } => HoldingsError::Parse {
            row: row.map(|r| r + offset),
            reason,
        },
        other => other,
    }
}
