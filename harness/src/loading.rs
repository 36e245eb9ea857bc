//! Instance file loading for the lights-out world.
//!
//! # Format
//!
//! ```text
//! <rows> <cols>
//! <cols values, each 0 or 1>     ← repeated exactly <rows> times
//! ```
//!
//! Values are separated by whitespace; `1` means the light is on. Trailing
//! whitespace-only lines are accepted. Anything else that deviates from the
//! format is an [`InstanceError`], reported before any search runs.

use std::path::{Path, PathBuf};

use log::debug;

use crate::worlds::lights_out::{LightsGrid, LightsOut};

/// Malformed or unreadable instance description.
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("cannot read instance file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input is empty")]
    Empty,
    #[error("number of {which} not specified")]
    MissingDimension { which: &'static str },
    #[error("invalid {which} count: {token:?}")]
    InvalidDimension { which: &'static str, token: String },
    #[error("first line contains more than the number of rows and columns")]
    HeaderTrailingTokens,
    #[error("grid has fewer than the specified {expected} rows (found {found})")]
    TooFewRows { expected: usize, found: usize },
    #[error("row {row} has fewer than the specified {expected} columns")]
    TooFewColumns { row: usize, expected: usize },
    #[error("row {row} has more than the specified {expected} columns")]
    TooManyColumns { row: usize, expected: usize },
    #[error("row {row}, column {col}: {token:?} is not an integer")]
    NotAnInteger {
        row: usize,
        col: usize,
        token: String,
    },
    #[error("row {row}, column {col}: light value must be 0 or 1, got {value}")]
    InvalidLight { row: usize, col: usize, value: i64 },
    #[error("grid has more than the specified {expected} rows")]
    TooManyRows { expected: usize },
}

/// Parse a lights-out instance from its text form.
///
/// # Errors
///
/// Returns an [`InstanceError`] describing the first format violation.
pub fn parse_lights_out(text: &str) -> Result<LightsOut, InstanceError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(InstanceError::Empty)?;

    let mut header_tokens = header.split_whitespace();
    let rows = parse_dimension(header_tokens.next(), "rows")?;
    let cols = parse_dimension(header_tokens.next(), "columns")?;
    if header_tokens.next().is_some() {
        return Err(InstanceError::HeaderTrailingTokens);
    }

    let mut grid = Vec::with_capacity(rows);
    for row in 1..=rows {
        let line = lines.next().ok_or(InstanceError::TooFewRows {
            expected: rows,
            found: row - 1,
        })?;
        grid.push(parse_row(line, row, cols)?);
    }

    if lines.any(|line| !line.trim().is_empty()) {
        return Err(InstanceError::TooManyRows { expected: rows });
    }

    debug!("parsed lights-out instance: {rows}x{cols}");
    Ok(LightsOut::new(LightsGrid::from_rows(&grid)))
}

/// Read and parse a lights-out instance file.
///
/// # Errors
///
/// Returns [`InstanceError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_lights_out`].
pub fn load_lights_out(path: &Path) -> Result<LightsOut, InstanceError> {
    debug!("reading lights-out instance from {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| InstanceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lights_out(&text)
}

fn parse_dimension(token: Option<&str>, which: &'static str) -> Result<usize, InstanceError> {
    let token = token.ok_or(InstanceError::MissingDimension { which })?;
    token
        .parse::<usize>()
        .map_err(|_| InstanceError::InvalidDimension {
            which,
            token: token.to_string(),
        })
}

/// Parse one grid row (`row` is 1-based for messages).
fn parse_row(line: &str, row: usize, cols: usize) -> Result<Vec<bool>, InstanceError> {
    let mut tokens = line.split_whitespace();
    let mut cells = Vec::with_capacity(cols);
    for col in 1..=cols {
        let token = tokens.next().ok_or(InstanceError::TooFewColumns {
            row,
            expected: cols,
        })?;
        let value: i64 = token.parse().map_err(|_| InstanceError::NotAnInteger {
            row,
            col,
            token: token.to_string(),
        })?;
        match value {
            0 => cells.push(false),
            1 => cells.push(true),
            _ => return Err(InstanceError::InvalidLight { row, col, value }),
        }
    }
    if tokens.next().is_some() {
        return Err(InstanceError::TooManyColumns {
            row,
            expected: cols,
        });
    }
    Ok(cells)
}
