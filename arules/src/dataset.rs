//! Loading the attribute list and the binary dataset from disk.

use ndarray::Array2;
use std::path::Path;

use crate::error::{MiningError, Result};

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| MiningError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the comma-separated attribute names, in column order.
pub fn read_attributes(path: &Path) -> Result<Vec<String>> {
    parse_attributes(&read_file(path)?)
}

pub fn parse_attributes(content: &str) -> Result<Vec<String>> {
    let content = content.trim();
    if content.is_empty() {
        return Err(MiningError::NoAttributes);
    }

    let attributes: Vec<String> = content.split(',').map(|name| name.trim().to_string()).collect();
    if let Some(column) = attributes.iter().position(String::is_empty) {
        return Err(MiningError::EmptyAttribute { column });
    }
    Ok(attributes)
}

/// Read a headerless CSV of 0/1 cells with `num_attributes` columns.
pub fn read_dataset(path: &Path, num_attributes: usize) -> Result<Array2<i32>> {
    parse_dataset(&read_file(path)?, num_attributes)
}

/// Blank lines are skipped; row numbers in errors count only data rows.
pub fn parse_dataset(content: &str, num_attributes: usize) -> Result<Array2<i32>> {
    let mut cells = Vec::new();
    let mut num_rows = 0;

    for (line_idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row: Vec<&str> = line.split(',').map(str::trim).collect();
        if row.len() != num_attributes {
            return Err(MiningError::RowWidth {
                line: line_idx + 1,
                expected: num_attributes,
                found: row.len(),
            });
        }

        for (column, raw) in row.into_iter().enumerate() {
            let value = match raw {
                "0" => 0,
                "1" => 1,
                other => {
                    return Err(MiningError::InvalidCell {
                        row: num_rows,
                        column,
                        value: other.to_string(),
                    })
                }
            };
            cells.push(value);
        }
        num_rows += 1;
    }

    Ok(Array2::from_shape_vec((num_rows, num_attributes), cells)?)
}
