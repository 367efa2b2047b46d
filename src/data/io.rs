//! Delimited text ingestion.
//!
//! Each line is a comma-separated row of numeric values; the last value is
//! the regression target, all preceding values are features. Rows with fewer
//! than two values carry no (features, target) pair and are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::{Array1, Array2};

use super::dataset::Dataset;
use super::error::DatasetError;

/// Load a dataset from a CSV file.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be opened or read, a field
/// fails to parse as a number, a row disagrees with the first valid row's
/// feature count, or no valid rows remain.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let file = File::open(path)?;
    read_csv(BufReader::new(file))
}

/// Read a dataset from any buffered reader of CSV lines.
///
/// The first valid row fixes the feature count. Feature values accumulate in
/// a single flat buffer that is reshaped once at the end, so no per-row
/// allocation survives the load.
pub fn read_csv<R: BufRead>(reader: R) -> Result<Dataset, DatasetError> {
    let mut values: Vec<f64> = Vec::new();
    let mut targets: Vec<f64> = Vec::new();
    let mut n_features: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 2 {
            continue;
        }

        let row_features = fields.len() - 1;
        match n_features {
            None => n_features = Some(row_features),
            Some(expected) if expected != row_features => {
                return Err(DatasetError::RowLength {
                    line: idx + 1,
                    expected,
                    got: row_features,
                });
            }
            Some(_) => {}
        }

        for (col, field) in fields.iter().enumerate() {
            let value: f64 = field.parse().map_err(|_| DatasetError::ParseField {
                line: idx + 1,
                column: col + 1,
                value: (*field).to_string(),
            })?;
            if col == row_features {
                targets.push(value);
            } else {
                values.push(value);
            }
        }
    }

    let n_features = n_features.ok_or(DatasetError::Empty)?;
    let n_samples = targets.len();
    let features = Array2::from_shape_vec((n_samples, n_features), values)
        .expect("row length validated during parsing");

    Ok(Dataset::new(features, Array1::from_vec(targets)))
}
