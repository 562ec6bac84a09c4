use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use ndarray::{Array1, Array2};

use super::model::LabeledDataset;
use crate::error::{DataError, Result};

/// Where the MNIST training CSV lives by default.
pub const DEFAULT_DATA_PATH: &str = "data/mnist_train.csv";

/// Row cap applied when the caller does not choose one.
pub const DEFAULT_MAX_ROWS: usize = 10_000;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a labelled CSV dataset.
///
/// Layout: one header line, then one record per line with the label in
/// column 0 and pixel values in the remaining columns.
///
/// `max_rows` caps the number of data rows read after the header.
/// `None` and `Some(0)` both read the whole file.
pub fn load(path: &Path, max_rows: Option<usize>) -> Result<LabeledDataset> {
    let file = File::open(path).map_err(|source| DataError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = read_dataset(BufReader::new(file), max_rows, Some(path))?;
    debug!(
        "Loaded {} rows x {} features from {}",
        dataset.len(),
        dataset.n_features(),
        path.display()
    );
    Ok(dataset)
}

/// Load [`DEFAULT_DATA_PATH`].
pub fn load_default(max_rows: Option<usize>) -> Result<LabeledDataset> {
    load(Path::new(DEFAULT_DATA_PATH), max_rows)
}

/// Same as [`load`] but from any reader.
pub fn load_from_reader<R: Read>(reader: R, max_rows: Option<usize>) -> Result<LabeledDataset> {
    read_dataset(reader, max_rows, None)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

fn read_dataset<R: Read>(
    reader: R,
    max_rows: Option<usize>,
    path: Option<&Path>,
) -> Result<LabeledDataset> {
    // Data lines are file lines 2..=max_rows + 1. Blank lines count toward
    // the cap even though the csv reader yields no record for them.
    let last_line = max_rows.filter(|&n| n > 0).map(|n| n as u64 + 1);
    let past_cap = |line: u64| last_line.is_some_and(|last| line > last);

    // The first record is the header; the csv reader consumes it for us.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut labels = Vec::new();
    let mut pixels = Vec::new();
    let mut width: Option<usize> = None;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if past_cap(err.position().map_or(0, |p| p.line())) => break,
            Err(err) => return Err(csv_error(err, path)),
        };
        let line = record.position().map_or(0, |p| p.line());
        if past_cap(line) {
            break;
        }

        let expected = *width.get_or_insert(record.len());
        if record.len() != expected {
            return Err(DataError::RowWidth {
                line,
                expected,
                found: record.len(),
            });
        }

        for (column, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| DataError::Parse {
                line,
                column,
                value: field.to_string(),
            })?;
            if column == 0 {
                labels.push(value);
            } else {
                pixels.push(value);
            }
        }
    }

    let n_features = width.map_or(0, |w| w.saturating_sub(1));
    let features = Array2::from_shape_vec((labels.len(), n_features), pixels)?;
    LabeledDataset::new(features, Array1::from(labels))
}

/// I/O failures while reading a file count as an unreadable dataset.
fn csv_error(err: csv::Error, path: Option<&Path>) -> DataError {
    match path {
        Some(path) if err.is_io_error() => match err.into_kind() {
            csv::ErrorKind::Io(source) => DataError::NotFound {
                path: path.to_path_buf(),
                source,
            },
            _ => unreachable!("is_io_error implies ErrorKind::Io"),
        },
        _ => DataError::Csv {
            line: err.position().map_or(0, |p| p.line()),
            source: err,
        },
    }
}
