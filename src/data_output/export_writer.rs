// src/data_output/export_writer.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::data_input::export_data::Column;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create file '{path}': {source}")]
    CreateFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to file '{path}': {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no columns to write")]
    NoColumns,

    #[error("column '{label}' has {actual} samples, expected {expected}")]
    LengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },
}

/// Writes columns to a delimited text file, one row per sample index.
///
/// With `write_header` set, the first line carries the column labels so the
/// file can be read back by the parser; values use the shortest exact
/// decimal representation, making the write → read round trip lossless for
/// well-formed input. All columns must have the same length.
pub fn write_columns(
    output_file_path: &Path,
    columns: &[Column],
    delimiter: u8,
    write_header: bool,
) -> Result<(), WriteError> {
    let path_str = output_file_path.display().to_string();
    let first = columns.first().ok_or(WriteError::NoColumns)?;
    let rows = first.len();
    for column in columns {
        if column.len() != rows {
            return Err(WriteError::LengthMismatch {
                label: column.label.clone(),
                expected: rows,
                actual: column.len(),
            });
        }
    }

    let file = File::create(output_file_path).map_err(|e| WriteError::CreateFile {
        path: path_str.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    let delimiter = delimiter as char;

    let mut line = String::new();
    if write_header {
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                line.push(delimiter);
            }
            line.push_str(&column.label);
        }
        writeln!(writer, "{line}").map_err(|e| WriteError::WriteFile {
            path: path_str.clone(),
            source: e,
        })?;
    }

    for row in 0..rows {
        line.clear();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                line.push(delimiter);
            }
            line.push_str(&column.samples[row].to_string());
        }
        writeln!(writer, "{line}").map_err(|e| WriteError::WriteFile {
            path: path_str.clone(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| WriteError::WriteFile {
        path: path_str.clone(),
        source: e,
    })?;
    debug!("'{}': wrote {} column(s) x {} row(s)", path_str, columns.len(), rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn rejects_empty_column_set() {
        let file = NamedTempFile::new().unwrap();
        let err = write_columns(file.path(), &[], b';', true).unwrap_err();
        assert!(matches!(err, WriteError::NoColumns));
    }

    #[test]
    fn rejects_unequal_lengths() {
        let file = NamedTempFile::new().unwrap();
        let columns = [
            Column::new("a", vec![1.0, 2.0]),
            Column::new("b", vec![1.0]),
        ];
        let err = write_columns(file.path(), &columns, b';', true).unwrap_err();
        assert!(matches!(
            err,
            WriteError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn writes_rows_across_columns() {
        let file = NamedTempFile::new().unwrap();
        let columns = [
            Column::new("t", vec![0.0, 1.0, 2.0]),
            Column::new("y", vec![1.5, -2.0, 0.25]),
        ];
        write_columns(file.path(), &columns, b';', true).unwrap();
        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, "t;y\n0;1.5\n1;-2\n2;0.25\n");
    }
}

// src/data_output/export_writer.rs
