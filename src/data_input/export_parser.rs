// src/data_input/export_parser.rs

use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::data_input::export_data::Column;

/// Marker line that ends the preamble of a PGHW export. The header line
/// follows immediately after it.
const DATA_MARKER: &str = "Data:";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' contains no header line")]
    MissingHeader { path: String },

    #[error("column position {position} requested but the header has only {columns} columns")]
    PositionOutOfRange { position: usize, columns: usize },

    #[error("data row {row} has {fields} fields, but column position {position} was requested")]
    ShortRow {
        row: usize,
        fields: usize,
        position: usize,
    },

    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Converts one raw field to a sample value.
///
/// The field is trimmed and a decimal comma is replaced with a dot. Empty
/// fields and `NAN` become `0.0`; anything else that still fails to parse
/// is coerced to `0.0` as well and counted in `coerced`.
fn parse_field(raw: &str, coerced: &mut usize) -> f64 {
    let s = raw.trim().replace(',', ".");
    if s.is_empty() || s.eq_ignore_ascii_case("nan") {
        return 0.0;
    }
    match s.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            *coerced += 1;
            0.0
        }
    }
}

/// Parses a PGHW export file and extracts the requested columns.
///
/// The preamble (everything before a line reading `Data:`) is skipped; the
/// line after the marker is the header. Files without a marker are treated
/// as plain delimited files whose first line is the header.
///
/// `positions` selects columns by index in the given order; an empty slice
/// selects every column. Malformed numeric fields are coerced to `0.0`
/// (see [`parse_field`]), while structural problems (missing header, rows
/// shorter than a requested position) are reported as errors.
///
/// Returns a tuple containing:
/// 1. `Vec<Column>`: the extracted columns, labels taken from the header.
/// 2. `usize`: number of preamble lines skipped before the header.
pub fn read_export(
    input_file_path: &Path,
    delimiter: u8,
    positions: &[usize],
) -> Result<(Vec<Column>, usize), ParseError> {
    let path_str = input_file_path.display().to_string();

    // First pass: split the file into preamble and delimited content. The
    // marker line itself counts as preamble.
    let mut preamble_lines = 0usize;
    let mut content_lines: Vec<String> = Vec::new();
    let mut found_marker = false;
    {
        let file = File::open(input_file_path).map_err(|e| ParseError::Open {
            path: path_str.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        for line_result in reader.lines() {
            let line = line_result.map_err(|e| ParseError::Read {
                path: path_str.clone(),
                source: e,
            })?;
            if found_marker {
                content_lines.push(line);
            } else if line.trim() == DATA_MARKER {
                // Everything buffered so far was preamble, plus the marker
                // line itself.
                found_marker = true;
                preamble_lines = content_lines.len() + 1;
                content_lines.clear();
            } else {
                content_lines.push(line);
            }
        }

        if found_marker {
            debug!(
                "'{}': skipped {} preamble line(s) before '{}'",
                path_str, preamble_lines, DATA_MARKER
            );
        } else {
            // No marker anywhere: the lines collected so far ARE the
            // content, starting with the header.
            debug!(
                "'{}': no '{}' marker, treating first line as header",
                path_str, DATA_MARKER
            );
        }
    }

    let csv_content = content_lines.join("\n");
    if csv_content.trim().is_empty() {
        return Err(ParseError::MissingHeader { path: path_str });
    }

    // Second pass: feed the delimited content to the CSV reader. Rows may
    // be ragged; only the requested positions must be present.
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let header_record = reader
        .headers()
        .map_err(|e| ParseError::Csv {
            path: path_str.clone(),
            source: e,
        })?
        .clone();
    let header_count = header_record.len();

    let selected: Vec<usize> = if positions.is_empty() {
        (0..header_count).collect()
    } else {
        positions.to_vec()
    };
    for &position in &selected {
        if position >= header_count {
            return Err(ParseError::PositionOutOfRange {
                position,
                columns: header_count,
            });
        }
    }

    let mut columns: Vec<Column> = selected
        .iter()
        .map(|&position| Column::new(header_record.get(position).unwrap_or("").trim(), Vec::new()))
        .collect();

    let mut coerced = 0usize;
    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ParseError::Csv {
            path: path_str.clone(),
            source: e,
        })?;
        for (slot, &position) in selected.iter().enumerate() {
            let raw = record.get(position).ok_or(ParseError::ShortRow {
                row: row_index + 1,
                fields: record.len(),
                position,
            })?;
            columns[slot].samples.push(parse_field(raw, &mut coerced));
        }
    }

    if coerced > 0 {
        warn!(
            "'{}': coerced {} malformed numeric field(s) to 0.0",
            path_str, coerced
        );
    }
    debug!(
        "'{}': read {} column(s) x {} row(s)",
        path_str,
        columns.len(),
        columns.first().map_or(0, Column::len)
    );

    Ok((columns, preamble_lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write fixture");
        file
    }

    #[test]
    fn parse_field_coercions() {
        let mut coerced = 0;
        assert_eq!(parse_field("1.5", &mut coerced), 1.5);
        assert_eq!(parse_field("  2,25 ", &mut coerced), 2.25);
        assert_eq!(parse_field("", &mut coerced), 0.0);
        assert_eq!(parse_field("NAN", &mut coerced), 0.0);
        assert_eq!(parse_field("nan", &mut coerced), 0.0);
        assert_eq!(coerced, 0);

        assert_eq!(parse_field("bogus", &mut coerced), 0.0);
        assert_eq!(coerced, 1);
    }

    #[test]
    fn reads_export_with_preamble() {
        let file = write_fixture(
            "Device: T72\nSerial: 0003\nData:\nTime [ms],Height [m],Temp [C]\n0,1.5,20\n1,1,75,21\n",
        );
        // Note the decimal comma in row 2: with ',' as delimiter it splits
        // into an extra field, so only take the first two columns.
        let (columns, preamble) = read_export(file.path(), b',', &[0, 1]).unwrap();
        assert_eq!(preamble, 3);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].label, "Time [ms]");
        assert_eq!(columns[1].label, "Height [m]");
        assert_eq!(columns[0].samples, vec![0.0, 1.0]);
        assert_eq!(columns[1].samples, vec![1.5, 1.0]);
    }

    #[test]
    fn reads_headerfirst_file_without_marker() {
        let file = write_fixture("a;b\n1;2\n3;4\n");
        let (columns, preamble) = read_export(file.path(), b';', &[]).unwrap();
        assert_eq!(preamble, 0);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].samples, vec![1.0, 3.0]);
        assert_eq!(columns[1].samples, vec![2.0, 4.0]);
    }

    #[test]
    fn semicolon_files_keep_decimal_commas_intact() {
        let file = write_fixture("Data:\nx;y\n0;3,5\n1;NAN\n2;\n");
        let (columns, _) = read_export(file.path(), b';', &[]).unwrap();
        assert_eq!(columns[1].samples, vec![3.5, 0.0, 0.0]);
    }

    #[test]
    fn position_out_of_range_is_an_error() {
        let file = write_fixture("a,b\n1,2\n");
        let err = read_export(file.path(), b',', &[5]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::PositionOutOfRange {
                position: 5,
                columns: 2
            }
        ));
    }

    #[test]
    fn short_row_is_an_error() {
        let file = write_fixture("a,b,c\n1,2,3\n4,5\n");
        let err = read_export(file.path(), b',', &[2]).unwrap_err();
        assert!(matches!(err, ParseError::ShortRow { row: 2, .. }));
    }

    #[test]
    fn marker_with_nothing_after_is_missing_header() {
        let file = write_fixture("Device: T72\nData:\n");
        let err = read_export(file.path(), b',', &[]).unwrap_err();
        assert!(matches!(err, ParseError::MissingHeader { .. }));
    }

    #[test]
    fn positions_select_in_given_order() {
        let file = write_fixture("a,b,c\n1,2,3\n");
        let (columns, _) = read_export(file.path(), b',', &[2, 0]).unwrap();
        assert_eq!(columns[0].label, "c");
        assert_eq!(columns[1].label, "a");
        assert_eq!(columns[0].samples, vec![3.0]);
        assert_eq!(columns[1].samples, vec![1.0]);
    }
}

// src/data_input/export_parser.rs
