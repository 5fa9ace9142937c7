//! Delimited-text decoding with a two-step encoding strategy: strict UTF-8
//! first, then WINDOWS-1252, which maps every byte and therefore cannot
//! fail. After that point only structural problems remain.

use std::borrow::Cow;

use maa_model::{CellValue, Dataset, Row};

use crate::error::{IngestError, Result};
use crate::header::build_columns;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

pub(crate) fn read_delimited(bytes: &[u8], filename: &str, delimiter: u8) -> Result<Dataset> {
    let text = decode_text(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| IngestError::unreadable(filename, e))?
        .clone();
    let columns = build_columns(headers.iter(), filename)?;

    let mut dataset = Dataset::new(columns);
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::unreadable(filename, e))?;
        let cells = record.iter().map(cell_from_field).collect();
        dataset.push_row(Row::new(cells));
    }
    Ok(dataset)
}

fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            tracing::debug!("input is not valid UTF-8, falling back to WINDOWS-1252");
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            Cow::Owned(decoded.into_owned())
        }
    }
}

/// Empty fields become `Missing`; everything else is kept verbatim.
/// Trimming is the cleaner's job, not the reader's.
fn cell_from_field(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(field.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_rows() {
        let dataset = read_delimited(b"street_address,city_name\n123 Main St,Chicago\n", "a.csv", b',').unwrap();
        assert_eq!(dataset.columns, ["street_address", "city_name"]);
        assert_eq!(dataset.height(), 1);
        assert_eq!(
            dataset.rows[0].cells[0],
            CellValue::Text("123 Main St".to_string())
        );
    }

    #[test]
    fn empty_fields_become_missing_without_trimming_the_rest() {
        let dataset = read_delimited(b"A,B\n  padded  ,\n", "a.csv", b',').unwrap();
        assert_eq!(
            dataset.rows[0].cells[0],
            CellValue::Text("  padded  ".to_string())
        );
        assert_eq!(dataset.rows[0].cells[1], CellValue::Missing);
    }

    #[test]
    fn non_utf8_bytes_decode_through_fallback() {
        // "café" with a latin-1 e-acute (0xE9), invalid as UTF-8.
        let bytes = b"name\ncaf\xE9\n";
        let dataset = read_delimited(bytes, "names.csv", b',').unwrap();
        assert_eq!(
            dataset.rows[0].cells[0],
            CellValue::Text("café".to_string())
        );
    }

    #[test]
    fn utf8_bom_does_not_leak_into_first_header() {
        let bytes = b"\xEF\xBB\xBFA,B\n1,2\n";
        let dataset = read_delimited(bytes, "a.csv", b',').unwrap();
        assert_eq!(dataset.columns[0], "A");
    }

    #[test]
    fn ragged_record_is_unreadable() {
        let err = read_delimited(b"A,B\n1,2,3\n", "a.csv", b',').unwrap_err();
        assert!(matches!(err, IngestError::UnreadableFile { .. }));
    }

    #[test]
    fn tab_delimiter_splits_tsv() {
        let dataset = read_delimited(b"A\tB\n1\t2\n", "a.tsv", b'\t').unwrap();
        assert_eq!(dataset.columns, ["A", "B"]);
        assert_eq!(dataset.rows[0].cells[1], CellValue::Text("2".to_string()));
    }
}
