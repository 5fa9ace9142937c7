//! Upload ingestion: raw bytes plus an original filename in, [`Dataset`]
//! out. This is the only pipeline stage that can fail; everything after it
//! reports problems as structured data.

pub mod error;
pub mod format;

mod delimited;
mod header;
mod sheet;

pub use error::{IngestError, Result};
pub use format::FileFormat;

use maa_model::Dataset;

/// Decodes fully-buffered upload bytes into a dataset based on the
/// filename extension.
///
/// Delimited text is tried as strict UTF-8 first and falls back to
/// WINDOWS-1252, so encoding alone can never fail the read. Spreadsheets
/// load the first sheet only. Duplicate or empty header names are rejected
/// as [`IngestError::UnreadableFile`].
pub fn read_dataset(bytes: &[u8], filename: &str) -> Result<Dataset> {
    let format = FileFormat::from_filename(filename).ok_or_else(|| {
        IngestError::UnsupportedFormat {
            filename: filename.to_string(),
        }
    })?;
    let dataset = match format {
        FileFormat::Csv | FileFormat::Tsv => {
            let delimiter = format.delimiter().unwrap_or(b',');
            delimited::read_delimited(bytes, filename, delimiter)?
        }
        FileFormat::Xlsx => sheet::read_xlsx(bytes, filename)?,
        FileFormat::Xls => sheet::read_xls(bytes, filename)?,
    };
    tracing::info!(
        filename,
        format = %format,
        rows = dataset.height(),
        columns = dataset.width(),
        "dataset ingested"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maa_model::CellValue;

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = read_dataset(b"whatever", "report.pdf").unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    }

    #[test]
    fn csv_round_trip() {
        let dataset =
            read_dataset(b"street_address,city_name\n123 Main St,Chicago\n", "upload.csv")
                .unwrap();
        assert_eq!(dataset.columns, ["street_address", "city_name"]);
        assert_eq!(
            dataset.rows[0].cells[1],
            CellValue::Text("Chicago".to_string())
        );
    }

    #[test]
    fn duplicate_csv_headers_are_unreadable() {
        let err = read_dataset(b"Address,address\n1,2\n", "upload.csv").unwrap_err();
        assert!(matches!(err, IngestError::UnreadableFile { .. }));
        assert!(err.to_string().contains("duplicate column name"));
    }
}
