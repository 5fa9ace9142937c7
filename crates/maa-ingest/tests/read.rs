//! Integration tests for the public read surface.

use maa_ingest::{IngestError, read_dataset};
use maa_model::CellValue;

#[test]
fn error_message_names_the_file_and_supported_extensions() {
    let err = read_dataset(b"x", "demographics.sas7bdat").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("demographics.sas7bdat"));
    for extension in ["csv", "tsv", "xlsx", "xls"] {
        assert!(message.contains(extension), "missing {extension}");
    }
}

#[test]
fn tsv_preserves_cell_padding_for_the_cleaner() {
    let dataset = read_dataset(b"Address\tCity\n  1 A St \tChicago\n", "upload.tsv").unwrap();
    assert_eq!(
        dataset.rows[0].cells[0],
        CellValue::Text("  1 A St ".to_string())
    );
}

#[test]
fn xls_garbage_reports_unreadable_with_cause() {
    let err = read_dataset(b"definitely not an OLE container", "upload.xls").unwrap_err();
    let IngestError::UnreadableFile { filename, message } = err else {
        panic!("expected UnreadableFile");
    };
    assert_eq!(filename, "upload.xls");
    assert!(!message.is_empty());
}

#[test]
fn extension_dispatch_ignores_directory_like_names() {
    // No extension at all on the final component.
    let err = read_dataset(b"a,b\n1,2\n", "upload").unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn quoted_fields_with_embedded_delimiters_parse() {
    let dataset = read_dataset(
        b"Address,City\n\"123 Main St, Apt 4\",Chicago\n",
        "upload.csv",
    )
    .unwrap();
    assert_eq!(
        dataset.rows[0].cells[0],
        CellValue::Text("123 Main St, Apt 4".to_string())
    );
}
