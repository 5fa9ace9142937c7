//! Spreadsheet decoding via calamine. Only the first sheet is read; the
//! header row is the first row of its used range.

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xls, Xlsx};

use maa_model::{CellValue, Dataset, Row};

use crate::error::{IngestError, Result};
use crate::header::build_columns;

pub(crate) fn read_xlsx(bytes: &[u8], filename: &str) -> Result<Dataset> {
    let workbook =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| IngestError::unreadable(filename, e))?;
    let range = first_sheet_range(workbook, filename)?;
    range_to_dataset(&range, filename)
}

pub(crate) fn read_xls(bytes: &[u8], filename: &str) -> Result<Dataset> {
    let workbook =
        Xls::new(Cursor::new(bytes)).map_err(|e| IngestError::unreadable(filename, e))?;
    let range = first_sheet_range(workbook, filename)?;
    range_to_dataset(&range, filename)
}

fn first_sheet_range<RS, R>(mut workbook: R, filename: &str) -> Result<Range<Data>>
where
    RS: std::io::Read + std::io::Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => Ok(range),
        Some(Err(e)) => Err(IngestError::unreadable(filename, e)),
        None => Err(IngestError::unreadable(filename, "workbook has no sheets")),
    }
}

fn range_to_dataset(range: &Range<Data>, filename: &str) -> Result<Dataset> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| IngestError::unreadable(filename, "no header row"))?;
    let columns = build_columns(header.iter().map(ToString::to_string), filename)?;

    let mut dataset = Dataset::new(columns);
    for row in rows {
        let cells = row.iter().map(cell_from_data).collect();
        dataset.push_row(Row::new(cells));
    }
    Ok(dataset)
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Missing,
        Data::String(s) if s.is_empty() => CellValue::Missing,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        // Serial date numbers; downstream formatting is not this crate's call.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
