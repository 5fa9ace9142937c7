//! Row cleaning: three ordered passes over a dataset, never failing.
//!
//! Empty-row removal runs before dedup so two all-empty rows are dropped
//! as empty, not counted as a removed duplicate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use maa_model::{CellValue, Dataset, Row};

/// What the cleaner removed or changed, for the preview payload and logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanStats {
    pub empty_rows_removed: usize,
    pub cells_trimmed: usize,
    pub duplicate_rows_removed: usize,
}

/// Cleans a dataset: drops fully-empty rows, trims text cells, then drops
/// exact-duplicate rows keeping the first occurrence. Remaining row order
/// is preserved. Total function; idempotent.
pub fn clean(input: &Dataset) -> (Dataset, CleanStats) {
    let mut stats = CleanStats::default();

    // Pass 1: drop rows where every cell is blank. "Blank" includes text
    // that trims to nothing; otherwise a whitespace-only row would turn
    // all-missing in pass 2 and only disappear on a second clean,
    // breaking idempotence.
    let mut rows: Vec<Row> = Vec::with_capacity(input.height());
    for row in &input.rows {
        if row.cells.iter().all(is_blank) {
            stats.empty_rows_removed += 1;
        } else {
            rows.push(row.clone());
        }
    }

    // Pass 2: trim text cells; whitespace-only cells become missing.
    for row in &mut rows {
        for cell in &mut row.cells {
            if let CellValue::Text(value) = cell {
                let trimmed = value.trim();
                if trimmed.len() != value.len() {
                    stats.cells_trimmed += 1;
                    if trimmed.is_empty() {
                        *cell = CellValue::Missing;
                    } else {
                        *value = trimmed.to_string();
                    }
                }
            }
        }
    }

    // Pass 3: drop exact duplicates, first occurrence wins.
    let mut seen = BTreeSet::new();
    let mut kept: Vec<Row> = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert(row_key(&row)) {
            kept.push(row);
        } else {
            stats.duplicate_rows_removed += 1;
        }
    }

    if stats != CleanStats::default() {
        tracing::debug!(
            empty_rows = stats.empty_rows_removed,
            trimmed = stats.cells_trimmed,
            duplicates = stats.duplicate_rows_removed,
            "cleaned dataset"
        );
    }

    let mut output = Dataset::new(input.columns.clone());
    output.rows = kept;
    (output, stats)
}

fn is_blank(cell: &CellValue) -> bool {
    match cell {
        CellValue::Missing => true,
        CellValue::Text(value) => value.trim().is_empty(),
        CellValue::Number(_) => false,
    }
}

/// Orderable stand-in for one cell. Numbers key on their exact bit
/// pattern, so only byte-identical values dedupe.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum CellKey {
    Missing,
    Number(u64),
    Text(String),
}

/// Structural equality key for one row. Two rows share a key iff every
/// cell matches in both kind and value.
fn row_key(row: &Row) -> Vec<CellKey> {
    row.cells
        .iter()
        .map(|cell| match cell {
            CellValue::Text(value) => CellKey::Text(value.clone()),
            CellValue::Number(value) => CellKey::Number(value.to_bits()),
            CellValue::Missing => CellKey::Missing,
        })
        .collect()
}
