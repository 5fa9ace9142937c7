//! In-memory tabular dataset: ordered columns, ordered rows.

use serde::{Deserialize, Serialize};

/// A single cell. Text and numbers arrive from the readers; `Missing`
/// covers empty cells and cells that trim down to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Renders the cell as display text, `None` for missing cells.
    /// Whole numbers print without a trailing `.0` so spreadsheet
    /// integers round-trip the way users typed them.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value.clone()),
            Self::Number(value) => {
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    Some(format!("{}", *value as i64))
                } else {
                    Some(value.to_string())
                }
            }
            Self::Missing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    pub fn is_all_missing(&self) -> bool {
        self.cells.iter().all(CellValue::is_missing)
    }
}

/// An ordered set of named columns with row-major data. Column order is
/// insertion order from the source; every row holds one cell per column,
/// aligned by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cells of one column, in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().map(move |row| &row.cells[index])
    }

    /// True when the named column exists and every value in it is missing.
    /// A zero-row dataset counts as empty.
    pub fn column_is_empty(&self, name: &str) -> Option<bool> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).all(CellValue::is_missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_is_empty_distinguishes_absent_from_all_missing() {
        let mut dataset = Dataset::new(vec!["A".to_string()]);
        dataset.push_row(Row::new(vec![CellValue::Missing]));
        assert_eq!(dataset.column_is_empty("A"), Some(true));
        assert_eq!(dataset.column_is_empty("B"), None);
    }

    #[test]
    fn zero_row_column_counts_as_empty() {
        let dataset = Dataset::new(vec!["A".to_string()]);
        assert_eq!(dataset.column_is_empty("A"), Some(true));
    }

    #[test]
    fn non_missing_value_makes_column_non_empty() {
        let mut dataset = Dataset::new(vec!["A".to_string()]);
        dataset.push_row(Row::new(vec![CellValue::Missing]));
        dataset.push_row(Row::new(vec![CellValue::Text("x".to_string())]));
        assert_eq!(dataset.column_is_empty("A"), Some(false));
    }

    #[test]
    fn render_drops_trailing_zero_fraction() {
        assert_eq!(CellValue::Number(60614.0).render().as_deref(), Some("60614"));
        assert_eq!(CellValue::Number(41.85).render().as_deref(), Some("41.85"));
        assert_eq!(CellValue::Missing.render(), None);
    }

    #[test]
    fn cell_value_serializes_tagged() {
        let json = serde_json::to_string(&CellValue::Text("x".to_string())).unwrap();
        let round: CellValue = serde_json::from_str(&json).unwrap();
        assert_eq!(round, CellValue::Text("x".to_string()));
    }
}
