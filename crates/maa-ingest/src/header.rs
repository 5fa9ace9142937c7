//! Header-row normalization shared by the delimited and spreadsheet readers.

use maa_model::match_key;

use crate::error::{IngestError, Result};

/// Trims header names and rejects structurally unusable header rows:
/// no columns at all, empty names, or duplicate names (case-insensitive,
/// trimmed — the same key the alias matcher uses).
///
/// Duplicate source columns are rejected rather than silently picking one;
/// which copy "wins" is unspecified upstream and guessing hides data loss.
pub(crate) fn build_columns<I, S>(raw: I, filename: &str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut columns = Vec::new();
    let mut seen = std::collections::BTreeSet::new();
    for (position, name) in raw.into_iter().enumerate() {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IngestError::unreadable(
                filename,
                format!("empty column name at position {}", position + 1),
            ));
        }
        if !seen.insert(match_key(trimmed)) {
            return Err(IngestError::unreadable(
                filename,
                format!("duplicate column name '{trimmed}'"),
            ));
        }
        columns.push(trimmed.to_string());
    }
    if columns.is_empty() {
        return Err(IngestError::unreadable(filename, "no header row"));
    }
    Ok(columns)
}
