use std::collections::BTreeSet;

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;

use maa_model::{
    AliasTable, CellValue, CloseMatch, Dataset, FieldMapping, FieldSpec, MappingLog, Row,
    match_key,
};

/// Minimum Jaro-Winkler similarity before an unmatched field gets a
/// "did you mean" suggestion in the mapping log.
pub const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Maps a dataset's columns onto the alias table's canonical fields.
///
/// Total function: the output always has exactly one column per table
/// entry, in table order, with the input's row count. A field with no
/// match becomes an all-missing column. Matching is case-insensitive and
/// trimmed; the canonical name itself is accepted ahead of the alias
/// list.
///
/// Tie-break: fields are resolved in table order and each source column
/// can be claimed once. When two fields' aliases cover the same source
/// column, the field earlier in the table takes it; the later field keeps
/// scanning its remaining aliases and reports not-found if none are left.
/// This is deliberate, not an error.
pub fn normalize(input: &Dataset, table: &AliasTable) -> (Dataset, MappingLog) {
    let source_keys: Vec<String> = input.columns.iter().map(|c| match_key(c)).collect();

    let mut claimed: BTreeSet<usize> = BTreeSet::new();
    let mut picks: Vec<Option<usize>> = Vec::with_capacity(table.len());
    for field in table.fields() {
        let mut pick = None;
        for candidate in std::iter::once(field.canonical.as_str())
            .chain(field.aliases.iter().map(String::as_str))
        {
            let key = match_key(candidate);
            let found = source_keys
                .iter()
                .enumerate()
                .find(|(index, source)| **source == key && !claimed.contains(index))
                .map(|(index, _)| index);
            if let Some(index) = found {
                pick = Some(index);
                break;
            }
        }
        if let Some(index) = pick {
            claimed.insert(index);
        }
        picks.push(pick);
    }

    let mut log = MappingLog::default();
    for (field, pick) in table.fields().iter().zip(&picks) {
        let entry = match pick {
            Some(index) => FieldMapping {
                canonical: field.canonical.clone(),
                source: Some(input.columns[*index].clone()),
                closest: None,
            },
            None => FieldMapping {
                canonical: field.canonical.clone(),
                source: None,
                closest: closest_unclaimed(field, input, &claimed),
            },
        };
        log.entries.push(entry);
    }

    let mut output = Dataset::new(table.canonical_names().map(String::from).collect());
    for row in &input.rows {
        let cells = picks
            .iter()
            .map(|pick| match pick {
                Some(index) => row.cells[*index].clone(),
                None => CellValue::Missing,
            })
            .collect();
        output.push_row(Row::new(cells));
    }

    tracing::debug!(
        mapped = log.mapped_count(),
        total = table.len(),
        "normalized columns"
    );
    (output, log)
}

/// Best unclaimed source column by Jaro-Winkler similarity against the
/// field's canonical name and aliases. Diagnostic only.
fn closest_unclaimed(
    field: &FieldSpec,
    input: &Dataset,
    claimed: &BTreeSet<usize>,
) -> Option<CloseMatch> {
    let mut best: Option<CloseMatch> = None;
    for (index, column) in input.columns.iter().enumerate() {
        if claimed.contains(&index) {
            continue;
        }
        let column_key = match_key(column);
        let score = std::iter::once(field.canonical.as_str())
            .chain(field.aliases.iter().map(String::as_str))
            .map(|candidate| jaro_similarity(match_key(candidate).chars(), column_key.chars()))
            .fold(0.0f64, f64::max);
        if score >= SUGGESTION_THRESHOLD
            && best.as_ref().is_none_or(|b| score > f64::from(b.similarity))
        {
            best = Some(CloseMatch {
                column: column.clone(),
                similarity: score as f32,
            });
        }
    }
    best
}
