//! Region-code standardization: full region names become short codes.
//!
//! Independent of validation — it rewrites values in one column and never
//! changes which columns exist, so it can run before or after the
//! validator without affecting presence checks.

use maa_model::{CellValue, Dataset, RegionCodeTable};

/// Replaces every non-missing value in `target_column` with its region
/// code: an exact (case-insensitive, trimmed) table hit wins; anything
/// else is uppercased and truncated to two characters as a best-effort
/// fallback. Missing cells and all other columns pass through unchanged.
/// A dataset without the target column is returned as-is.
pub fn standardize_region_codes(
    input: &Dataset,
    target_column: &str,
    table: &RegionCodeTable,
) -> Dataset {
    let mut output = input.clone();
    let Some(index) = output.column_index(target_column) else {
        tracing::debug!(column = target_column, "region column absent, nothing to standardize");
        return output;
    };
    for row in &mut output.rows {
        let cell = &mut row.cells[index];
        if let Some(text) = cell.render() {
            let code = match table.code_for(&text) {
                Some(code) => code.to_string(),
                None => fallback_code(&text),
            };
            *cell = CellValue::Text(code);
        }
    }
    output
}

/// Uppercase the whole value, then keep the first two characters. The
/// order matters: uppercasing can expand a char ("ß" becomes "SS"), and
/// truncating first would let the result grow past two. Values already
/// shaped like codes ("tx", "TX ") come through unchanged modulo case.
fn fallback_code(value: &str) -> String {
    value
        .trim()
        .chars()
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Built-in name-to-code table for the 50 US states plus DC.
pub fn us_states() -> RegionCodeTable {
    RegionCodeTable::from_pairs([
        ("Alabama", "AL"),
        ("Alaska", "AK"),
        ("Arizona", "AZ"),
        ("Arkansas", "AR"),
        ("California", "CA"),
        ("Colorado", "CO"),
        ("Connecticut", "CT"),
        ("Delaware", "DE"),
        ("District of Columbia", "DC"),
        ("Florida", "FL"),
        ("Georgia", "GA"),
        ("Hawaii", "HI"),
        ("Idaho", "ID"),
        ("Illinois", "IL"),
        ("Indiana", "IN"),
        ("Iowa", "IA"),
        ("Kansas", "KS"),
        ("Kentucky", "KY"),
        ("Louisiana", "LA"),
        ("Maine", "ME"),
        ("Maryland", "MD"),
        ("Massachusetts", "MA"),
        ("Michigan", "MI"),
        ("Minnesota", "MN"),
        ("Mississippi", "MS"),
        ("Missouri", "MO"),
        ("Montana", "MT"),
        ("Nebraska", "NE"),
        ("Nevada", "NV"),
        ("New Hampshire", "NH"),
        ("New Jersey", "NJ"),
        ("New Mexico", "NM"),
        ("New York", "NY"),
        ("North Carolina", "NC"),
        ("North Dakota", "ND"),
        ("Ohio", "OH"),
        ("Oklahoma", "OK"),
        ("Oregon", "OR"),
        ("Pennsylvania", "PA"),
        ("Rhode Island", "RI"),
        ("South Carolina", "SC"),
        ("South Dakota", "SD"),
        ("Tennessee", "TN"),
        ("Texas", "TX"),
        ("Utah", "UT"),
        ("Vermont", "VT"),
        ("Virginia", "VA"),
        ("Washington", "WA"),
        ("West Virginia", "WV"),
        ("Wisconsin", "WI"),
        ("Wyoming", "WY"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use maa_model::Row;

    fn state_dataset(values: Vec<CellValue>) -> Dataset {
        let mut dataset = Dataset::new(vec!["State".to_string()]);
        for value in values {
            dataset.push_row(Row::new(vec![value]));
        }
        dataset
    }

    #[test]
    fn names_map_codes_pass_and_unknowns_truncate() {
        let input = state_dataset(vec![
            CellValue::Text("Illinois".to_string()),
            CellValue::Text("TX".to_string()),
            CellValue::Text("massachusetts".to_string()),
        ]);
        let output = standardize_region_codes(&input, "State", &us_states());
        let values: Vec<Option<String>> =
            output.rows.iter().map(|r| r.cells[0].render()).collect();
        assert_eq!(
            values,
            vec![
                Some("IL".to_string()),
                Some("TX".to_string()),
                Some("MA".to_string())
            ]
        );
    }

    #[test]
    fn fallback_never_exceeds_two_characters() {
        // "ß" uppercases to "SS", so truncation has to happen after the
        // case change.
        let input = state_dataset(vec![CellValue::Text("ßavaria".to_string())]);
        let output = standardize_region_codes(&input, "State", &us_states());
        assert_eq!(output.rows[0].cells[0], CellValue::Text("SS".to_string()));
    }

    #[test]
    fn missing_cells_pass_through() {
        let input = state_dataset(vec![CellValue::Missing]);
        let output = standardize_region_codes(&input, "State", &us_states());
        assert_eq!(output.rows[0].cells[0], CellValue::Missing);
    }

    #[test]
    fn absent_target_column_is_a_no_op() {
        let input = state_dataset(vec![CellValue::Text("Illinois".to_string())]);
        let output = standardize_region_codes(&input, "Province", &us_states());
        assert_eq!(output, input);
    }

    #[test]
    fn numeric_cells_fall_through_the_text_path() {
        let input = state_dataset(vec![CellValue::Number(48.0)]);
        let output = standardize_region_codes(&input, "State", &us_states());
        assert_eq!(output.rows[0].cells[0], CellValue::Text("48".to_string()));
    }

    #[test]
    fn us_table_covers_states_and_dc() {
        let table = us_states();
        assert_eq!(table.len(), 51);
        assert_eq!(table.code_for("district of columbia"), Some("DC"));
    }
}
