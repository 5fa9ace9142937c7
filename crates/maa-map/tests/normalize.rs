use maa_map::normalize;
use maa_model::{AliasTable, CellValue, Dataset, FieldSpec, Row};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn address_table() -> AliasTable {
    AliasTable::new(vec![
        FieldSpec::new("Address", &["street_address"]),
        FieldSpec::new("City", &["city_name"]),
        FieldSpec::new("State", &["state_code"]),
    ])
    .unwrap()
}

fn listing_dataset() -> Dataset {
    let mut dataset = Dataset::new(vec![
        "street_address".to_string(),
        "city_name".to_string(),
        "state_code".to_string(),
    ]);
    dataset.push_row(Row::new(vec![
        text("123 Main St"),
        text("Chicago"),
        text("IL"),
    ]));
    dataset
}

#[test]
fn maps_aliased_columns_onto_canonical_names() {
    let (output, log) = normalize(&listing_dataset(), &address_table());

    assert_eq!(output.columns, ["Address", "City", "State"]);
    assert_eq!(output.height(), 1);
    assert_eq!(output.rows[0].cells[0], text("123 Main St"));
    assert_eq!(output.rows[0].cells[1], text("Chicago"));
    assert_eq!(output.rows[0].cells[2], text("IL"));
    assert_eq!(log.mapped_count(), 3);
    assert_eq!(log.source_for("City"), Some("city_name"));
}

#[test]
fn output_always_has_one_column_per_table_entry() {
    // More source columns than fields, none matching.
    let wide = Dataset::new(vec![
        "alpha".to_string(),
        "beta".to_string(),
        "gamma".to_string(),
        "delta".to_string(),
    ]);
    let (output, log) = normalize(&wide, &address_table());
    assert_eq!(output.width(), 3);
    assert_eq!(log.mapped_count(), 0);

    // Fewer source columns than fields.
    let narrow = Dataset::new(vec!["city_name".to_string()]);
    let (output, _) = normalize(&narrow, &address_table());
    assert_eq!(output.width(), 3);
}

#[test]
fn unmatched_field_becomes_all_missing_column() {
    let mut input = Dataset::new(vec!["street_address".to_string()]);
    input.push_row(Row::new(vec![text("123 Main St")]));
    input.push_row(Row::new(vec![text("55 Lake Dr")]));

    let (output, log) = normalize(&input, &address_table());
    assert_eq!(output.height(), 2);
    assert_eq!(output.column_is_empty("City"), Some(true));
    assert_eq!(output.column_is_empty("State"), Some(true));
    assert_eq!(log.source_for("City"), None);
}

#[test]
fn matching_ignores_case_and_padding() {
    let mut input = Dataset::new(vec![" STREET_ADDRESS ".to_string()]);
    input.push_row(Row::new(vec![text("123 Main St")]));
    let (output, log) = normalize(&input, &address_table());
    assert_eq!(log.source_for("Address"), Some(" STREET_ADDRESS "));
    assert_eq!(output.rows[0].cells[0], text("123 Main St"));
}

#[test]
fn overlapping_aliases_resolve_first_field_in_table_order() {
    let table = AliasTable::new(vec![
        FieldSpec::new("Primary", &["region"]),
        FieldSpec::new("Secondary", &["region"]),
    ])
    .unwrap();
    let mut input = Dataset::new(vec!["region".to_string()]);
    input.push_row(Row::new(vec![text("Midwest")]));

    let (output, log) = normalize(&input, &table);
    assert_eq!(log.source_for("Primary"), Some("region"));
    assert_eq!(log.source_for("Secondary"), None);
    assert_eq!(output.rows[0].cells[0], text("Midwest"));
    assert_eq!(output.rows[0].cells[1], CellValue::Missing);
}

#[test]
fn normalization_is_deterministic() {
    let input = listing_dataset();
    let table = address_table();
    let (first_data, first_log) = normalize(&input, &table);
    let (second_data, second_log) = normalize(&input, &table);
    assert_eq!(first_data, second_data);
    assert_eq!(first_log, second_log);
}

#[test]
fn empty_alias_table_yields_zero_columns() {
    let table = AliasTable::new(vec![]).unwrap();
    let (output, log) = normalize(&listing_dataset(), &table);
    assert_eq!(output.width(), 0);
    assert_eq!(output.height(), 1);
    assert!(log.entries.is_empty());
}
