pub mod alias;
pub mod dataset;
pub mod error;
pub mod mapping;
pub mod region;
pub mod validation;

pub use alias::{AliasTable, FieldSpec, match_key};
pub use dataset::{CellValue, Dataset, Row};
pub use error::{ModelError, Result};
pub use mapping::{CloseMatch, FieldMapping, MappingLog};
pub use region::RegionCodeTable;
pub use validation::{FailureCause, ValidationReason, ValidationResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_log_lookups() {
        let log = MappingLog {
            entries: vec![
                FieldMapping {
                    canonical: "Address".to_string(),
                    source: Some("street_address".to_string()),
                    closest: None,
                },
                FieldMapping {
                    canonical: "City".to_string(),
                    source: None,
                    closest: Some(CloseMatch {
                        column: "cty".to_string(),
                        similarity: 0.9,
                    }),
                },
            ],
        };
        assert_eq!(log.source_for("Address"), Some("street_address"));
        assert_eq!(log.source_for("City"), None);
        assert_eq!(log.mapped_count(), 1);
        assert_eq!(log.unmapped().count(), 1);
    }

    #[test]
    fn alias_table_round_trips_through_json() {
        let table = AliasTable::new(vec![
            FieldSpec::new("Address", &["street_address", "addr"]),
            FieldSpec::new("City", &["city_name"]),
        ])
        .unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let round: AliasTable = serde_json::from_str(&json).unwrap();
        assert_eq!(round, table);
    }
}
