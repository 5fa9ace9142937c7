//! Pipeline configuration: which canonical fields exist, what source
//! names they accept, which are required, and whether a region column
//! gets standardized. Built once, shared read-only across invocations.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use maa_model::{AliasTable, FieldSpec, RegionCodeTable};
use maa_transform::us_states;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Ordered canonical fields with their accepted source aliases.
    pub fields: AliasTable,
    /// Canonical names that must be present and non-empty.
    pub required: Vec<String>,
    /// Canonical column to run region-code standardization on, if any.
    #[serde(default)]
    pub region_column: Option<String>,
    /// Region name-to-code table; defaults to the built-in US state table.
    #[serde(default = "us_states")]
    pub region_codes: RegionCodeTable,
}

impl PipelineConfig {
    /// The upload schema the market-analysis service expects by default.
    pub fn default_market_schema() -> Self {
        let fields = AliasTable::new(vec![
            FieldSpec::new(
                "Address",
                &["street_address", "address_1", "address1", "street", "site_address"],
            ),
            FieldSpec::new("City", &["city_name", "municipality", "town"]),
            FieldSpec::new("State", &["state_code", "state_name", "province", "st"]),
            FieldSpec::new("ZipCode", &["zip", "zip_code", "postal_code", "postcode"]),
            FieldSpec::new("County", &["county_name", "parish"]),
            FieldSpec::new("Latitude", &["lat", "y"]),
            FieldSpec::new("Longitude", &["lon", "lng", "long", "x"]),
        ])
        .expect("default schema has distinct canonical names");
        Self {
            fields,
            required: vec![
                "Address".to_string(),
                "City".to_string(),
                "State".to_string(),
            ],
            region_column: Some("State".to_string()),
            region_codes: us_states(),
        }
    }

    /// Loads a JSON config file, re-validating the alias table so duplicate
    /// canonical names are rejected with a useful message.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse config file {}", path.display()))?;
        AliasTable::new(config.fields.fields().to_vec())
            .with_context(|| format!("invalid alias table in {}", path.display()))?;
        Ok(config)
    }
}
