//! Alias table: ordered canonical fields and the source names they accept.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Comparison key shared by the alias matcher and the duplicate-header
/// check: trimmed, lowercased.
pub fn match_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One canonical output field and the source column names that map to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub canonical: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl FieldSpec {
    pub fn new(canonical: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            canonical: canonical.into(),
            aliases: aliases.iter().map(|&a| a.to_string()).collect(),
        }
    }
}

/// Ordered mapping from canonical field names to accepted aliases.
///
/// Order is significant: when two fields' alias lists both cover the same
/// source column, the field that appears first in the table claims it and
/// the later field is reported as not found. Callers wanting unambiguous
/// mappings should keep alias sets disjoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    fields: Vec<FieldSpec>,
}

impl AliasTable {
    /// Builds a table, rejecting duplicate canonical names (compared with
    /// [`match_key`]).
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for field in &fields {
            if !seen.insert(match_key(&field.canonical)) {
                return Err(ModelError::DuplicateCanonical(field.canonical.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.canonical.as_str())
    }
}
