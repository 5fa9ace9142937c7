use serde::{Deserialize, Serialize};

/// A source column that came close to a canonical field without any alias
/// matching. Diagnostic only; never used for the actual mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseMatch {
    pub column: String,
    pub similarity: f32,
}

/// Which source column (if any) supplied one canonical field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub canonical: String,
    /// Source column whose values were copied, `None` when no alias matched.
    pub source: Option<String>,
    /// Near-miss suggestion, populated only when `source` is `None`.
    pub closest: Option<CloseMatch>,
}

/// Per-field record of how a normalization resolved, in alias-table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingLog {
    pub entries: Vec<FieldMapping>,
}

impl MappingLog {
    pub fn source_for(&self, canonical: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.canonical == canonical)
            .and_then(|e| e.source.as_deref())
    }

    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|e| e.source.is_some()).count()
    }

    pub fn unmapped(&self) -> impl Iterator<Item = &FieldMapping> {
        self.entries.iter().filter(|e| e.source.is_none())
    }
}
