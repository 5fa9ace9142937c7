use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alias::match_key;

/// Read-only lookup from region display names to short codes. Keys are
/// stored under their [`match_key`] form so lookups are case- and
/// whitespace-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCodeTable {
    map: BTreeMap<String, String>,
}

impl RegionCodeTable {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let map = pairs
            .into_iter()
            .map(|(name, code)| (match_key(name.as_ref()), code.into()))
            .collect();
        Self { map }
    }

    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.map.get(&match_key(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        let table = RegionCodeTable::from_pairs([("Illinois", "IL")]);
        assert_eq!(table.code_for("  illinois "), Some("IL"));
        assert_eq!(table.code_for("ILLINOIS"), Some("IL"));
        assert_eq!(table.code_for("Iowa"), None);
    }
}
