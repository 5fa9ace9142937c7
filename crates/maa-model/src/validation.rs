//! Validation outcome types. A failing validation is a normal structured
//! result, not an error: the upload boundary turns it into a rejection
//! response and the preview boundary renders it verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a required field failed. "Not found" (no column at all) and "empty"
/// (column present, every value missing) are distinct causes and are never
/// conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCause {
    NotFound,
    Empty,
}

impl FailureCause {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::NotFound => "column not found",
            Self::Empty => "column is empty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReason {
    pub field: String,
    pub cause: FailureCause,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.field, self.cause.describe())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub pass: bool,
    /// One reason per failing required field, in the order the required
    /// fields were given.
    pub reasons: Vec<ValidationReason>,
}

impl ValidationResult {
    /// Pass iff there are no reasons.
    pub fn from_reasons(reasons: Vec<ValidationReason>) -> Self {
        Self {
            pass: reasons.is_empty(),
            reasons,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}
