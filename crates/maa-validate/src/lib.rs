//! Required-field validation. A failing check is a normal structured
//! result, not an error; the upload boundary decides what to do with it.

use maa_model::{Dataset, FailureCause, ValidationReason, ValidationResult};

/// Checks that every required field is present and non-empty.
///
/// "Not found" means the column is absent from the dataset; "empty" means
/// it exists but every value is missing (a zero-row dataset counts as
/// empty). Reasons come back in the order `required` was given, one per
/// failing field. Total function.
pub fn validate(dataset: &Dataset, required: &[String]) -> ValidationResult {
    let mut reasons = Vec::new();
    for field in required {
        match dataset.column_is_empty(field) {
            None => reasons.push(ValidationReason {
                field: field.clone(),
                cause: FailureCause::NotFound,
            }),
            Some(true) => reasons.push(ValidationReason {
                field: field.clone(),
                cause: FailureCause::Empty,
            }),
            Some(false) => {}
        }
    }
    if !reasons.is_empty() {
        tracing::info!(failing = reasons.len(), "required-field validation failed");
    }
    ValidationResult::from_reasons(reasons)
}
