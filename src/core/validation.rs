//! Bundle validation entry points.

use std::path::Path;

use crate::lint::{ValidationEngine, ValidationResult};

/// Validate the bundle at `path` with the built-in rule chain.
#[must_use]
pub fn validate_skill(path: &Path) -> ValidationResult {
    ValidationEngine::new().validate(path)
}

/// Validate and flatten the verdict to `(valid, message)`.
///
/// The message is `"Skill is valid!"` on success and the failing rule's
/// message otherwise.
#[must_use]
pub fn quick_validate(path: &Path) -> (bool, String) {
    let result = validate_skill(path);
    (result.is_valid(), result.message().to_string())
}
