use crate::model::{Student, StudentDraft};
use serde::Serialize;

pub const NAME_REQUIRED: &str = "name must not be empty";
pub const NAME_DUPLICATE: &str = "a student with this name already exists";
pub const AGE_INVALID: &str = "age must be greater than 0";
pub const GRADE_REQUIRED: &str = "grade must not be empty";

/// Per-field error messages; an empty string means the field is valid. The
/// UI renders all of them at once, which is why validation never
/// short-circuits on the first failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FieldErrors {
    pub name: String,
    pub age: String,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

/// Decide whether a draft may be submitted. Every rule group is evaluated
/// independently; the duplicate check compares trimmed names
/// case-insensitively and skips the record whose id is being edited.
/// Pure: no I/O, no mutation, deterministic.
pub fn validate_draft(draft: &StudentDraft, existing: &[Student]) -> Validation {
    let mut errors = FieldErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.name = NAME_REQUIRED.to_string();
    } else {
        let lowered = name.to_lowercase();
        let duplicate = existing
            .iter()
            .any(|s| s.name.to_lowercase() == lowered && Some(s.id) != draft.id);
        if duplicate {
            errors.name = NAME_DUPLICATE.to_string();
        }
    }

    match draft.age {
        Some(age) if age > 0 => {}
        _ => errors.age = AGE_INVALID.to_string(),
    }

    if draft.grade.trim().is_empty() {
        errors.grade = GRADE_REQUIRED.to_string();
    }

    let is_valid = errors.name.is_empty() && errors.age.is_empty() && errors.grade.is_empty();
    Validation { is_valid, errors }
}
