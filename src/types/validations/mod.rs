use crate::{models::registration_model::Field, utils::locale_utils::Messages};

pub type ValidationResult = Result<(), String>;

/// A single check in a field's rule chain.
pub type ValidationFn = fn(&str, &Messages) -> ValidationResult;

/// A check shared by several fields; messages are looked up under the field key.
pub type FieldValidationFn = fn(Field, &str, &Messages) -> ValidationResult;
