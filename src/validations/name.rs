use validator::ValidationError;

use crate::{
    models::registration_model::Field,
    types::validations::FieldValidationFn,
    utils::{locale_utils::Messages, validation_utils::add_error},
};

const MAX_NAME_LENGTH: usize = 100;

fn label(field: Field) -> &'static str {
    match field {
        Field::Fname => "First name",
        Field::Lname => "Last name",
        _ => "Name",
    }
}

fn is_not_empty(field: Field, name: &str, messages: &Messages) -> Result<(), String> {
    if name.trim().is_empty() {
        Err(messages.get_validation_message(
            &format!("{}.required", field),
            &format!("{} is required", label(field)),
        ))
    } else {
        Ok(())
    }
}

fn has_max_length(field: Field, name: &str, messages: &Messages) -> Result<(), String> {
    if name.trim().chars().count() > MAX_NAME_LENGTH {
        Err(messages.get_validation_message(
            &format!("{}.too_long", field),
            &format!(
                "{} must be at most {} characters",
                label(field),
                MAX_NAME_LENGTH
            ),
        ))
    } else {
        Ok(())
    }
}

/// Validates the first or last name field.
pub fn validate_name(field: Field, name: &str, messages: &Messages) -> Result<(), ValidationError> {
    let validations: [FieldValidationFn; 2] = [is_not_empty, has_max_length];

    let errors: Vec<String> = validations
        .iter()
        .filter_map(|validate| validate(field, name, messages).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        let concatenated_errors = errors.join(", ");
        Err(add_error(
            format!("{}.invalid", field),
            concatenated_errors,
            name,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        let messages = Messages::default();
        assert!(validate_name(Field::Fname, "Somchai", &messages).is_ok());
        assert!(validate_name(Field::Lname, "Jaidee", &messages).is_ok());
    }

    #[test]
    fn test_blank_name_is_required() {
        let messages = Messages::default();
        let err = validate_name(Field::Fname, "   ", &messages).unwrap_err();
        assert_eq!(err.code, "fname.invalid");
        assert_eq!(err.message.as_deref(), Some("First name is required"));

        let err = validate_name(Field::Lname, "", &messages).unwrap_err();
        assert_eq!(err.code, "lname.invalid");
        assert_eq!(err.message.as_deref(), Some("Last name is required"));
    }

    #[test]
    fn test_overlong_name() {
        let messages = Messages::default();
        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        let err = validate_name(Field::Fname, &name, &messages).unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("First name must be at most 100 characters")
        );
        assert_eq!(err.params["value"], serde_json::json!(name));
    }
}
