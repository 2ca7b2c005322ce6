use thiserror::Error;
use validator::ValidationErrors;

use crate::models::registration_model::Field;

/// Input the modal surface could not apply to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Missing argument <{0}>")]
    MissingArgument(&'static str),

    #[error("'{value}' is not a valid value for {field}")]
    InvalidValue { field: Field, value: String },

    #[error("{0} cannot be set directly")]
    NotEditable(Field),

    #[error("The registration form is closed, type 'open'")]
    ModalClosed,
}

impl InputError {
    /// Key of the localized text in the `form` namespace.
    pub fn message_key(&self) -> &'static str {
        match self {
            InputError::UnknownCommand(_) => "input.unknown_command",
            InputError::UnknownField(_) => "input.unknown_field",
            InputError::MissingArgument(_) => "input.missing_argument",
            InputError::InvalidValue { .. } => "input.invalid_value",
            InputError::NotEditable(_) => "input.not_editable",
            InputError::ModalClosed => "input.modal_closed",
        }
    }

    /// The offending command, field or value, substituted for `{value}`
    /// in localized texts.
    pub fn subject(&self) -> String {
        match self {
            InputError::UnknownCommand(token) | InputError::UnknownField(token) => token.clone(),
            InputError::MissingArgument(argument) => argument.to_string(),
            InputError::InvalidValue { field, value } => format!("{} = '{}'", field, value),
            InputError::NotEditable(field) => field.to_string(),
            InputError::ModalClosed => String::new(),
        }
    }
}

/// Why a submission was refused.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("The registration form is closed")]
    ModalClosed,

    #[error("Terms and conditions must be accepted before registering")]
    TermsNotAccepted,

    #[error("Invalid registration data: {0}")]
    Invalid(ValidationErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InputError::UnknownCommand("dance".to_string()).to_string(),
            "Unknown command 'dance', type 'help' for a list"
        );
        assert_eq!(
            InputError::InvalidValue {
                field: Field::Plan,
                value: "ultra".to_string()
            }
            .to_string(),
            "'ultra' is not a valid value for plan"
        );
        assert_eq!(
            InputError::NotEditable(Field::Total).to_string(),
            "total cannot be set directly"
        );
        assert_eq!(InputError::MissingArgument("field").subject(), "field");
    }

    #[test]
    fn test_submit_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SubmitError::TermsNotAccepted);
        assert_eq!(
            err.to_string(),
            "Terms and conditions must be accepted before registering"
        );
    }
}
