use crate::models::registration_model::Field;

/// One user action on the registration modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Open,
    Close,
    Set { field: Field, value: String },
    Show,
    Plans,
    Errors,
    Submit,
    Help,
    Quit,
}
