use validator::ValidationError;

use crate::utils::{locale_utils::Messages, validation_utils::add_error};

pub fn validate_agree(agree: bool, messages: &Messages) -> Result<(), ValidationError> {
    if agree {
        Ok(())
    } else {
        Err(add_error(
            "agree.invalid",
            messages.get_validation_message(
                "agree.required",
                "You must accept the terms and conditions",
            ),
            "false",
        ))
    }
}
