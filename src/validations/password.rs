use validator::ValidationError;

use crate::{
    constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH},
    types::validations::ValidationFn,
    utils::{locale_utils::Messages, validation_utils::add_secret_error},
};

fn has_min_length(password: &str, messages: &Messages) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(messages.get_validation_message(
            "password.too_short",
            &format!(
                "Password must contain {}-{} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            ),
        ));
    }
    Ok(())
}

fn has_max_length(password: &str, messages: &Messages) -> Result<(), String> {
    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(messages.get_validation_message(
            "password.too_long",
            &format!(
                "Password must contain {}-{} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            ),
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str, messages: &Messages) -> Result<(), ValidationError> {
    let validations: [ValidationFn; 2] = [has_min_length, has_max_length];

    let errors: Vec<String> = validations
        .iter()
        .filter_map(|validate_fn| validate_fn(password, messages).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        let concatenated_errors = errors.join(", ");
        Err(add_secret_error("password.invalid", concatenated_errors))
    }
}

pub fn validate_confirm_password(
    password: &str,
    confirm_password: &str,
    messages: &Messages,
) -> Result<(), ValidationError> {
    if password == confirm_password {
        Ok(())
    } else {
        Err(add_secret_error(
            "confirmPassword.invalid",
            messages.get_validation_message("confirmPassword.mismatch", "Passwords do not match"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length_bounds() {
        let messages = Messages::default();
        assert!(validate_password("abc", &messages).is_err());
        assert!(validate_password("abcde", &messages).is_err());
        assert!(validate_password("abcdef", &messages).is_ok());
        assert!(validate_password("abcdefghijkl", &messages).is_ok());
        assert!(validate_password("abcdefghijklm", &messages).is_err());
        assert!(validate_password("", &messages).is_err());
    }

    #[test]
    fn test_password_length_counts_characters() {
        let messages = Messages::default();
        assert!(validate_password("รหัสผ่าน", &messages).is_ok());
    }

    #[test]
    fn test_password_error_hides_value() {
        let err = validate_password("abc", &Messages::default()).unwrap_err();
        assert_eq!(err.code, "password.invalid");
        assert_eq!(
            err.message.as_deref(),
            Some("Password must contain 6-12 characters")
        );
        assert!(err.params.is_empty());
    }

    #[test]
    fn test_confirm_password() {
        let messages = Messages::default();
        assert!(validate_confirm_password("abcdef", "abcdef", &messages).is_ok());

        let err = validate_confirm_password("abcdef", "abcdeg", &messages).unwrap_err();
        assert_eq!(err.code, "confirmPassword.invalid");
        assert_eq!(err.message.as_deref(), Some("Passwords do not match"));
        assert!(err.params.is_empty());
    }
}
