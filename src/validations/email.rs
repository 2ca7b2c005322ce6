use email_address::EmailAddress;
use validator::ValidationError;

use crate::{
    types::validations::ValidationFn,
    utils::{locale_utils::Messages, validation_utils::add_error},
};

const MAX_EMAIL_LENGTH: usize = 254;
const MIN_TLD_LENGTH: usize = 2;

fn has_max_length(email: &str, messages: &Messages) -> Result<(), String> {
    let length = email.len();
    if length > MAX_EMAIL_LENGTH {
        return Err(messages.get_validation_message(
            "email.too_long",
            &format!("Email must be at most {} characters", MAX_EMAIL_LENGTH),
        ));
    }
    Ok(())
}

fn has_at_and_dot(email: &str, messages: &Messages) -> Result<(), String> {
    if !email.contains('@') || !email.contains('.') {
        Err(messages.get_validation_message(
            "email.missing_at_or_dot",
            "Email must contain '@' and '.'",
        ))
    } else {
        Ok(())
    }
}

fn is_at_before_dot(email: &str, messages: &Messages) -> Result<(), String> {
    if let (Some(at_index), Some(dot_index)) = (email.find('@'), email.rfind('.')) {
        if at_index >= dot_index {
            return Err(messages.get_validation_message(
                "email.at_before_dot",
                "The '@' must come before the last '.'",
            ));
        }
    }
    Ok(())
}

fn has_no_invalid_chars(email: &str, messages: &Messages) -> Result<(), String> {
    if email.chars().any(|c| c.is_whitespace() || !c.is_ascii()) {
        Err(messages.get_validation_message(
            "email.invalid_chars",
            "Email must not contain spaces or non-ASCII characters",
        ))
    } else {
        Ok(())
    }
}

fn has_no_consecutive_dots(email: &str, messages: &Messages) -> Result<(), String> {
    if email.contains("..") {
        Err(messages.get_validation_message(
            "email.consecutive_dots",
            "Email must not contain consecutive dots",
        ))
    } else {
        Ok(())
    }
}

fn has_no_leading_or_trailing_dot(email: &str, messages: &Messages) -> Result<(), String> {
    if email.starts_with('.') || email.ends_with('.') {
        Err(messages.get_validation_message(
            "email.starts_or_ends_with_dot",
            "Email must not start or end with a dot",
        ))
    } else {
        Ok(())
    }
}

fn domain_starts_without_dot(email: &str, messages: &Messages) -> Result<(), String> {
    if let Some(domain) = get_domain(email) {
        if domain.starts_with('.') {
            return Err(messages.get_validation_message(
                "email.domain_starts_with_dot",
                "The domain part must not start with a dot",
            ));
        }
    }
    Ok(())
}

fn has_valid_tld_format(email: &str, messages: &Messages) -> Result<(), String> {
    if let Some(domain) = get_domain(email) {
        if let Some(last_dot_index) = domain.rfind('.') {
            let tld = &domain[last_dot_index + 1..];
            if tld.len() < MIN_TLD_LENGTH || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(messages.get_validation_message(
                    "email.invalid_tld",
                    &format!(
                        "The TLD (after the last '.') must be at least {} characters long and alphabetic",
                        MIN_TLD_LENGTH
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn is_overall_format_valid(email: &str, messages: &Messages) -> Result<(), String> {
    if !EmailAddress::is_valid(email) {
        Err(messages.get_validation_message("email.invalid_format", "Invalid email format"))
    } else {
        Ok(())
    }
}

fn get_domain(email: &str) -> Option<&str> {
    email.split('@').nth(1)
}

pub fn validate_email(email: &str, messages: &Messages) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        let required = messages.get_validation_message("email.required", "Email is required");
        return Err(add_error("email.invalid", required, email));
    }

    let validations: [ValidationFn; 8] = [
        has_max_length,
        has_no_invalid_chars,
        has_at_and_dot,
        is_at_before_dot,
        has_no_consecutive_dots,
        has_no_leading_or_trailing_dot,
        domain_starts_without_dot,
        has_valid_tld_format,
    ];

    let mut errors: Vec<String> = validations
        .iter()
        .filter_map(|validate| validate(email, messages).err())
        .collect();

    if errors.is_empty() {
        if let Err(msg) = is_overall_format_valid(email, messages) {
            errors.push(msg);
        }
    }

    if !errors.is_empty() {
        let concatenated_errors = errors.join(", ");
        return Err(add_error("email.invalid", concatenated_errors, email));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(email: &str) -> String {
        validate_email(email, &Messages::default())
            .unwrap_err()
            .message
            .map(|m| m.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_valid_emails() {
        let messages = Messages::default();
        assert!(validate_email("runner@cmu.ac.th", &messages).is_ok());
        assert!(validate_email("first.last+run@example.com", &messages).is_ok());
        assert!(validate_email("  padded@example.com ", &messages).is_ok());
    }

    #[test]
    fn test_empty_email_reports_only_required() {
        assert_eq!(message_of(""), "Email is required");
        assert_eq!(message_of("   "), "Email is required");
    }

    #[test]
    fn test_invalid_emails() {
        let messages = Messages::default();
        for email in [
            "runner",
            "runner@cmu",
            "runner.cmu@ac",
            "run ner@cmu.ac.th",
            "runner@cmu..ac.th",
            ".runner@cmu.ac.th",
            "runner@.cmu.ac.th",
            "runner@cmu.ac.t",
            "runner@cmu.ac.t1",
            "runner@@cmu.ac.th",
        ] {
            let err = validate_email(email, &messages).unwrap_err();
            assert_eq!(err.code, "email.invalid", "{email}");
        }
    }

    fn email_of_length(length: usize) -> String {
        // 64-char local part, labels of at most 63 chars
        let local = "a".repeat(64);
        let tail = length - 64 - 1 - (63 + 1 + 63 + 1) - ".com".len();
        format!(
            "{}@{}.{}.{}.com",
            local,
            "b".repeat(63),
            "c".repeat(63),
            "d".repeat(tail)
        )
    }

    #[test]
    fn test_length_limit_is_inclusive() {
        let messages = Messages::default();
        let longest = email_of_length(MAX_EMAIL_LENGTH);
        assert_eq!(longest.len(), 254);
        assert!(validate_email(&longest, &messages).is_ok());

        let too_long = email_of_length(MAX_EMAIL_LENGTH + 1);
        assert_eq!(too_long.len(), 255);
        assert_eq!(message_of(&too_long), "Email must be at most 254 characters");
    }

    #[test]
    fn test_messages_are_joined() {
        assert_eq!(
            message_of("a b"),
            "Email must not contain spaces or non-ASCII characters, Email must contain '@' and '.'"
        );
    }
}
