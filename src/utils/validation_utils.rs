use serde_json::json;
use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};
use strum::IntoEnumIterator;
use validator::{ValidationError, ValidationErrors};

use crate::{
    models::registration_model::{Field, RegistrationDraft},
    utils::locale_utils::Messages,
    validations::{
        coupon::validate_coupon_code,
        email::validate_email,
        name::validate_name,
        password::{validate_confirm_password, validate_password},
        terms::validate_agree,
    },
};

pub type FieldErrors = BTreeMap<Field, ValidationError>;

pub fn add_error(
    code: impl Into<Cow<'static, str>>,
    message: String,
    field_value: &str,
) -> ValidationError {
    ValidationError {
        code: code.into(),
        message: Some(Cow::Owned(message)),
        params: {
            let mut params = HashMap::new();
            params.insert("value".into(), json!(field_value));
            params
        },
    }
}

/// Like [`add_error`] but leaves the offending value out of the params.
pub fn add_secret_error(code: impl Into<Cow<'static, str>>, message: String) -> ValidationError {
    ValidationError {
        code: code.into(),
        message: Some(Cow::Owned(message)),
        params: HashMap::new(),
    }
}

/// Runs the rules that concern `field` against the whole draft, so
/// cross-field rules (confirmation, coupon) see current values.
pub fn validate_field(
    draft: &RegistrationDraft,
    field: Field,
    messages: &Messages,
) -> Result<(), ValidationError> {
    match field {
        Field::Fname => validate_name(field, draft.fname(), messages),
        Field::Lname => validate_name(field, draft.lname(), messages),
        Field::Email => validate_email(draft.email(), messages),
        Field::Password => validate_password(draft.password(), messages),
        Field::ConfirmPassword => {
            validate_confirm_password(draft.password(), draft.confirm_password(), messages)
        }
        Field::CouponCode => {
            validate_coupon_code(draft.have_coupon(), draft.coupon_code(), messages)
        }
        Field::Agree => validate_agree(draft.agree(), messages),
        Field::Plan | Field::Gender | Field::HaveCoupon | Field::Total => Ok(()),
    }
}

pub fn collect_field_errors(draft: &RegistrationDraft, messages: &Messages) -> FieldErrors {
    Field::iter()
        .filter_map(|field| {
            validate_field(draft, field, messages)
                .err()
                .map(|e| (field, e))
        })
        .collect()
}

pub fn to_validation_errors(field_errors: &FieldErrors) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (field, error) in field_errors {
        errors.add(field.as_key(), error.clone());
    }
    errors
}

pub fn validate_registration_data(
    draft: &RegistrationDraft,
    messages: &Messages,
) -> Result<(), ValidationErrors> {
    let field_errors = collect_field_errors(draft, messages);

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(to_validation_errors(&field_errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registration_model::Plan;

    fn valid_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.set_fname("Malee");
        draft.set_lname("Srisuk");
        draft.set_email("malee@cmu.ac.th");
        draft.set_password("abcdef");
        draft.set_confirm_password("abcdef");
        draft.set_plan(Plan::Half);
        draft.set_agree(true);
        draft.recompute_total();
        draft
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_registration_data(&valid_draft(), &Messages::default()).is_ok());
    }

    #[test]
    fn test_default_draft_reports_every_required_field() {
        let errors = collect_field_errors(&RegistrationDraft::new(), &Messages::default());
        let fields: Vec<Field> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![
                Field::Fname,
                Field::Lname,
                Field::Email,
                Field::Password,
                Field::Agree
            ]
        );
    }

    #[test]
    fn test_password_mismatch_is_reported_on_confirm() {
        let mut draft = valid_draft();
        draft.set_confirm_password("abcdeg");
        let errors = collect_field_errors(&draft, &Messages::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::ConfirmPassword].code, "confirmPassword.invalid");
    }

    #[test]
    fn test_coupon_code_required_when_checked() {
        let mut draft = valid_draft();
        draft.set_have_coupon(true);
        assert!(validate_field(&draft, Field::CouponCode, &Messages::default()).is_err());
        draft.set_coupon_code("SOMETHING");
        assert!(validate_field(&draft, Field::CouponCode, &Messages::default()).is_ok());
    }

    #[test]
    fn test_disagree_blocks_otherwise_valid_draft() {
        let mut draft = valid_draft();
        draft.set_agree(false);
        let errors = validate_registration_data(&draft, &Messages::default()).unwrap_err();
        assert!(errors.errors().contains_key("agree"));
        assert_eq!(errors.errors().len(), 1);
    }

    #[test]
    fn test_errors_serialize_by_field_key() {
        let mut draft = valid_draft();
        draft.set_password("abc");
        draft.set_confirm_password("abc");
        let errors = validate_registration_data(&draft, &Messages::default()).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["password"][0]["code"], "password.invalid");
    }
}
