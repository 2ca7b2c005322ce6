use log::{debug, info};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use validator::{ValidationError, ValidationErrors};

use crate::{
    constants::EVENT_NAME,
    models::registration_model::{Field, Gender, Plan, Registration, RegistrationDraft},
    types::errors::{InputError, SubmitError},
    utils::{
        locale_utils::Messages,
        validation_utils::{FieldErrors, collect_field_errors, to_validation_errors},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Editing,
}

#[derive(Debug, Clone)]
pub struct Confirmation {
    pub notice: String,
    pub registration: Registration,
}

/// Owns one registration form: its draft, whether the modal is open, which
/// fields the user has touched and the latest validation result.
#[derive(Debug)]
pub struct RegistrationService {
    draft: RegistrationDraft,
    state: ModalState,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    messages: Messages,
}

impl RegistrationService {
    pub fn new(messages: Messages) -> Self {
        Self {
            draft: RegistrationDraft::default(),
            state: ModalState::Closed,
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            messages,
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Editing
    }

    pub fn total(&self) -> u32 {
        self.draft.total()
    }

    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.state = ModalState::Editing;
        self.refresh();
        info!("Registration form opened");
    }

    pub fn close(&mut self) {
        if self.is_open() {
            info!("Registration form closed without submitting");
        }
        self.state = ModalState::Closed;
        self.reset();
    }

    fn reset(&mut self) {
        self.draft.reset();
        self.touched.clear();
        self.errors.clear();
    }

    fn refresh(&mut self) {
        self.draft.recompute_total();
        self.errors = collect_field_errors(&self.draft, &self.messages);
    }

    fn edit(
        &mut self,
        field: Field,
        apply: impl FnOnce(&mut RegistrationDraft) -> Result<(), InputError>,
    ) -> Result<(), InputError> {
        if !self.is_open() {
            return Err(InputError::ModalClosed);
        }
        apply(&mut self.draft)?;
        self.touched.insert(field);
        self.refresh();

        if field.is_secret() {
            debug!("Updated {}", field);
        } else {
            debug!("Updated {} = {:?}", field, self.draft.display_value(field));
        }
        Ok(())
    }

    fn edit_with(
        &mut self,
        field: Field,
        apply: impl FnOnce(&mut RegistrationDraft),
    ) -> Result<(), InputError> {
        self.edit(field, |draft| {
            apply(draft);
            Ok(())
        })
    }

    /// Applies a textual value to `field`, then recomputes the total and
    /// re-validates the whole form.
    pub fn update(&mut self, field: Field, value: &str) -> Result<(), InputError> {
        self.edit(field, |draft| draft.set_field(field, value))
    }

    pub fn set_fname(&mut self, fname: &str) -> Result<(), InputError> {
        self.edit_with(Field::Fname, |draft| draft.set_fname(fname))
    }

    pub fn set_lname(&mut self, lname: &str) -> Result<(), InputError> {
        self.edit_with(Field::Lname, |draft| draft.set_lname(lname))
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), InputError> {
        self.edit_with(Field::Email, |draft| draft.set_email(email))
    }

    pub fn set_password(&mut self, password: &str) -> Result<(), InputError> {
        self.edit_with(Field::Password, |draft| draft.set_password(password))
    }

    pub fn set_confirm_password(&mut self, confirm_password: &str) -> Result<(), InputError> {
        self.edit_with(Field::ConfirmPassword, |draft| {
            draft.set_confirm_password(confirm_password)
        })
    }

    pub fn set_plan(&mut self, plan: Plan) -> Result<(), InputError> {
        self.edit_with(Field::Plan, |draft| draft.set_plan(plan))
    }

    pub fn set_gender(&mut self, gender: Gender) -> Result<(), InputError> {
        self.edit_with(Field::Gender, |draft| draft.set_gender(gender))
    }

    pub fn set_have_coupon(&mut self, have_coupon: bool) -> Result<(), InputError> {
        self.edit_with(Field::HaveCoupon, |draft| draft.set_have_coupon(have_coupon))
    }

    pub fn set_coupon_code(&mut self, coupon_code: &str) -> Result<(), InputError> {
        self.edit_with(Field::CouponCode, |draft| draft.set_coupon_code(coupon_code))
    }

    pub fn set_agree(&mut self, agree: bool) -> Result<(), InputError> {
        self.edit_with(Field::Agree, |draft| draft.set_agree(agree))
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Every failing rule, touched or not.
    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn errors(&self) -> Option<ValidationErrors> {
        if self.errors.is_empty() {
            None
        } else {
            Some(to_validation_errors(&self.errors))
        }
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Errors shown inline: only for fields the user has edited.
    pub fn visible_errors(&self) -> FieldErrors {
        self.errors
            .iter()
            .filter(|(field, _)| self.touched.contains(field))
            .map(|(field, error)| (*field, error.clone()))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the register button is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_open() && self.draft.agree()
    }

    /// Registers the participant when every rule passes, then closes the
    /// form and resets it. On failure all errors become visible.
    pub fn submit(&mut self) -> Result<Confirmation, SubmitError> {
        if !self.is_open() {
            return Err(SubmitError::ModalClosed);
        }
        if !self.draft.agree() {
            self.touched.insert(Field::Agree);
            return Err(SubmitError::TermsNotAccepted);
        }

        self.refresh();
        if !self.errors.is_empty() {
            self.touched.extend(Field::iter());
            return Err(SubmitError::Invalid(to_validation_errors(&self.errors)));
        }

        let registration = Registration::from(&self.draft);
        let notice = self
            .messages
            .get_form_message("submit.success", &format!("See you at {}", EVENT_NAME));
        info!(
            "Registered {} for {} ({} THB)",
            registration.id, registration.plan, registration.total
        );

        self.state = ModalState::Closed;
        self.reset();

        Ok(Confirmation {
            notice,
            registration,
        })
    }
}
