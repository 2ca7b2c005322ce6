use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use uuid::Uuid;

use crate::{types::errors::InputError, utils::pricing_utils};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Plan {
    #[default]
    Funrun,
    Mini,
    Half,
    Full,
}

impl Plan {
    /// Base price in THB.
    pub fn base_price(&self) -> u32 {
        match self {
            Plan::Funrun => 500,
            Plan::Mini => 800,
            Plan::Half => 1200,
            Plan::Full => 1500,
        }
    }

    pub fn distance(&self) -> &'static str {
        match self {
            Plan::Funrun => "5.5 Km",
            Plan::Mini => "10 Km",
            Plan::Half => "21 Km",
            Plan::Full => "42.195 Km",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Plan::Funrun => "Fun run",
            Plan::Mini => "Mini Marathon",
            Plan::Half => "Half Marathon",
            Plan::Full => "Full Marathon",
        }
    }

    /// e.g. `Full Marathon 42.195 Km (1,500 THB)`
    pub fn label(&self) -> String {
        self.label_with(self.title(), "THB")
    }

    /// Same layout as [`Plan::label`] with a translated title and currency.
    pub fn label_with(&self, title: &str, currency: &str) -> String {
        format!(
            "{} {} ({} {})",
            title,
            self.distance(),
            pricing_utils::format_thb(self.base_price()),
            currency
        )
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Every input of the registration form, keyed the way the form names them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum Field {
    Fname,
    Lname,
    Email,
    Password,
    ConfirmPassword,
    Plan,
    Gender,
    HaveCoupon,
    CouponCode,
    Total,
    Agree,
}

impl Field {
    pub fn as_key(&self) -> &'static str {
        self.into()
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Current values of the registration form.
///
/// `total` is derived: it only changes through [`RegistrationDraft::recompute_total`].
/// Deserializing ignores any incoming `total` and recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DraftFields")]
pub struct RegistrationDraft {
    fname: String,
    lname: String,
    plan: Plan,
    gender: Gender,
    email: String,
    #[serde(skip_serializing)]
    password: String,
    #[serde(skip_serializing)]
    confirm_password: String,
    have_coupon: bool,
    coupon_code: String,
    total: u32,
    agree: bool,
}

/// Editable inputs of a draft as they arrive from JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DraftFields {
    fname: String,
    lname: String,
    plan: Plan,
    gender: Gender,
    email: String,
    password: String,
    confirm_password: String,
    have_coupon: bool,
    coupon_code: String,
    agree: bool,
}

impl From<DraftFields> for RegistrationDraft {
    fn from(fields: DraftFields) -> Self {
        let mut draft = Self {
            fname: fields.fname,
            lname: fields.lname,
            plan: fields.plan,
            gender: fields.gender,
            email: fields.email,
            password: fields.password,
            confirm_password: fields.confirm_password,
            have_coupon: fields.have_coupon,
            coupon_code: fields.coupon_code,
            total: 0,
            agree: fields.agree,
        };
        draft.recompute_total();
        draft
    }
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fname(&self) -> &str {
        &self.fname
    }

    pub fn lname(&self) -> &str {
        &self.lname
    }

    pub fn plan(&self) -> Plan {
        self.plan
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn have_coupon(&self) -> bool {
        self.have_coupon
    }

    pub fn coupon_code(&self) -> &str {
        &self.coupon_code
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn agree(&self) -> bool {
        self.agree
    }

    pub fn set_fname(&mut self, fname: impl Into<String>) {
        self.fname = fname.into();
    }

    pub fn set_lname(&mut self, lname: impl Into<String>) {
        self.lname = lname.into();
    }

    pub fn set_plan(&mut self, plan: Plan) {
        self.plan = plan;
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.confirm_password = confirm_password.into();
    }

    pub fn set_have_coupon(&mut self, have_coupon: bool) {
        self.have_coupon = have_coupon;
    }

    pub fn set_coupon_code(&mut self, coupon_code: impl Into<String>) {
        self.coupon_code = coupon_code.into();
    }

    pub fn set_agree(&mut self, agree: bool) {
        self.agree = agree;
    }

    /// Replaces one field from its textual form. `plan`, `gender` and the
    /// boolean fields are parsed; `total` is rejected since it is derived.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), InputError> {
        let invalid = || InputError::InvalidValue {
            field,
            value: value.to_string(),
        };

        match field {
            Field::Fname => self.set_fname(value),
            Field::Lname => self.set_lname(value),
            Field::Email => self.set_email(value),
            Field::Password => self.set_password(value),
            Field::ConfirmPassword => self.set_confirm_password(value),
            Field::CouponCode => self.set_coupon_code(value),
            Field::Plan => self.set_plan(value.trim().parse().map_err(|_| invalid())?),
            Field::Gender => self.set_gender(value.trim().parse().map_err(|_| invalid())?),
            Field::HaveCoupon => self.set_have_coupon(parse_flag(value).ok_or_else(invalid)?),
            Field::Agree => self.set_agree(parse_flag(value).ok_or_else(invalid)?),
            Field::Total => return Err(InputError::NotEditable(field)),
        }
        Ok(())
    }

    /// Text of a field as shown in the form; secrets are masked.
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::Fname => self.fname.clone(),
            Field::Lname => self.lname.clone(),
            Field::Email => self.email.clone(),
            Field::Password => "*".repeat(self.password.chars().count()),
            Field::ConfirmPassword => "*".repeat(self.confirm_password.chars().count()),
            Field::Plan => self.plan.to_string(),
            Field::Gender => self.gender.to_string(),
            Field::HaveCoupon => self.have_coupon.to_string(),
            Field::CouponCode => self.coupon_code.clone(),
            Field::Total => self.total.to_string(),
            Field::Agree => self.agree.to_string(),
        }
    }

    pub fn coupon_applied(&self) -> bool {
        self.have_coupon && pricing_utils::is_coupon_match(&self.coupon_code)
    }

    pub fn recompute_total(&mut self) -> u32 {
        self.total = pricing_utils::calculate_total(self.plan, self.have_coupon, &self.coupon_code);
        self.total
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Snapshot of a submitted registration. Never carries credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub plan: Plan,
    pub gender: Gender,
    pub coupon_applied: bool,
    pub total: u32,
    pub submitted_at: DateTime<Utc>,
}

impl From<&RegistrationDraft> for Registration {
    fn from(draft: &RegistrationDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            fname: draft.fname.trim().to_string(),
            lname: draft.lname.trim().to_string(),
            email: draft.email.trim().to_string(),
            plan: draft.plan,
            gender: draft.gender,
            coupon_applied: draft.coupon_applied(),
            total: draft.total,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults() {
        let draft = RegistrationDraft::new();
        assert_eq!(draft.plan(), Plan::Funrun);
        assert_eq!(draft.gender(), Gender::Male);
        assert_eq!(draft.fname(), "");
        assert_eq!(draft.email(), "");
        assert!(!draft.have_coupon());
        assert!(!draft.agree());
        assert_eq!(draft.total(), 0);
    }

    #[test]
    fn test_setters_replace_without_recomputing() {
        let mut draft = RegistrationDraft::new();
        draft.set_plan(Plan::Full);
        assert_eq!(draft.total(), 0);
        assert_eq!(draft.recompute_total(), 1500);
        draft.set_fname("Somchai");
        draft.set_fname("Malee");
        assert_eq!(draft.fname(), "Malee");
    }

    #[test]
    fn test_recompute_total_applies_trimmed_coupon() {
        let mut draft = RegistrationDraft::new();
        draft.set_plan(Plan::Full);
        draft.set_have_coupon(true);
        draft.set_coupon_code("  CMU2025 ");
        assert_eq!(draft.recompute_total(), 1050);
        assert!(draft.coupon_applied());

        draft.set_have_coupon(false);
        assert_eq!(draft.recompute_total(), 1500);
        assert!(!draft.coupon_applied());
    }

    #[test]
    fn test_set_field_parses_enums_and_flags() {
        let mut draft = RegistrationDraft::new();
        draft.set_field(Field::Plan, "Half").unwrap();
        draft.set_field(Field::Gender, "female").unwrap();
        draft.set_field(Field::HaveCoupon, "yes").unwrap();
        draft.set_field(Field::Agree, "on").unwrap();
        draft.set_field(Field::CouponCode, "CMU2025").unwrap();

        assert_eq!(draft.plan(), Plan::Half);
        assert_eq!(draft.gender(), Gender::Female);
        assert!(draft.have_coupon());
        assert!(draft.agree());
        assert_eq!(draft.recompute_total(), 840);
    }

    #[test]
    fn test_set_field_rejects_bad_values() {
        let mut draft = RegistrationDraft::new();
        assert_eq!(
            draft.set_field(Field::Plan, "ultra"),
            Err(InputError::InvalidValue {
                field: Field::Plan,
                value: "ultra".to_string()
            })
        );
        assert!(draft.set_field(Field::Agree, "maybe").is_err());
        assert_eq!(
            draft.set_field(Field::Total, "1"),
            Err(InputError::NotEditable(Field::Total))
        );
        assert_eq!(draft.plan(), Plan::Funrun);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut draft = RegistrationDraft::new();
        draft.set_email("runner@cmu.ac.th");
        draft.set_plan(Plan::Mini);
        draft.set_agree(true);
        draft.recompute_total();
        draft.reset();
        assert_eq!(draft, RegistrationDraft::default());
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(Field::ConfirmPassword.as_key(), "confirmPassword");
        assert_eq!(Field::HaveCoupon.to_string(), "haveCoupon");
        assert_eq!("couponcode".parse::<Field>(), Ok(Field::CouponCode));
        assert_eq!(Field::iter().count(), 11);
    }

    #[test]
    fn test_plan_labels() {
        assert_eq!(Plan::Full.label(), "Full Marathon 42.195 Km (1,500 THB)");
        assert_eq!(Plan::Funrun.label(), "Fun run 5.5 Km (500 THB)");
        assert_eq!(
            Plan::Mini.label_with("มินิมาราธอน", "บาท"),
            "มินิมาราธอน 10 Km (800 บาท)"
        );
    }

    #[test]
    fn test_draft_serialization_hides_passwords() {
        let mut draft = RegistrationDraft::new();
        draft.set_password("secret1");
        draft.set_confirm_password("secret1");
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("confirmPassword").is_none());
        assert_eq!(json["plan"], "funrun");
        assert_eq!(json["haveCoupon"], false);
        assert_eq!(draft.display_value(Field::Password), "*******");
    }

    #[test]
    fn test_deserialized_draft_recomputes_total() {
        let draft: RegistrationDraft = serde_json::from_str(
            r#"{"plan":"full","haveCoupon":true,"couponCode":" CMU2025 ","total":1}"#,
        )
        .unwrap();
        assert_eq!(draft.total(), 1050);

        let draft: RegistrationDraft =
            serde_json::from_str(r#"{"plan":"full","total":1}"#).unwrap();
        assert_eq!(draft.total(), 1500);
        assert_eq!(draft.fname(), "");
    }

    #[test]
    fn test_registration_snapshot_trims_names() {
        let mut draft = RegistrationDraft::new();
        draft.set_fname("  Malee ");
        draft.set_email("malee@cmu.ac.th ");
        draft.recompute_total();
        let registration = Registration::from(&draft);
        assert_eq!(registration.fname, "Malee");
        assert_eq!(registration.email, "malee@cmu.ac.th");
        assert_eq!(registration.total, 500);
        assert!(!registration.coupon_applied);
    }
}
