use log::info;
use serde_json::{Value, json};
use strum::IntoEnumIterator;

use crate::{
    constants::{COUPON_DISCOUNT_PERCENT, EVENT_NAME},
    models::registration_model::{Field, Gender, Plan},
    routes::command_routes::{HELP_TEXT, parse_command},
    services::registration_service::RegistrationService,
    types::{
        errors::{InputError, SubmitError},
        requests::form_command::FormCommand,
        responses::form_response::{ErrorDetails, FormResponse},
    },
    utils::{
        locale_utils::Messages,
        pricing_utils::format_thb,
        validation_utils::{FieldErrors, to_validation_errors},
    },
};

/// Result of one command: the response, an optional text rendering of the
/// form, and whether the session should end.
#[derive(Debug)]
pub struct ModalReply {
    pub response: FormResponse<Value>,
    pub view: Option<String>,
    pub exit: bool,
}

impl ModalReply {
    fn new(response: FormResponse<Value>) -> Self {
        Self {
            response,
            view: None,
            exit: false,
        }
    }

    fn with_view(mut self, view: String) -> Self {
        self.view = Some(view);
        self
    }

    pub fn render(&self, as_json: bool) -> String {
        if as_json {
            return serde_json::to_string_pretty(&self.response)
                .unwrap_or_else(|e| format!("{{\"message\":\"{}\"}}", e));
        }
        match &self.view {
            Some(view) if self.response.message.is_empty() => view.clone(),
            Some(view) => format!("{}\n{}", self.response.message, view),
            None => self.response.message.clone(),
        }
    }
}

fn label(service: &RegistrationService, field: Field) -> String {
    let fallback = match field {
        Field::Fname => "First name",
        Field::Lname => "Last name",
        Field::Email => "Email",
        Field::Password => "Password",
        Field::ConfirmPassword => "Confirm Password",
        Field::Plan => "Plan",
        Field::Gender => "Gender",
        Field::HaveCoupon => "I have coupon",
        Field::CouponCode => "Coupon Code",
        Field::Total => "Total Payment",
        Field::Agree => "I accept terms and conditions",
    };
    service
        .messages()
        .get_form_message(&format!("labels.{}", field), fallback)
}

fn currency(messages: &Messages) -> String {
    messages.get_form_message("currency", "THB")
}

fn plan_label(messages: &Messages, plan: Plan) -> String {
    let title = messages.get_form_message(&format!("plans.{}", plan), plan.title());
    plan.label_with(&title, &currency(messages))
}

fn gender_label(messages: &Messages, gender: Gender) -> String {
    messages.get_form_message(&format!("genders.{}", gender), &gender.to_string())
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Text rendition of the modal with inline errors for touched fields.
pub fn render_form(service: &RegistrationService) -> String {
    let messages = service.messages();
    let draft = service.draft();
    let errors = service.visible_errors();
    let mut lines = vec![messages.get_form_message(
        "title",
        &format!("Register {} 🏃‍♂️", EVENT_NAME),
    )];

    let mut push_input = |field: Field, value: String, required: bool| {
        let marker = if required { "*" } else { "" };
        lines.push(format!(
            "  {:<20}: {}",
            format!("{}{}", label(service, field), marker),
            value
        ));
        if let Some(error) = errors.get(&field) {
            lines.push(format!("      ! {}", error.message.as_deref().unwrap_or("")));
        }
    };

    for field in [
        Field::Fname,
        Field::Lname,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ] {
        push_input(field, draft.display_value(field), true);
    }
    push_input(Field::Plan, plan_label(messages, draft.plan()), false);
    push_input(Field::Gender, gender_label(messages, draft.gender()), false);
    push_input(
        Field::HaveCoupon,
        checkbox(draft.have_coupon()).to_string(),
        false,
    );
    if draft.have_coupon() {
        let mut value = draft.coupon_code().to_string();
        if draft.coupon_applied() {
            value.push_str(&format!("  (-{}%)", COUPON_DISCOUNT_PERCENT));
        }
        push_input(Field::CouponCode, value, false);
    }
    push_input(
        Field::Total,
        format!("{} {}", format_thb(draft.total()), currency(messages)),
        false,
    );
    push_input(Field::Agree, checkbox(draft.agree()).to_string(), true);

    lines.push(format!(
        "  {}",
        messages.get_form_message(
            "promotion",
            &format!("Promotion 📢 Coupon ({}% Discount)", COUPON_DISCOUNT_PERCENT)
        )
    ));
    let button = if service.can_submit() {
        messages.get_form_message("button.enabled", "[ Register ]")
    } else {
        messages.get_form_message("button.disabled", "[ Register ] (accept the terms to enable)")
    };
    lines.push(format!("  {}", button));

    lines.join("\n")
}

fn form_data(service: &RegistrationService) -> Value {
    json!({
        "draft": service.draft(),
        "errors": to_validation_errors(&service.visible_errors()),
        "canSubmit": service.can_submit(),
    })
}

fn render_plans(service: &RegistrationService) -> (String, Value) {
    let messages = service.messages();
    let selected = service.draft().plan();
    let mut lines = Vec::new();
    let mut data = Vec::new();
    for plan in Plan::iter() {
        let marker = if plan == selected { ">" } else { " " };
        let label = plan_label(messages, plan);
        lines.push(format!("{} {:<7} {}", marker, plan.to_string(), label));
        data.push(json!({
            "plan": plan,
            "label": label,
            "basePrice": plan.base_price(),
        }));
    }
    (lines.join("\n"), Value::Array(data))
}

fn render_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, error)| {
            format!("  {}: {}", field, error.message.as_deref().unwrap_or(""))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn handle_input_error(service: &RegistrationService, err: &InputError) -> ModalReply {
    let message = service
        .messages()
        .get_form_message(err.message_key(), &err.to_string())
        .replace("{value}", &err.subject());
    ModalReply::new(FormResponse::error(
        message,
        ErrorDetails {
            details: Some(json!({ "code": err.message_key() })),
        },
    ))
}

fn handle_submit(service: &mut RegistrationService) -> ModalReply {
    match service.submit() {
        Ok(confirmation) => {
            info!("Submission confirmed: {}", confirmation.notice);
            let data = json!(confirmation.registration);
            ModalReply::new(FormResponse::success(confirmation.notice, data))
        }
        Err(SubmitError::Invalid(errors)) => {
            let message = service
                .messages()
                .get_form_message("submit.invalid_data", "Invalid registration data");
            ModalReply::new(FormResponse::error(
                message,
                ErrorDetails {
                    details: Some(json!(&errors)),
                },
            ))
            .with_view(render_form(service))
        }
        Err(SubmitError::TermsNotAccepted) => {
            let agree_errors: FieldErrors = service
                .visible_errors()
                .into_iter()
                .filter(|(field, _)| *field == Field::Agree)
                .collect();
            let message = service.messages().get_form_message(
                "submit.terms_not_accepted",
                &SubmitError::TermsNotAccepted.to_string(),
            );
            ModalReply::new(FormResponse::error(
                message,
                ErrorDetails {
                    details: Some(json!(to_validation_errors(&agree_errors))),
                },
            ))
        }
        Err(SubmitError::ModalClosed) => handle_input_error(service, &InputError::ModalClosed),
    }
}

/// Applies one command to the form and describes the outcome.
pub fn handle_command(service: &mut RegistrationService, command: FormCommand) -> ModalReply {
    match command {
        FormCommand::Open => {
            service.open();
            ModalReply::new(FormResponse::success(String::new(), form_data(service)))
                .with_view(render_form(service))
        }
        FormCommand::Close => {
            service.close();
            ModalReply::new(FormResponse::notice(
                service
                    .messages()
                    .get_form_message("close.success", "Registration form closed"),
            ))
        }
        FormCommand::Set { field, value } => match service.update(field, &value) {
            Ok(()) => ModalReply::new(FormResponse::success(String::new(), form_data(service)))
                .with_view(render_form(service)),
            Err(err) => handle_input_error(service, &err),
        },
        FormCommand::Show | FormCommand::Errors if !service.is_open() => {
            handle_input_error(service, &InputError::ModalClosed)
        }
        FormCommand::Show => {
            ModalReply::new(FormResponse::success(String::new(), form_data(service)))
                .with_view(render_form(service))
        }
        FormCommand::Errors => {
            let errors = service.field_errors();
            let message = if errors.is_empty() {
                service
                    .messages()
                    .get_form_message("errors.none", "No errors, ready to register")
            } else {
                render_errors(errors)
            };
            ModalReply::new(FormResponse::success(
                message,
                json!(to_validation_errors(errors)),
            ))
        }
        FormCommand::Plans => {
            let (text, data) = render_plans(service);
            ModalReply::new(FormResponse::success(text, data))
        }
        FormCommand::Submit => handle_submit(service),
        FormCommand::Help => ModalReply::new(FormResponse::notice(
            service.messages().get_form_message("help", HELP_TEXT),
        )),
        FormCommand::Quit => {
            service.close();
            ModalReply {
                exit: true,
                ..ModalReply::new(FormResponse::notice(
                    service.messages().get_form_message("quit", "Bye"),
                ))
            }
        }
    }
}

/// Parses a typed line and applies it; unparseable input becomes an error reply.
pub fn handle_line(service: &mut RegistrationService, line: &str) -> ModalReply {
    match parse_command(line) {
        Ok(command) => handle_command(service, command),
        Err(err) => handle_input_error(service, &err),
    }
}
