use crate::{
    models::registration_model::Field, types::errors::InputError,
    types::requests::form_command::FormCommand,
};

pub const HELP_TEXT: &str = "\
Commands:
  open                     open the registration form
  set <field> <value>      set a field (fname, lname, email, password,
                           confirmPassword, plan, gender, haveCoupon,
                           couponCode, agree)
  check <field>            tick haveCoupon or agree
  uncheck <field>          untick haveCoupon or agree
  show                     show the form
  plans                    list plans and prices
  errors                   list every failing rule
  submit                   register
  close                    close and reset the form
  help                     this text
  quit                     exit";

fn parse_field(token: &str) -> Result<Field, InputError> {
    token
        .parse::<Field>()
        .map_err(|_| InputError::UnknownField(token.to_string()))
}

fn parse_checkbox(keyword: &str, rest: &str, value: bool) -> Result<FormCommand, InputError> {
    let token = rest.trim();
    if token.is_empty() {
        return Err(InputError::MissingArgument("field"));
    }
    let field = parse_field(token)?;
    match field {
        Field::HaveCoupon | Field::Agree => Ok(FormCommand::Set {
            field,
            value: value.to_string(),
        }),
        _ => Err(InputError::InvalidValue {
            field,
            value: keyword.to_string(),
        }),
    }
}

/// Parses one line typed into the modal. The value of `set` is everything
/// after the field name, so it may contain inner spaces.
pub fn parse_command(line: &str) -> Result<FormCommand, InputError> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    let (keyword, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));
    let keyword = keyword.to_ascii_lowercase();

    match keyword.as_str() {
        "open" => Ok(FormCommand::Open),
        "close" => Ok(FormCommand::Close),
        "show" => Ok(FormCommand::Show),
        "plans" => Ok(FormCommand::Plans),
        "errors" => Ok(FormCommand::Errors),
        "submit" | "register" => Ok(FormCommand::Submit),
        "help" | "?" => Ok(FormCommand::Help),
        "quit" | "exit" => Ok(FormCommand::Quit),
        "check" => parse_checkbox(&keyword, rest, true),
        "uncheck" => parse_checkbox(&keyword, rest, false),
        "set" => {
            let rest = rest.trim_start();
            if rest.is_empty() {
                return Err(InputError::MissingArgument("field"));
            }
            let (token, value) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            Ok(FormCommand::Set {
                field: parse_field(token)?,
                value: value.trim_start().to_string(),
            })
        }
        _ => Err(InputError::UnknownCommand(keyword)),
    }
}
