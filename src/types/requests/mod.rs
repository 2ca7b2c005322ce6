pub mod form_command;
