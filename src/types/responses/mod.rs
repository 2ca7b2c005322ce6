pub mod form_response;
