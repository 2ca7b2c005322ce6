pub mod config;
pub mod constants;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;
pub mod validations;

pub use models::registration_model::{Field, Gender, Plan, Registration, RegistrationDraft};
pub use services::registration_service::{Confirmation, ModalState, RegistrationService};
