pub mod registration_model;
