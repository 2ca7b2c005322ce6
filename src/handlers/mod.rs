pub mod modal_handler;
