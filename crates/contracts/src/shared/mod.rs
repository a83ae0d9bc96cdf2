pub mod api_error;
pub mod cache;
pub mod config;
pub mod delete_gate;
pub mod listing;
pub mod save_outcome;
pub mod validation;
