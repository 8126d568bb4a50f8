pub mod helpers;
pub mod mail_service;
pub mod tracing;

pub use helpers::{configure_postgresql, get_postgres_pool};
pub use mail_service::DriftmailService;
