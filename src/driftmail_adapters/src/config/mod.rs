pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AppSettings, IdentityBackendSettings, MailboxProviderSettings, PostgresSettings, Settings,
};
