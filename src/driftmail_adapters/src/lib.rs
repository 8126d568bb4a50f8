pub mod config;
pub mod http;
pub mod identity;
pub mod mailbox;
pub mod persistence;

pub use identity::SupabaseIdentityClient;
pub use mailbox::MailTmClient;
pub use persistence::{InMemoryLinkedAccountStore, PostgresLinkedAccountStore};
