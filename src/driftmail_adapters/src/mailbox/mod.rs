pub mod mail_tm_client;

pub use mail_tm_client::MailTmClient;
