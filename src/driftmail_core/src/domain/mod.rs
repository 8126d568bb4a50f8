pub mod email_address;
pub mod identity;
pub mod linked_account;
pub mod mail_domain;
pub mod mailbox;
pub mod password;
pub mod username;
