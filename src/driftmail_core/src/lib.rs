pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email_address::{EmailAddress, EmailAddressError},
    identity::{IdentitySession, IdentityUser},
    linked_account::{LinkedAccount, NewLinkedAccount},
    mail_domain::MailDomain,
    mailbox::{MailboxAccount, MailboxToken},
    password::{Password, PasswordError},
    username::{Username, UsernameError},
};

pub use ports::{
    clients::{IdentityBackend, IdentityBackendError, MailboxProvider, MailboxProviderError},
    repositories::{LinkedAccountStore, LinkedAccountStoreError},
};
