use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    email_address::EmailAddress,
    identity::{IdentitySession, IdentityUser},
    mail_domain::MailDomain,
    mailbox::{MailboxAccount, MailboxToken},
    password::Password,
    username::Username,
};

// MailboxProvider port trait and errors
#[derive(Debug, Error)]
pub enum MailboxProviderError {
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    AuthFailed(String),
}

impl PartialEq for MailboxProviderError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unavailable(_), Self::Unavailable(_)) => true,
            (Self::Rejected(_), Self::Rejected(_)) => true,
            (Self::AuthFailed(_), Self::AuthFailed(_)) => true,
            _ => false,
        }
    }
}

/// Port trait for the external temporary-mailbox provider.
///
/// Every call is single-shot; there are no retries and the three operations
/// share no state, so they may be invoked concurrently.
#[async_trait]
pub trait MailboxProvider: Send + Sync {
    async fn list_domains(&self) -> Result<Vec<MailDomain>, MailboxProviderError>;
    async fn create_account(
        &self,
        username: &Username,
        password: &Password,
        domain: &MailDomain,
    ) -> Result<MailboxAccount, MailboxProviderError>;
    async fn authenticate(
        &self,
        address: &EmailAddress,
        password: &Password,
    ) -> Result<MailboxToken, MailboxProviderError>;
}

// IdentityBackend port trait and errors
#[derive(Debug, Error)]
pub enum IdentityBackendError {
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    AuthFailed(String),
    #[error("{0}")]
    SignoutFailed(String),
}

impl PartialEq for IdentityBackendError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Rejected(_), Self::Rejected(_)) => true,
            (Self::AuthFailed(_), Self::AuthFailed(_)) => true,
            (Self::SignoutFailed(_), Self::SignoutFailed(_)) => true,
            _ => false,
        }
    }
}

/// Port trait for the external user-identity backend.
#[async_trait]
pub trait IdentityBackend: Send + Sync {
    async fn register(
        &self,
        email: &EmailAddress,
        password: &Password,
        redirect_to: &str,
    ) -> Result<IdentityUser, IdentityBackendError>;
    async fn login(
        &self,
        email: &EmailAddress,
        password: &Password,
    ) -> Result<IdentitySession, IdentityBackendError>;
    async fn logout(&self, access_token: &Secret<String>) -> Result<(), IdentityBackendError>;
}
