use async_trait::async_trait;
use thiserror::Error;

use crate::domain::linked_account::{LinkedAccount, NewLinkedAccount};

// LinkedAccountStore port trait and errors
#[derive(Debug, Error)]
pub enum LinkedAccountStoreError {
    #[error("A linked account already exists for this user")]
    LinkConflict,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for LinkedAccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::LinkConflict, Self::LinkConflict) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Port trait for the linked-account repository.
///
/// Insert-only: records are never updated in place by this system, and
/// deactivation happens through operations outside this core.
#[async_trait]
pub trait LinkedAccountStore: Send + Sync {
    async fn insert(
        &self,
        link: NewLinkedAccount,
    ) -> Result<LinkedAccount, LinkedAccountStoreError>;
}
