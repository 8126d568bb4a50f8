use std::sync::Arc;

use chrono::Utc;
use driftmail_core::{
    LinkedAccount, LinkedAccountStore, LinkedAccountStoreError, NewLinkedAccount,
};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory linked-account store for tests and local runs.
///
/// Mirrors the persistence contract of the PostgreSQL store, including the
/// one-active-record-per-user constraint.
#[derive(Clone, Default)]
pub struct InMemoryLinkedAccountStore {
    links: Arc<RwLock<Vec<LinkedAccount>>>,
}

impl InMemoryLinkedAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record, in insertion order.
    pub async fn all(&self) -> Vec<LinkedAccount> {
        self.links.read().await.clone()
    }
}

#[async_trait::async_trait]
impl LinkedAccountStore for InMemoryLinkedAccountStore {
    async fn insert(
        &self,
        link: NewLinkedAccount,
    ) -> Result<LinkedAccount, LinkedAccountStoreError> {
        let mut links = self.links.write().await;

        if links
            .iter()
            .any(|existing| existing.user_id == link.user_id && existing.is_active)
        {
            return Err(LinkedAccountStoreError::LinkConflict);
        }

        let record = LinkedAccount {
            id: Uuid::new_v4(),
            user_id: link.user_id,
            mail_tm_id: link.mail_tm_id,
            email_address: link.email_address,
            created_at: Utc::now(),
            is_active: true,
        };
        links.push(record.clone());

        Ok(record)
    }
}
