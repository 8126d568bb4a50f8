use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::email_address::EmailAddress;

/// The persisted mapping from an identity user to their mailbox account.
///
/// A record is written only after both remote creations succeeded; the
/// ordering is enforced by the orchestrator, not by the store.
#[derive(Debug, Clone, Serialize)]
pub struct LinkedAccount {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mail_tm_id: String,
    pub email_address: EmailAddress,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// The insertable form of a [`LinkedAccount`]; `id`, `created_at` and
/// `is_active` are filled in by the store.
#[derive(Debug, Clone)]
pub struct NewLinkedAccount {
    pub user_id: Uuid,
    pub mail_tm_id: String,
    pub email_address: EmailAddress,
}
