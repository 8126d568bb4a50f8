use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::email_address::EmailAddress;

/// A mailbox account as reported by the mailbox provider.
///
/// The account is owned externally; this system only holds on to the
/// identifier and address needed to link it to an identity user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailboxAccount {
    pub id: String,
    pub address: EmailAddress,
    pub quota: u64,
    pub used: u64,
    pub is_disabled: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A session token issued by the mailbox provider.
#[derive(Debug, Clone)]
pub struct MailboxToken {
    pub id: String,
    pub token: Secret<String>,
}
