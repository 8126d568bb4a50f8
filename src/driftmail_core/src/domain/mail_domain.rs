use serde::{Deserialize, Serialize};

/// A mail domain offered by the mailbox provider.
///
/// Domains are read-only and fetched fresh per registration attempt; they are
/// never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailDomain {
    pub id: String,
    pub domain: String,
    pub is_active: bool,
    pub is_private: bool,
}
