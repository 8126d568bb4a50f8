use secrecy::Secret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record owned by the identity backend.
///
/// The credential is opaque to this system; only the identifier and email
/// address are ever inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: Uuid,
    pub email: String,
}

/// An authenticated session issued by the identity backend.
#[derive(Debug, Clone)]
pub struct IdentitySession {
    pub user: IdentityUser,
    pub access_token: Secret<String>,
    pub expires_in: Option<u64>,
}
