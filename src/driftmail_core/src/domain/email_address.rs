use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{mail_domain::MailDomain, username::Username};

#[derive(Debug, Error, PartialEq)]
pub enum EmailAddressError {
    #[error("Please enter a valid email address")]
    Invalid,
}

/// A full mailbox address, `local@domain`.
///
/// Addresses are public identifiers in this domain; only passwords and
/// backend tokens are treated as secrets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Compose the full address from a username and a selected mail domain.
    ///
    /// The result is exactly `username@domain` with no transformation of
    /// case or whitespace.
    pub fn compose(username: &Username, domain: &MailDomain) -> Self {
        Self(format!("{}@{}", username.as_str(), domain.domain))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(Self(value)),
            _ => Err(EmailAddressError::Invalid),
        }
    }
}

impl From<EmailAddress> for String {
    fn from(address: EmailAddress) -> Self {
        address.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
