use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9_-]+$").expect("valid username regex"));

const MIN_USERNAME_LENGTH: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum UsernameError {
    #[error("Username must be at least {MIN_USERNAME_LENGTH} characters")]
    TooShort,
    #[error("Username can only contain letters, numbers, underscores, and hyphens")]
    InvalidCharacters,
}

/// The local part of a disposable mailbox address, validated on construction.
///
/// The username is combined verbatim with a mail domain to form the full
/// address; no case folding or trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !USERNAME_REGEX.is_match(&value) {
            return Err(UsernameError::InvalidCharacters);
        }
        if value.len() < MIN_USERNAME_LENGTH {
            return Err(UsernameError::TooShort);
        }
        Ok(Self(value))
    }
}

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
