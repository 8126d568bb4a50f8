use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use driftmail_application::{LoginError, LogoutError, RegisterError};
use driftmail_core::{EmailAddressError, MailboxProviderError, PasswordError, UsernameError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No domain selected")]
    NoDomainSelected,

    #[error("Missing access token")]
    MissingToken,

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    UpstreamRejected(String),

    #[error("{0}")]
    PersistenceFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            ApiError::InvalidInput(_) | ApiError::NoDomainSelected | ApiError::MissingToken => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.to_string()),

            ApiError::UpstreamRejected(_) => (StatusCode::BAD_GATEWAY, self.to_string()),

            ApiError::PersistenceFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<UsernameError> for ApiError {
    fn from(error: UsernameError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<EmailAddressError> for ApiError {
    fn from(error: EmailAddressError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<MailboxProviderError> for ApiError {
    fn from(error: MailboxProviderError) -> Self {
        ApiError::UpstreamRejected(error.to_string())
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::NoDomainSelected => ApiError::NoDomainSelected,
            RegisterError::MailboxCreation(e) => ApiError::UpstreamRejected(e.to_string()),
            RegisterError::IdentityRegistration(e) => ApiError::UpstreamRejected(e.to_string()),
            RegisterError::LinkPersist(e) => ApiError::PersistenceFailed(e.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::Unauthorized(error.to_string()),
            LoginError::Identity(e) => ApiError::Unauthorized(e.to_string()),
        }
    }
}

impl From<LogoutError> for ApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::Identity(e) => ApiError::UpstreamRejected(e.to_string()),
        }
    }
}
