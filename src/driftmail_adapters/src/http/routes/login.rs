use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use driftmail_application::LoginUseCase;
use driftmail_core::{EmailAddress, IdentityBackend, IdentityUser, MailboxProvider, Password};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Serialize)]
pub struct LoginHttpResponse {
    pub user: IdentityUser,
    pub access_token: String,
    pub expires_in: Option<u64>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<M, I>(
    State((mailbox_provider, identity_backend)): State<(M, I)>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MailboxProvider + Clone + 'static,
    I: IdentityBackend + Clone + 'static,
{
    let email = EmailAddress::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = LoginUseCase::new(mailbox_provider, identity_backend);

    let session = use_case.execute(email, password).await?;

    Ok((
        StatusCode::OK,
        Json(LoginHttpResponse {
            user: session.user,
            access_token: session.access_token.expose_secret().clone(),
            expires_in: session.expires_in,
        }),
    ))
}
