use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use driftmail_application::RegisterUseCase;
use driftmail_core::{
    IdentityBackend, LinkedAccountStore, MailDomain, MailboxProvider, Password, Username,
};
use secrecy::Secret;
use serde::Deserialize;

use super::error::ApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: Secret<String>,
    /// The domain the caller picked from `GET /domains`; absent when the
    /// listing never loaded.
    pub domain: Option<MailDomain>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<M, I, L>(
    State((mailbox_provider, identity_backend, linked_accounts, redirect_to)): State<(
        M,
        I,
        L,
        String,
    )>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MailboxProvider + Clone + 'static,
    I: IdentityBackend + Clone + 'static,
    L: LinkedAccountStore + Clone + 'static,
{
    let username = Username::try_from(request.username)?;
    let password = Password::try_from(request.password)?;

    let use_case = RegisterUseCase::new(mailbox_provider, identity_backend, linked_accounts);

    let user = use_case
        .execute(username, password, request.domain.as_ref(), &redirect_to)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}
