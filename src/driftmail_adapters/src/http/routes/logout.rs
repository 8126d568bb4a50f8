use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use driftmail_application::LogoutUseCase;
use driftmail_core::IdentityBackend;
use secrecy::Secret;

use super::error::ApiError;

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<I>(
    State(identity_backend): State<I>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    I: IdentityBackend + Clone + 'static,
{
    let token = extract_bearer_token(&headers)?.to_owned();

    let use_case = LogoutUseCase::new(identity_backend);
    use_case.execute(&Secret::from(token)).await?;

    Ok(StatusCode::OK)
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::MissingToken)
}
