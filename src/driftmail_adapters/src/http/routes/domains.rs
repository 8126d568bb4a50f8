use axum::{Json, extract::State, response::IntoResponse};
use driftmail_application::ListDomainsUseCase;
use driftmail_core::MailboxProvider;

use super::error::ApiError;

#[tracing::instrument(name = "List domains", skip_all)]
pub async fn list_domains<M>(
    State(mailbox_provider): State<M>,
) -> Result<impl IntoResponse, ApiError>
where
    M: MailboxProvider + Clone + 'static,
{
    let use_case = ListDomainsUseCase::new(mailbox_provider);
    let domains = use_case.execute().await?;

    Ok(Json(domains))
}
