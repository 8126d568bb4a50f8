use driftmail_core::{IdentityBackend, IdentityBackendError};
use secrecy::Secret;

/// Error types specific to the logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error(transparent)]
    Identity(#[from] IdentityBackendError),
}

/// Logout use case - ends the identity backend session.
pub struct LogoutUseCase<I>
where
    I: IdentityBackend,
{
    identity_backend: I,
}

impl<I> LogoutUseCase<I>
where
    I: IdentityBackend,
{
    pub fn new(identity_backend: I) -> Self {
        Self { identity_backend }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(&self, access_token: &Secret<String>) -> Result<(), LogoutError> {
        self.identity_backend.logout(access_token).await?;
        Ok(())
    }
}
