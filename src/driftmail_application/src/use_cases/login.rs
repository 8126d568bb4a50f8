use driftmail_core::{
    EmailAddress, IdentityBackend, IdentityBackendError, IdentitySession, MailboxProvider,
    Password,
};

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Identity(#[from] IdentityBackendError),
}

/// Login use case - authenticates against the mailbox provider first, then
/// the identity backend.
pub struct LoginUseCase<M, I>
where
    M: MailboxProvider,
    I: IdentityBackend,
{
    mailbox_provider: M,
    identity_backend: I,
}

impl<M, I> LoginUseCase<M, I>
where
    M: MailboxProvider,
    I: IdentityBackend,
{
    pub fn new(mailbox_provider: M, identity_backend: I) -> Self {
        Self {
            mailbox_provider,
            identity_backend,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// The identity backend session on success. A mailbox rejection is always
    /// reported as generic invalid credentials; an identity rejection carries
    /// the backend's own message.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: EmailAddress,
        password: Password,
    ) -> Result<IdentitySession, LoginError> {
        // The provider's error text is never surfaced: a caller must not be
        // able to tell which backend rejected the attempt.
        self.mailbox_provider
            .authenticate(&email, &password)
            .await
            .map_err(|_| LoginError::InvalidCredentials)?;

        let session = self.identity_backend.login(&email, &password).await?;

        Ok(session)
    }
}
