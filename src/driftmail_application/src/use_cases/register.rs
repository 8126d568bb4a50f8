use driftmail_core::{
    EmailAddress, IdentityBackend, IdentityBackendError, IdentityUser, LinkedAccountStore,
    LinkedAccountStoreError, MailDomain, MailboxProvider, MailboxProviderError, NewLinkedAccount,
    Password, Username,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("No domain selected")]
    NoDomainSelected,
    #[error(transparent)]
    MailboxCreation(#[from] MailboxProviderError),
    #[error(transparent)]
    IdentityRegistration(#[from] IdentityBackendError),
    #[error(transparent)]
    LinkPersist(#[from] LinkedAccountStoreError),
}

/// Register use case - pairs a disposable mailbox with an identity record.
///
/// The two remote creations and the link insert form a pseudo-transaction:
/// each step runs only after the previous one succeeded, every failure is
/// terminal for the invocation, and nothing is rolled back or retried.
pub struct RegisterUseCase<M, I, L>
where
    M: MailboxProvider,
    I: IdentityBackend,
    L: LinkedAccountStore,
{
    mailbox_provider: M,
    identity_backend: I,
    linked_accounts: L,
}

impl<M, I, L> RegisterUseCase<M, I, L>
where
    M: MailboxProvider,
    I: IdentityBackend,
    L: LinkedAccountStore,
{
    pub fn new(mailbox_provider: M, identity_backend: I, linked_accounts: L) -> Self {
        Self {
            mailbox_provider,
            identity_backend,
            linked_accounts,
        }
    }

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `username` - Validated local part of the mailbox address
    /// * `password` - Validated password, used for both accounts
    /// * `selected_domain` - The domain the caller picked from a fresh listing
    /// * `redirect_to` - Confirmation redirect handed to the identity backend
    ///
    /// # Returns
    /// The registered identity user, or the first failing step's error
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
        selected_domain: Option<&MailDomain>,
        redirect_to: &str,
    ) -> Result<IdentityUser, RegisterError> {
        let domain = selected_domain.ok_or(RegisterError::NoDomainSelected)?;

        // The mailbox must exist before the identity record can be created
        // with the full address. An identity or link failure after this point
        // leaves the mailbox orphaned at the provider; that inconsistency
        // window is accepted, not compensated for.
        let mailbox = self
            .mailbox_provider
            .create_account(&username, &password, domain)
            .await?;

        let email = EmailAddress::compose(&username, domain);

        let user = self
            .identity_backend
            .register(&email, &password, redirect_to)
            .await?;

        self.linked_accounts
            .insert(NewLinkedAccount {
                user_id: user.id,
                mail_tm_id: mailbox.id,
                email_address: email,
            })
            .await?;

        Ok(user)
    }
}
