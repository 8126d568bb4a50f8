use driftmail_core::{MailDomain, MailboxProvider, MailboxProviderError};

/// List-domains use case - feeds the domain selector shown before a
/// registration attempt begins.
pub struct ListDomainsUseCase<M>
where
    M: MailboxProvider,
{
    mailbox_provider: M,
}

impl<M> ListDomainsUseCase<M>
where
    M: MailboxProvider,
{
    pub fn new(mailbox_provider: M) -> Self {
        Self { mailbox_provider }
    }

    #[tracing::instrument(name = "ListDomainsUseCase::execute", skip_all)]
    pub async fn execute(&self) -> Result<Vec<MailDomain>, MailboxProviderError> {
        self.mailbox_provider.list_domains().await
    }
}
