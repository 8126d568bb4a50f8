use driftmail_core::{
    EmailAddress, MailDomain, MailboxAccount, MailboxProvider, MailboxProviderError, MailboxToken,
    Password, Username,
};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Client for a mail.tm-shaped temporary-mailbox provider.
///
/// Every call is single-shot; the configured `reqwest::Client` timeout is the
/// only bound on an unresponsive remote.
#[derive(Clone)]
pub struct MailTmClient {
    http_client: Client,
    base_url: String,
}

impl MailTmClient {
    pub fn new(base_url: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| e.to_string())
    }
}

#[async_trait::async_trait]
impl MailboxProvider for MailTmClient {
    #[tracing::instrument(name = "Listing mailbox domains", skip_all)]
    async fn list_domains(&self) -> Result<Vec<MailDomain>, MailboxProviderError> {
        let url = self
            .endpoint(DOMAINS_PATH)
            .map_err(MailboxProviderError::Unavailable)?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| MailboxProviderError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let message = error_message(response, DOMAINS_FALLBACK).await;
            return Err(MailboxProviderError::Unavailable(message));
        }

        let collection: HydraCollection<MailDomain> = response
            .json()
            .await
            .map_err(|_| MailboxProviderError::Unavailable(DOMAINS_FALLBACK.to_string()))?;

        Ok(collection.member)
    }

    #[tracing::instrument(name = "Creating mailbox account", skip_all)]
    async fn create_account(
        &self,
        username: &Username,
        password: &Password,
        domain: &MailDomain,
    ) -> Result<MailboxAccount, MailboxProviderError> {
        let url = self
            .endpoint(ACCOUNTS_PATH)
            .map_err(MailboxProviderError::Rejected)?;

        let address = EmailAddress::compose(username, domain);
        let request_body = CredentialsRequest {
            address: address.as_str(),
            password: password.as_ref().expose_secret(),
        };

        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| MailboxProviderError::Rejected(e.to_string()))?;

        if !response.status().is_success() {
            let message = error_message(response, CREATE_FALLBACK).await;
            return Err(MailboxProviderError::Rejected(message));
        }

        // A success body missing expected fields is a rejection, never a
        // half-populated account.
        response
            .json::<MailboxAccount>()
            .await
            .map_err(|_| MailboxProviderError::Rejected(CREATE_FALLBACK.to_string()))
    }

    #[tracing::instrument(name = "Authenticating mailbox account", skip_all)]
    async fn authenticate(
        &self,
        address: &EmailAddress,
        password: &Password,
    ) -> Result<MailboxToken, MailboxProviderError> {
        let url = self
            .endpoint(TOKEN_PATH)
            .map_err(MailboxProviderError::AuthFailed)?;

        let request_body = CredentialsRequest {
            address: address.as_str(),
            password: password.as_ref().expose_secret(),
        };

        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| MailboxProviderError::AuthFailed(e.to_string()))?;

        if !response.status().is_success() {
            let message = error_message(response, LOGIN_FALLBACK).await;
            return Err(MailboxProviderError::AuthFailed(message));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|_| MailboxProviderError::AuthFailed(LOGIN_FALLBACK.to_string()))?;

        Ok(MailboxToken {
            id: token.id,
            token: token.token,
        })
    }
}

const DOMAINS_PATH: &str = "/domains";
const ACCOUNTS_PATH: &str = "/accounts";
const TOKEN_PATH: &str = "/token";

const DOMAINS_FALLBACK: &str = "Failed to fetch available domains";
const CREATE_FALLBACK: &str = "Failed to create account";
const LOGIN_FALLBACK: &str = "Failed to login";

#[derive(serde::Serialize, Debug)]
struct CredentialsRequest<'a> {
    address: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct HydraCollection<T> {
    #[serde(rename = "hydra:member")]
    member: Vec<T>,
}

#[derive(Deserialize)]
struct TokenResponse {
    id: String,
    token: Secret<String>,
}

/// Pull a human-readable message out of a provider error body, falling back
/// to a fixed message when the body is absent or opaque.
async fn error_message(response: reqwest::Response, fallback: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(rename = "hydra:description")]
        hydra_description: Option<String>,
        message: Option<String>,
    }

    match response.json::<ErrorBody>().await {
        Ok(body) => body
            .hydra_description
            .or(body.message)
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}
