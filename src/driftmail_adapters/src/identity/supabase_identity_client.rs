use driftmail_core::{
    EmailAddress, IdentityBackend, IdentityBackendError, IdentitySession, IdentityUser, Password,
};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use uuid::Uuid;

/// Client for a Supabase-shaped identity backend (GoTrue auth API).
///
/// The backend owns credentials and session lifecycles; this client only
/// performs sign-up, password sign-in, and sign-out.
#[derive(Clone)]
pub struct SupabaseIdentityClient {
    http_client: Client,
    base_url: String,
    anon_key: Secret<String>,
}

impl SupabaseIdentityClient {
    pub fn new(base_url: String, anon_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            anon_key,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| e.to_string())
    }
}

#[async_trait::async_trait]
impl IdentityBackend for SupabaseIdentityClient {
    #[tracing::instrument(name = "Registering identity user", skip_all)]
    async fn register(
        &self,
        email: &EmailAddress,
        password: &Password,
        redirect_to: &str,
    ) -> Result<IdentityUser, IdentityBackendError> {
        let url = self
            .endpoint(SIGNUP_PATH)
            .map_err(IdentityBackendError::Rejected)?;

        let request_body = CredentialsRequest {
            email: email.as_str(),
            password: password.as_ref().expose_secret(),
        };

        let response = self
            .http_client
            .post(url)
            .header(APIKEY_HEADER, self.anon_key.expose_secret())
            .query(&[("redirect_to", redirect_to)])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| IdentityBackendError::Rejected(e.to_string()))?;

        if !response.status().is_success() {
            let message = error_message(response, SIGNUP_FALLBACK).await;
            return Err(IdentityBackendError::Rejected(message));
        }

        // Depending on confirmation settings the backend returns either the
        // bare user object or a session wrapping it.
        let body: SignupResponse = response
            .json()
            .await
            .map_err(|_| IdentityBackendError::Rejected(NO_USER_FALLBACK.to_string()))?;

        match (body.user, body.id) {
            (Some(user), _) => Ok(IdentityUser {
                id: user.id,
                email: user.email,
            }),
            (None, Some(id)) => Ok(IdentityUser {
                id,
                email: body.email.unwrap_or_else(|| email.to_string()),
            }),
            _ => Err(IdentityBackendError::Rejected(NO_USER_FALLBACK.to_string())),
        }
    }

    #[tracing::instrument(name = "Authenticating identity user", skip_all)]
    async fn login(
        &self,
        email: &EmailAddress,
        password: &Password,
    ) -> Result<IdentitySession, IdentityBackendError> {
        let url = self
            .endpoint(TOKEN_PATH)
            .map_err(IdentityBackendError::AuthFailed)?;

        let request_body = CredentialsRequest {
            email: email.as_str(),
            password: password.as_ref().expose_secret(),
        };

        let response = self
            .http_client
            .post(url)
            .header(APIKEY_HEADER, self.anon_key.expose_secret())
            .query(&[("grant_type", "password")])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| IdentityBackendError::AuthFailed(e.to_string()))?;

        if !response.status().is_success() {
            let message = error_message(response, SIGNIN_FALLBACK).await;
            return Err(IdentityBackendError::AuthFailed(message));
        }

        let grant: TokenGrantResponse = response
            .json()
            .await
            .map_err(|_| IdentityBackendError::AuthFailed(NO_USER_FALLBACK.to_string()))?;

        Ok(IdentitySession {
            user: IdentityUser {
                id: grant.user.id,
                email: grant.user.email,
            },
            access_token: grant.access_token,
            expires_in: grant.expires_in,
        })
    }

    #[tracing::instrument(name = "Signing out identity session", skip_all)]
    async fn logout(&self, access_token: &Secret<String>) -> Result<(), IdentityBackendError> {
        let url = self
            .endpoint(LOGOUT_PATH)
            .map_err(IdentityBackendError::SignoutFailed)?;

        let response = self
            .http_client
            .post(url)
            .header(APIKEY_HEADER, self.anon_key.expose_secret())
            .bearer_auth(access_token.expose_secret())
            .send()
            .await
            .map_err(|e| IdentityBackendError::SignoutFailed(e.to_string()))?;

        if !response.status().is_success() {
            let message = error_message(response, SIGNOUT_FALLBACK).await;
            return Err(IdentityBackendError::SignoutFailed(message));
        }

        Ok(())
    }
}

const SIGNUP_PATH: &str = "/auth/v1/signup";
const TOKEN_PATH: &str = "/auth/v1/token";
const LOGOUT_PATH: &str = "/auth/v1/logout";
const APIKEY_HEADER: &str = "apikey";

const SIGNUP_FALLBACK: &str = "Failed to sign up";
const SIGNIN_FALLBACK: &str = "Failed to sign in";
const SIGNOUT_FALLBACK: &str = "Failed to sign out";
const NO_USER_FALLBACK: &str = "No user data returned";

#[derive(serde::Serialize, Debug)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct UserPayload {
    id: Uuid,
    email: String,
}

#[derive(Deserialize)]
struct SignupResponse {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user: Option<UserPayload>,
}

#[derive(Deserialize)]
struct TokenGrantResponse {
    access_token: Secret<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    user: UserPayload,
}

/// Pull a human-readable message out of a backend error body, falling back
/// to a fixed message when the body is absent or opaque.
async fn error_message(response: reqwest::Response, fallback: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        msg: Option<String>,
        error_description: Option<String>,
        message: Option<String>,
    }

    match response.json::<ErrorBody>().await {
        Ok(body) => body
            .msg
            .or(body.error_description)
            .or(body.message)
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}
