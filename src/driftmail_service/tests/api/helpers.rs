use std::time::Duration;

use driftmail_adapters::config::constants;
use driftmail_adapters::{InMemoryLinkedAccountStore, MailTmClient, SupabaseIdentityClient};
use driftmail_service::DriftmailService;
use secrecy::Secret;
use serde_json::json;
use wiremock::MockServer;

pub const ANON_KEY: &str = "test-anon-key";
pub const REDIRECT_TO: &str = "http://localhost:3000/auth/callback";
pub const USER_ID: &str = "4f2b8f0e-9a51-4c7e-a6ff-0a6a2a1f9b11";

/// One service instance wired to two wiremock upstreams and an in-memory
/// linked-account store.
pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub mailbox_server: MockServer,
    pub identity_server: MockServer,
    pub linked_accounts: InMemoryLinkedAccountStore,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let mailbox_server = MockServer::start().await;
        let identity_server = MockServer::start().await;

        let upstream_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(constants::test::TIMEOUT_IN_MILLIS))
            .build()
            .expect("Failed to build upstream HTTP client");

        let mailbox_provider = MailTmClient::new(mailbox_server.uri(), upstream_client.clone());
        let identity_backend = SupabaseIdentityClient::new(
            identity_server.uri(),
            Secret::from(ANON_KEY.to_string()),
            upstream_client,
        );
        let linked_accounts = InMemoryLinkedAccountStore::new();

        let service = DriftmailService::new(
            mailbox_provider,
            identity_backend,
            linked_accounts.clone(),
            REDIRECT_TO.to_string(),
            "assets".to_string(),
        );

        let listener = tokio::net::TcpListener::bind(constants::test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Listener has no local address")
        );

        let router = service.into_router();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server crashed");
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
            mailbox_server,
            identity_server,
            linked_accounts,
        }
    }

    pub async fn get_domains(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/domains", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_register(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/register", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_logout(&self, bearer_token: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.post(format!("{}/logout", self.address));
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn mailbox_request_count(&self) -> usize {
        self.mailbox_server
            .received_requests()
            .await
            .expect("Request recording is enabled")
            .len()
    }

    pub async fn identity_request_count(&self) -> usize {
        self.identity_server
            .received_requests()
            .await
            .expect("Request recording is enabled")
            .len()
    }
}

pub fn domain_json() -> serde_json::Value {
    json!({
        "id": "d1",
        "domain": "example.com",
        "isActive": true,
        "isPrivate": false,
    })
}

pub fn mailbox_account_json(address: &str) -> serde_json::Value {
    json!({
        "id": "mbx-0001",
        "address": address,
        "quota": 40_000_000u64,
        "used": 0,
        "isDisabled": false,
        "isDeleted": false,
        "createdAt": "2026-01-01T00:00:00+00:00",
        "updatedAt": "2026-01-01T00:00:00+00:00",
    })
}

pub fn identity_user_json(email: &str) -> serde_json::Value {
    json!({
        "id": USER_ID,
        "aud": "authenticated",
        "email": email,
    })
}

pub fn identity_session_json(email: &str) -> serde_json::Value {
    json!({
        "access_token": "identity-jwt",
        "token_type": "bearer",
        "expires_in": 3600,
        "user": {"id": USER_ID, "email": email},
    })
}

pub async fn error_body(response: reqwest::Response) -> String {
    response
        .json::<serde_json::Value>()
        .await
        .expect("Error response was not JSON")["error"]
        .as_str()
        .expect("Error response had no message")
        .to_string()
}
