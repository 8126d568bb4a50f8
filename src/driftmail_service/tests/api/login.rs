use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{TestApp, error_body, identity_session_json};

#[tokio::test]
async fn login_returns_the_identity_session() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_json(json!({
            "address": "alice@example.com",
            "password": "secret1",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "mbx-0001", "token": "mailbox-jwt"})),
        )
        .expect(1)
        .mount(&app.mailbox_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(identity_session_json("alice@example.com")),
        )
        .expect(1)
        .mount(&app.identity_server)
        .await;

    let response = app
        .post_login(&json!({
            "email": "alice@example.com",
            "password": "secret1",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let session: serde_json::Value = response.json().await.unwrap();
    assert_eq!(session["access_token"], "identity-jwt");
    assert_eq!(session["user"]["email"], "alice@example.com");
}

#[tokio::test]
async fn mailbox_rejection_reports_generic_invalid_credentials() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"hydra:description": "wrong password"})),
        )
        .mount(&app.mailbox_server)
        .await;

    let response = app
        .post_login(&json!({
            "email": "alice@example.com",
            "password": "secret1",
        }))
        .await;

    // The provider's own message must never leak through.
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_body(response).await, "Invalid email or password");
    assert_eq!(app.identity_request_count().await, 0);
}

#[tokio::test]
async fn identity_rejection_passes_the_backend_message_verbatim() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "mbx-0001", "token": "mailbox-jwt"})),
        )
        .mount(&app.mailbox_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials",
        })))
        .mount(&app.identity_server)
        .await;

    let response = app
        .post_login(&json!({
            "email": "alice@example.com",
            "password": "secret1",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_body(response).await, "Invalid login credentials");
}
