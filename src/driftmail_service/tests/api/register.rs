use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    REDIRECT_TO, TestApp, domain_json, error_body, identity_user_json, mailbox_account_json,
};

#[tokio::test]
async fn register_creates_both_accounts_and_the_link() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(body_json(json!({
            "address": "alice@example.com",
            "password": "secret1",
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(mailbox_account_json("alice@example.com")),
        )
        .expect(1)
        .mount(&app.mailbox_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(query_param("redirect_to", REDIRECT_TO))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(identity_user_json("alice@example.com")),
        )
        .expect(1)
        .mount(&app.identity_server)
        .await;

    let response = app
        .post_register(&json!({
            "username": "alice",
            "password": "secret1",
            "domain": domain_json(),
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let user: serde_json::Value = response.json().await.unwrap();
    assert_eq!(user["email"], "alice@example.com");

    let links = app.linked_accounts.all().await;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].mail_tm_id, "mbx-0001");
    assert_eq!(links[0].email_address.as_str(), "alice@example.com");
    assert_eq!(links[0].user_id.to_string(), user["id"].as_str().unwrap());
}

#[tokio::test]
async fn register_without_a_domain_makes_no_remote_call() {
    let app = TestApp::spawn().await;

    let response = app
        .post_register(&json!({
            "username": "alice",
            "password": "secret1",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_body(response).await, "No domain selected");
    assert_eq!(app.mailbox_request_count().await, 0);
    assert_eq!(app.identity_request_count().await, 0);
    assert!(app.linked_accounts.all().await.is_empty());
}

#[tokio::test]
async fn register_rejects_invalid_usernames_before_any_remote_call() {
    let app = TestApp::spawn().await;

    let response = app
        .post_register(&json!({
            "username": "not a username",
            "password": "secret1",
            "domain": domain_json(),
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert!(error_body(response).await.starts_with("Invalid input"));
    assert_eq!(app.mailbox_request_count().await, 0);
    assert_eq!(app.identity_request_count().await, 0);
}

#[tokio::test]
async fn mailbox_rejection_stops_registration_with_no_partial_state() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "hydra:description": "address: This value is already used.",
        })))
        .mount(&app.mailbox_server)
        .await;

    let response = app
        .post_register(&json!({
            "username": "alice",
            "password": "secret1",
            "domain": domain_json(),
        }))
        .await;

    assert_eq!(response.status().as_u16(), 502);
    assert_eq!(
        error_body(response).await,
        "address: This value is already used."
    );
    assert_eq!(app.identity_request_count().await, 0);
    assert!(app.linked_accounts.all().await.is_empty());
}

#[tokio::test]
async fn identity_rejection_leaves_the_mailbox_orphaned() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(mailbox_account_json("alice@example.com")),
        )
        .expect(1)
        .mount(&app.mailbox_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"code": 429, "msg": "Email rate limit exceeded"})),
        )
        .mount(&app.identity_server)
        .await;

    let response = app
        .post_register(&json!({
            "username": "alice",
            "password": "secret1",
            "domain": domain_json(),
        }))
        .await;

    assert_eq!(response.status().as_u16(), 502);
    assert_eq!(error_body(response).await, "Email rate limit exceeded");
    // The mailbox account was created upstream, but no link records it.
    assert_eq!(app.mailbox_request_count().await, 1);
    assert!(app.linked_accounts.all().await.is_empty());
}
