use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{TestApp, error_body};

#[tokio::test]
async fn logout_forwards_the_bearer_token() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("Authorization", "Bearer identity-jwt"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.identity_server)
        .await;

    let response = app.post_logout(Some("identity-jwt")).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn logout_without_a_token_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.post_logout(None).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_body(response).await, "Missing access token");
    assert_eq!(app.identity_request_count().await, 0);
}
