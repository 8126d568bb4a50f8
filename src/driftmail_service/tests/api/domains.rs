use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{TestApp, domain_json, error_body};

#[tokio::test]
async fn domains_returns_the_provider_listing() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/domains"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"hydra:member": [domain_json()]})),
        )
        .expect(1)
        .mount(&app.mailbox_server)
        .await;

    let response = app.get_domains().await;

    assert_eq!(response.status().as_u16(), 200);
    let domains: serde_json::Value = response.json().await.unwrap();
    assert_eq!(domains, json!([domain_json()]));
}

#[tokio::test]
async fn domains_maps_provider_failures_to_bad_gateway() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/domains"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"hydra:description": "Domains are unavailable"})),
        )
        .mount(&app.mailbox_server)
        .await;

    let response = app.get_domains().await;

    assert_eq!(response.status().as_u16(), 502);
    assert_eq!(error_body(response).await, "Domains are unavailable");
}
