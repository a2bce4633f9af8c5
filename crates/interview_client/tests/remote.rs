use std::time::Duration;

use interview_client::{
    ClientError, ClientSettings, GeneratedQuestion, InterviewApi, ReqwestClient,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestClient {
    ReqwestClient::new(&ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("client")
}

#[tokio::test]
async fn generate_questions_posts_url_and_parses_questions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-questions"))
        .and(body_json(json!({ "url": "http://example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": [
                { "question": "Age?", "options": ["<18", "18-30", "30+"] }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let questions = client_for(&server)
        .generate_questions("http://example.com")
        .await
        .expect("questions");

    assert_eq!(
        questions,
        vec![GeneratedQuestion {
            question: "Age?".to_string(),
            options: vec!["<18".to_string(), "18-30".to_string(), "30+".to_string()],
        }]
    );
}

#[tokio::test]
async fn generate_questions_maps_server_error_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-questions"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": "Failed to retrieve webpage" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_questions("http://example.com")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Status {
            status: 500,
            detail: Some("Failed to retrieve webpage".to_string()),
        }
    );
    assert!(!err.is_transport());
}

#[tokio::test]
async fn status_without_error_body_has_no_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-questions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_questions("http://example.com")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Status {
            status: 503,
            detail: None,
        }
    );
}

#[tokio::test]
async fn malformed_questions_payload_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_questions("http://example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
    assert!(!err.is_transport());
}

#[tokio::test]
async fn categorize_posts_user_response_and_returns_label() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/categorize"))
        .and(body_json(json!({ "user_response": "Yes, No" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "category": "Explorer" })))
        .expect(1)
        .mount(&server)
        .await;

    let category = client_for(&server)
        .categorize("Yes, No")
        .await
        .expect("category");

    assert_eq!(category, "Explorer");
}

#[tokio::test]
async fn categorize_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/categorize"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client_for(&server).categorize("").await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 502, .. }));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Bind then drop a listener so the port is very likely closed.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        format!("http://{}", listener.local_addr().expect("addr"))
    };
    let client = ReqwestClient::new(&ClientSettings {
        base_url: uri,
        connect_timeout: Some(Duration::from_secs(2)),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client
        .generate_questions("http://example.com")
        .await
        .unwrap_err();

    assert!(err.is_transport(), "got {err:?}");
}

#[tokio::test]
async fn slow_response_times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/categorize"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "category": "late" })),
        )
        .mount(&server)
        .await;

    let client = ReqwestClient::new(&ClientSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.categorize("x").await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(_)), "got {err:?}");
}
