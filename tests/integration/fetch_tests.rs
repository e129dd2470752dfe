//! Fetcher tests against a mock server

use colo_status::page::fetch_page;
use colo_status::{FetchError, TransportCause};
use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_returns_body_and_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestAgent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let body = fetch_page(&Client::new(), &url, "TestAgent/1.0", &CancellationToken::new())
        .await
        .expect("fetch should succeed");

    assert_eq!(body.as_ref(), b"<html>ok</html>");
}

#[tokio::test]
async fn test_non_200_is_unexpected_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let result = fetch_page(&Client::new(), &url, "TestAgent/1.0", &CancellationToken::new()).await;

    match result {
        Err(FetchError::UnexpectedStatus { url: failed_url, status }) => {
            assert_eq!(failed_url, url);
            assert_eq!(status, 503);
        }
        other => panic!("expected unexpected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_other_success_codes_are_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let result = fetch_page(&Client::new(), &url, "TestAgent/1.0", &CancellationToken::new()).await;

    assert!(matches!(
        result,
        Err(FetchError::UnexpectedStatus { status: 204, .. })
    ));
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>late</html>")
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&mock_server)
        .await;

    let cancel = CancellationToken::new();
    let canceller = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            cancel.cancel();
        })
    };

    let url = format!("{}/", mock_server.uri());
    let result = fetch_page(&Client::new(), &url, "TestAgent/1.0", &cancel).await;
    canceller.await.unwrap();

    assert!(matches!(
        result,
        Err(FetchError::Transport {
            source: TransportCause::Cancelled,
            ..
        })
    ));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let url = format!("{}/", mock_server.uri());
    let result = fetch_page(&client, &url, "TestAgent/1.0", &CancellationToken::new()).await;

    match result {
        Err(FetchError::Transport {
            source: TransportCause::Http(e),
            ..
        }) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}
