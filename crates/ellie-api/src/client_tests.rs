//! Unit and integration tests for the EllieClient.

use super::*;
use crate::error::{ApiError, Error};

// Test: EllieClient::new() should store the API key for later use
#[test]
fn test_ellie_client_stores_api_key() {
    let client = EllieClient::new("my-secret-key").unwrap();
    assert_eq!(client.api_key(), "my-secret-key");
}

// Test: EllieClient should implement Clone
#[test]
fn test_ellie_client_is_clone() {
    let client = EllieClient::new("test-key").unwrap();
    let cloned = client.clone();
    assert_eq!(cloned.api_key(), "test-key");
}

// Test: Debug output must never contain the key
#[test]
fn test_ellie_client_debug_redacts_key() {
    let client = EllieClient::new("test-key-abcdef").unwrap();
    let debug_str = format!("{:?}", client);
    assert!(
        !debug_str.contains("test-key-abcdef"),
        "API key should be redacted in debug output"
    );
    assert!(debug_str.contains("[REDACTED]"));
}

// Test: EllieClient should use the default base URL
#[test]
fn test_ellie_client_default_base_url() {
    let client = EllieClient::new("test-key").unwrap();
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
}

// Test: EllieClient can be created with custom base URL
#[test]
fn test_ellie_client_with_custom_base_url() {
    let client = EllieClient::with_base_url("test-key", "https://test.example.com").unwrap();
    assert_eq!(client.base_url(), "https://test.example.com");
}

// Test: a trailing slash on the base URL does not produce "//v1" paths
#[test]
fn test_ellie_client_trims_trailing_slash() {
    let client = EllieClient::with_base_url("test-key", "https://test.example.com/").unwrap();
    assert_eq!(client.base_url(), "https://test.example.com");
}

// Test: EllieClient uses the default timeout constant
#[test]
fn test_default_timeout() {
    assert_eq!(DEFAULT_TIMEOUT_SECS, 30);
    let client = EllieClient::new("test-key").unwrap();
    assert_eq!(client.request_timeout(), Duration::from_secs(30));
}

// Test: EllieClientBuilder allows chaining all options
#[test]
fn test_builder_chaining() {
    let client = EllieClient::builder("test-key")
        .base_url("https://custom.example.com")
        .request_timeout(Duration::from_secs(45))
        .build()
        .unwrap();

    assert_eq!(client.api_key(), "test-key");
    assert_eq!(client.base_url(), "https://custom.example.com");
    assert_eq!(client.request_timeout(), Duration::from_secs(45));
}

// Test: decode maps malformed JSON to a serialization error
#[test]
fn test_decode_malformed_json() {
    let result: crate::error::Result<serde_json::Value> = EllieClient::decode(b"{oops");
    assert!(matches!(result, Err(Error::Json(_))));
}

mod wiremock_tests {
    use super::*;
    use crate::error::Result;
    use serde::{Deserialize, Serialize};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Echo {
        id: String,
        description: String,
    }

    // Test: GET carries the API key and content negotiation headers
    #[tokio::test]
    async fn test_get_sends_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/users/me"))
            .and(header("x-api-key", "test-key"))
            .and(header("Content-Type", "application/json"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = EllieClient::with_base_url("test-key", mock_server.uri()).unwrap();
        let body = client.get("/v1/users/me").await.unwrap();

        assert_eq!(body, b"{}");
    }

    // Test: for any key, the outgoing request carries exactly that key
    #[tokio::test]
    async fn test_request_carries_exact_api_key() {
        let keys = [
            "short",
            "ellie_live_0123456789abcdef",
            "key-with.dots_and-dashes",
            "MiXeDcAsE==",
        ];

        for key in keys {
            let mock_server = MockServer::start().await;

            Mock::given(header("x-api-key", key))
                .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
                .expect(1)
                .mount(&mock_server)
                .await;

            let client = EllieClient::with_base_url(key, mock_server.uri()).unwrap();
            let result = client.get("/v1/lists/getLists").await;
            assert!(result.is_ok(), "key {key:?} was not sent verbatim");
        }
    }

    // Test: the body is returned unparsed
    #[tokio::test]
    async fn test_send_returns_raw_bytes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/raw"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&mock_server)
            .await;

        let client = EllieClient::with_base_url("test-key", mock_server.uri()).unwrap();
        let body = client.get("/v1/raw").await.unwrap();

        assert_eq!(body, b"not json at all");
    }

    // Test: POST serializes the body as JSON
    #[tokio::test]
    async fn test_post_serializes_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/tasks/createTask"))
            .and(body_json(serde_json::json!({"description": "New task"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "456",
                "description": "New task"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = EllieClient::with_base_url("test-key", mock_server.uri()).unwrap();
        let body = client
            .post(
                "/v1/tasks/createTask",
                &serde_json::json!({"description": "New task"}),
            )
            .await
            .unwrap();
        let echo: Echo = EllieClient::decode(&body).unwrap();

        assert_eq!(echo.id, "456");
        assert_eq!(echo.description, "New task");
    }

    // Test: post_empty sends a POST without a body
    #[tokio::test]
    async fn test_post_empty_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/tasks/markTaskAsComplete"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "123",
                "description": "Done"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = EllieClient::with_base_url("test-key", mock_server.uri()).unwrap();
        let body = client
            .post_empty("/v1/tasks/markTaskAsComplete?taskId=123")
            .await
            .unwrap();
        let echo: Echo = EllieClient::decode(&body).unwrap();

        assert_eq!(echo.id, "123");

        let received = mock_server.received_requests().await.unwrap();
        assert!(received[0].body.is_empty());
    }

    // Test: 401 maps to an auth error carrying the status and raw body
    #[tokio::test]
    async fn test_unauthorized_maps_to_auth_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"message":"Forbidden"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = EllieClient::with_base_url("bad-key", mock_server.uri()).unwrap();
        let result = client.get("/v1/users/me").await;

        match result {
            Err(Error::Api(api_error)) => {
                assert!(api_error.is_auth());
                assert_eq!(api_error.status(), 401);
                assert_eq!(api_error.message(), r#"{"message":"Forbidden"}"#);
            }
            other => panic!("Expected Auth error, got: {:?}", other),
        }
    }

    // Test: other non-2xx statuses keep their code and body
    #[tokio::test]
    async fn test_server_error_keeps_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = EllieClient::with_base_url("test-key", mock_server.uri()).unwrap();
        let result = client.post_empty("/v1/anything").await;

        match result {
            Err(Error::Api(ApiError::Http { status, message })) => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("Expected Http error, got: {:?}", other),
        }
    }

    // Test: 204 counts as success, 300 does not
    #[tokio::test]
    async fn test_success_range_boundaries() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/no-content"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;
        Mock::given(path("/multiple-choices"))
            .respond_with(ResponseTemplate::new(300).set_body_string("choose"))
            .mount(&mock_server)
            .await;

        let client = EllieClient::with_base_url("test-key", mock_server.uri()).unwrap();

        let body = client.get("/no-content").await.unwrap();
        assert!(body.is_empty());

        match client.get("/multiple-choices").await {
            Err(Error::Api(api_error)) => assert_eq!(api_error.status(), 300),
            other => panic!("Expected Api error, got: {:?}", other),
        }
    }

    // Test: 429 is returned immediately, never retried
    #[tokio::test]
    async fn test_rate_limit_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("Retry-After", "12")
                    .set_body_string("Too many requests"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = EllieClient::with_base_url("test-key", mock_server.uri()).unwrap();
        let result = client.get("/v1/tasks/getBraindump").await;

        match result {
            Err(Error::Api(ApiError::RateLimit {
                retry_after,
                message,
            })) => {
                assert_eq!(retry_after, Some(12));
                assert_eq!(message, "Too many requests");
            }
            other => panic!("Expected RateLimit error, got: {:?}", other),
        }
    }

    // Test: slow responses fail with a transport timeout
    #[tokio::test]
    async fn test_client_timeout_on_slow_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&mock_server)
            .await;

        let client = EllieClientBuilder::new("test-key")
            .base_url(mock_server.uri())
            .request_timeout(Duration::from_secs(1))
            .build()
            .unwrap();

        let result: Result<Vec<u8>> = client.get("/v1/slow").await;

        match result {
            Err(Error::Transport(req_err)) => {
                assert!(
                    req_err.is_timeout(),
                    "Expected timeout error, got: {:?}",
                    req_err
                );
            }
            Err(e) => panic!("Expected transport timeout error, got: {:?}", e),
            Ok(_) => panic!("Expected error, got success"),
        }
    }

    // Test: unreachable hosts surface as transport errors
    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = EllieClient::with_base_url("test-key", "http://127.0.0.1:1").unwrap();
        let result = client.get("/v1/users/me").await;

        assert!(matches!(result, Err(Error::Transport(_))));
    }

    // Test: an error body cut short surfaces as a transport error, not an empty ApiError
    #[tokio::test]
    async fn test_truncated_error_body_is_transport_error() {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial",
                );
            }
        });

        let client = EllieClient::with_base_url("test-key", format!("http://{addr}")).unwrap();
        let result = client.get("/v1/users/me").await;

        assert!(
            matches!(result, Err(Error::Transport(_))),
            "Expected transport error, got: {:?}",
            result
        );
    }

    // Test: keys that cannot be a header value are rejected before sending
    #[tokio::test]
    async fn test_invalid_api_key_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = EllieClient::with_base_url("bad\nkey", mock_server.uri()).unwrap();
        let result = client.get("/v1/users/me").await;

        assert!(matches!(result, Err(Error::InvalidApiKey)));
    }
}
