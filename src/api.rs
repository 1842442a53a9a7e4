use crate::{
    errors::{ChatError, ChatResult},
    logging::log_api_call,
    models::{ChatReply, ChatRequest},
};
use reqwest::Client;
use serde_json::Value;
use std::time::Instant;

/// Posts one `{message, persona}` payload to the chat endpoint and maps
/// the three outcomes the UI cares about:
///
/// - transport failure -> `ChatError::Network`
/// - non-success status -> `ChatError::Server` (the diagnostic body, if
///   any, is logged; a body that fails to parse is ignored)
/// - success status with a body that is not valid JSON ->
///   `ChatError::MalformedReply`
pub async fn send_chat(
    client: &Client,
    api_url: &str,
    request: &ChatRequest,
) -> ChatResult<ChatReply> {
    let started = Instant::now();

    let response = client
        .post(api_url)
        .json(request)
        .send()
        .await
        .map_err(|e| ChatError::network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        // Best-effort diagnostics only; an unreadable error body must not
        // mask the status code.
        if let Ok(body) = response.json::<Value>().await {
            if let Some(detail) = body["error"].as_str() {
                log::warn!("chat api error detail: {}", detail);
            }
        }
        log_api_call(api_url, status.as_u16(), started.elapsed());
        return Err(ChatError::Server {
            status: status.as_u16(),
        });
    }

    let reply: ChatReply = response
        .json()
        .await
        .map_err(|e| ChatError::malformed(e.to_string()))?;

    log_api_call(api_url, status.as_u16(), started.elapsed());
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn request() -> ChatRequest {
        ChatRequest {
            message: "hello".to_string(),
            persona: "kind_ta".to_string(),
        }
    }

    #[tokio::test]
    async fn success_carries_reply_and_sentiment() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({ "message": "hello", "persona": "kind_ta" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "reply": "hi there",
                "sentiment": "happy",
                "sentiment_label": "happy",
                "sentiment_emoji": "😊",
                "persona": "kind_ta"
            })))
            .mount(&server)
            .await;

        let url = format!("{}/api/chat", server.uri());
        let reply = send_chat(&Client::new(), &url, &request()).await.unwrap();

        assert_eq!(reply.reply.as_deref(), Some("hi there"));
        assert_eq!(reply.sentiment_pair(), Some(("😊", "happy")));
    }

    #[tokio::test]
    async fn empty_body_deserializes_to_all_none() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let url = format!("{}/api/chat", server.uri());
        let reply = send_chat(&Client::new(), &url, &request()).await.unwrap();

        assert!(reply.reply.is_none());
        assert!(reply.sentiment_pair().is_none());
    }

    #[tokio::test]
    async fn server_error_carries_status_code() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })),
            )
            .mount(&server)
            .await;

        let url = format!("{}/api/chat", server.uri());
        let err = send_chat(&Client::new(), &url, &request())
            .await
            .unwrap_err();

        match err {
            ChatError::Server { status } => assert_eq!(status, 500),
            other => panic!("expected Server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unparseable_error_body_still_reports_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(503).set_body_string("gateway says no"))
            .mount(&server)
            .await;

        let url = format!("{}/api/chat", server.uri());
        let err = send_chat(&Client::new(), &url, &request())
            .await
            .unwrap_err();

        match err {
            ChatError::Server { status } => assert_eq!(status, 503),
            other => panic!("expected Server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_success_body_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let url = format!("{}/api/chat", server.uri());
        let err = send_chat(&Client::new(), &url, &request())
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::MalformedReply(_)));
    }

    #[tokio::test]
    async fn transport_failure_is_a_network_error() {
        // Port 9 (discard) is never bound in the test environment; the
        // timeout keeps the test finite if the connection hangs instead.
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap();
        let err = send_chat(&client, "http://127.0.0.1:9/api/chat", &request())
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::Network(_)));
    }
}
