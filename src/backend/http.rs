use anyhow::{Context, Result, bail};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use super::{BackendClient, BackendUnavailable};

/// Endpoint used when neither the CLI nor the config file names one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    response: String,
}

/// JSON-over-HTTP backend.
///
/// Posts `{"message": ...}` to the endpoint and expects `{"response": ...}`.
/// No timeout or retry is applied.
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl BackendClient for HttpBackend {
    async fn send(&self, message: &str) -> Result<String, BackendUnavailable> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&PredictRequest { message })
            .send()
            .await
            .map_err(|e| {
                BackendUnavailable::network(format!(
                    "failed to connect to {}: {e}",
                    self.endpoint
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendUnavailable::status(status.as_u16(), body));
        }

        let reply: PredictResponse = response
            .json()
            .await
            .map_err(|e| BackendUnavailable::malformed(e.to_string()))?;

        Ok(reply.response)
    }
}

/// Parses and checks an endpoint URL.
///
/// # Errors
///
/// Returns an error if the URL does not parse or is not `http`/`https`.
pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL: '{endpoint}'"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Only http:// and https:// endpoints are supported."
        );
    }

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::FailureCause;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn backend_for(server: &MockServer) -> HttpBackend {
        let url = parse_endpoint(&format!("{}/predict", server.uri())).unwrap();
        HttpBackend::new(url)
    }

    #[tokio::test]
    async fn test_send_posts_message_and_returns_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(body_json(serde_json::json!({ "message": "Hello" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": "Hi!" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let backend = backend_for(&server).await;
        let reply = backend.send("Hello").await.unwrap();

        assert_eq!(reply, "Hi!");
    }

    #[tokio::test]
    async fn test_send_non_success_status_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let backend = backend_for(&server).await;
        let err = backend.send("Hello").await.unwrap_err();

        assert_eq!(err.cause(), FailureCause::Status(500));
        assert_eq!(err.detail(), "boom");
    }

    #[tokio::test]
    async fn test_send_missing_response_field_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "reply": "Hi!" })),
            )
            .mount(&server)
            .await;

        let backend = backend_for(&server).await;
        let err = backend.send("Hello").await.unwrap_err();

        assert_eq!(err.cause(), FailureCause::MalformedResponse);
    }

    #[tokio::test]
    async fn test_send_non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let backend = backend_for(&server).await;
        let err = backend.send("Hello").await.unwrap_err();

        assert_eq!(err.cause(), FailureCause::MalformedResponse);
    }

    #[tokio::test]
    async fn test_send_connection_refused_is_network_failure() {
        // Bind then release a port so nothing is listening on it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = parse_endpoint(&format!("http://127.0.0.1:{port}/predict")).unwrap();
        let backend = HttpBackend::new(url);
        let err = backend.send("Hello").await.unwrap_err();

        assert_eq!(err.cause(), FailureCause::Network);
    }

    #[test]
    fn test_parse_endpoint_accepts_http_and_https() {
        assert!(parse_endpoint(DEFAULT_ENDPOINT).is_ok());
        assert!(parse_endpoint("https://chat.example.com/predict").is_ok());
    }

    #[test]
    fn test_parse_endpoint_rejects_other_schemes() {
        let err = parse_endpoint("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("http://"));
        assert!(parse_endpoint("not a url").is_err());
    }
}
