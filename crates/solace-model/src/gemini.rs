//! Blocking Gemini client

use crate::codec::{build_request_body, extract_reply};
use crate::retry::RetryPolicy;
use solace_core::{Config, LanguageModel, ModelError};
use std::time::Duration;
use tracing::{debug, warn};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Calls `models/<model>:generateContent`, blocking the caller until a
/// reply arrives, the timeout fires, or retries run out.
pub struct GeminiClient {
    http: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ModelError::Runtime(e.to_string()))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ModelError::Runtime(e.to_string()))?;

        Ok(Self {
            http,
            runtime,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: API_BASE.to_string(),
            timeout: config.request_timeout,
            retry: RetryPolicy::from_config(config),
        })
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    async fn generate_once(&self, prompt: &str) -> Result<String, ModelError> {
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request_body(prompt))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(ModelError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        extract_reply(&body)
    }

    async fn generate_with_retry(&self, prompt: &str) -> Result<String, ModelError> {
        let mut retries = 0;
        loop {
            match self.generate_once(prompt).await {
                Ok(text) => {
                    debug!(model = %self.model, retries, reply_chars = text.len(), "model replied");
                    return Ok(text);
                }
                Err(err) if self.retry.should_retry(retries, &err) => {
                    retries += 1;
                    let delay = self.retry.delay_for(retries);
                    warn!(model = %self.model, retries, ?delay, error = %err, "retrying model call");
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ModelError {
        if err.is_timeout() {
            ModelError::Timeout(self.timeout)
        } else {
            ModelError::Transport(err.to_string())
        }
    }
}

impl LanguageModel for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.runtime.block_on(self.generate_with_retry(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn test_config() -> Config {
        Config {
            api_key: "test-key".to_string(),
            max_retries: 0,
            request_timeout: Duration::from_secs(2),
            ..Config::new()
        }
    }

    /// Serve scripted `(status, body)` responses, one per connection, counting requests
    fn scripted_server(responses: Vec<(u16, &'static str)>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let served = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&served);

        std::thread::spawn(move || {
            for (status, body) in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                let mut reader = BufReader::new(stream);
                let mut content_length = 0;
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':') {
                        if name.eq_ignore_ascii_case("content-length") {
                            content_length = value.trim().parse().unwrap_or(0);
                        }
                    }
                }
                let mut request_body = vec![0u8; content_length];
                let _ = reader.read_exact(&mut request_body);
                counter.fetch_add(1, Ordering::SeqCst);

                let response = format!(
                    "HTTP/1.1 {} Scripted\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let mut stream = reader.into_inner();
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        (base_url, served)
    }

    const REPLY_BODY: &str = r#"{"candidates":[{"content":{"parts":[{"text":"glad"}]}}]}"#;

    #[test]
    fn test_endpoint_uses_model() {
        let client = GeminiClient::new(&test_config()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-pro-latest:generateContent"
        );
        assert_eq!(client.name(), "gemini-1.5-pro-latest");
    }

    #[test]
    fn test_custom_base_url() {
        let client = GeminiClient::new(&test_config())
            .unwrap()
            .with_base_url("http://localhost:8080/v1/");
        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/v1/models/gemini-1.5-pro-latest:generateContent"
        );
    }

    #[test]
    fn test_unreachable_service_is_error_not_panic() {
        let client = GeminiClient::new(&test_config())
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let err = client.generate("hello").unwrap_err();
        assert!(matches!(
            err,
            ModelError::Transport(_) | ModelError::Timeout(_)
        ));
    }

    #[test]
    fn test_transient_status_is_retried_until_success() {
        let (base_url, served) =
            scripted_server(vec![(503, "busy"), (503, "busy"), (200, REPLY_BODY)]);
        let config = Config {
            max_retries: 2,
            retry_base_delay: Duration::from_millis(10),
            ..test_config()
        };
        let client = GeminiClient::new(&config).unwrap().with_base_url(base_url);

        assert_eq!(client.generate("hello").unwrap(), "glad");
        assert_eq!(served.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_retries_exhausted_returns_last_status() {
        let (base_url, served) = scripted_server(vec![(503, "busy"), (503, "still busy")]);
        let config = Config {
            max_retries: 1,
            retry_base_delay: Duration::from_millis(10),
            ..test_config()
        };
        let client = GeminiClient::new(&config).unwrap().with_base_url(base_url);

        let err = client.generate("hello").unwrap_err();
        assert!(matches!(err, ModelError::Status { status: 503, .. }));
        assert_eq!(served.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_client_error_is_not_retried() {
        let (base_url, served) = scripted_server(vec![(400, "bad key"), (200, REPLY_BODY)]);
        let config = Config {
            max_retries: 2,
            retry_base_delay: Duration::from_millis(10),
            ..test_config()
        };
        let client = GeminiClient::new(&config).unwrap().with_base_url(base_url);

        let err = client.generate("hello").unwrap_err();
        match err {
            ModelError::Status { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "bad key");
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
        assert_eq!(served.load(Ordering::SeqCst), 1);
    }
}
