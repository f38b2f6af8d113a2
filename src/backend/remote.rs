use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{build_prompt, Backend};
use crate::constants::remote;
use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Sends prompts to an OpenRouter-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct RemoteCompletion {
    api_key: String,
    model: String,
    endpoint: String,
    client: Client,
}

impl RemoteCompletion {
    /// Creates a client for the default endpoint.
    ///
    /// Fails with `BackendUnavailable` when no credential is supplied.
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Result<Self> {
        let api_key = api_key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            Error::BackendUnavailable(format!("{} is not set", remote::API_KEY_ENV))
        })?;
        let client = Client::builder().build().map_err(|e| {
            Error::BackendUnavailable(format!("cannot build HTTP client: {e}"))
        })?;

        Ok(Self {
            api_key,
            model: model.into(),
            endpoint: remote::COMPLETIONS_URL.to_string(),
            client,
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Backend for RemoteCompletion {
    fn execute(&self, template_body: &str, user_input: &str) -> Result<String> {
        let prompt = build_prompt(template_body, user_input);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: &prompt }],
        };

        log::debug!("POST {} (model {})", self.endpoint, self.model);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("X-Title", env!("CARGO_PKG_NAME"))
            .json(&request)
            .send()
            .map_err(|e| Error::ExecutionFailed(format!("request to {} failed: {e}", self.endpoint)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::ExecutionFailed(format!("failed to read response body: {e}")))?;
        if !status.is_success() {
            return Err(Error::ExecutionFailed(format!("HTTP {status}: {}", body.trim())));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| Error::ExecutionFailed(format!("unexpected response body: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(Error::EmptyResponse { backend: self.name().to_string() });
        }
        Ok(content)
    }

    fn name(&self) -> &str {
        "OpenRouter"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serves exactly one HTTP response and hands back the raw request.
    fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        (format!("http://{addr}/api/v1/chat/completions"), handle)
    }

    fn read_request(stream: &mut impl Read) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&data);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    fn client_for(endpoint: String) -> RemoteCompletion {
        RemoteCompletion::new(Some("sk-test".into()), "test/model")
            .unwrap()
            .with_endpoint(endpoint)
            .with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[test]
    fn missing_credential_is_unavailable() {
        assert!(matches!(
            RemoteCompletion::new(None, remote::DEFAULT_MODEL),
            Err(Error::BackendUnavailable(_))
        ));
        assert!(matches!(
            RemoteCompletion::new(Some("  ".into()), remote::DEFAULT_MODEL),
            Err(Error::BackendUnavailable(_))
        ));
    }

    #[test]
    fn defaults_to_openrouter_endpoint() {
        let backend = RemoteCompletion::new(Some("k".into()), remote::DEFAULT_MODEL).unwrap();
        assert_eq!(backend.endpoint(), remote::COMPLETIONS_URL);
        assert_eq!(backend.model(), remote::DEFAULT_MODEL);
    }

    #[test]
    fn request_body_carries_model_and_prompt() {
        let prompt = build_prompt("Body", "Input");
        let request = ChatRequest {
            model: "m",
            messages: vec![ChatMessage { role: "user", content: &prompt }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "m",
                "messages": [{"role": "user", "content": "Body\n\nUser Request:\nInput"}]
            })
        );
    }

    #[test]
    fn returns_first_choice_content() {
        let body = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "  Here is the plan.\n"}}]
        })
        .to_string();
        let (endpoint, server) = serve_once("200 OK", body);

        let response = client_for(endpoint).execute("Template", "Question").unwrap();
        assert_eq!(response, "Here is the plan.");

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /api/v1/chat/completions"));
        assert!(request.to_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains("\"model\":\"test/model\""));
        assert!(request.contains("User Request:"));
    }

    #[test]
    fn http_error_is_execution_failed() {
        let (endpoint, server) =
            serve_once("401 Unauthorized", r#"{"error":"bad key"}"#.to_string());
        match client_for(endpoint).execute("t", "i") {
            Err(Error::ExecutionFailed(msg)) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("bad key"));
            }
            other => panic!("expected ExecutionFailed, got {other:?}"),
        }
        server.join().unwrap();
    }

    #[test]
    fn no_choices_is_empty_response() {
        let (endpoint, server) = serve_once("200 OK", r#"{"choices":[]}"#.to_string());
        assert!(matches!(
            client_for(endpoint).execute("t", "i"),
            Err(Error::EmptyResponse { .. })
        ));
        server.join().unwrap();
    }

    #[test]
    fn unreachable_endpoint_is_execution_failed() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let result = client_for(format!("http://{addr}/v1")).execute("t", "i");
        assert!(matches!(result, Err(Error::ExecutionFailed(_))));
    }
}
