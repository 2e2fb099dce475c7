use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::timeout;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const CHAT_COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";
const MAX_TOKENS: u32 = 512;
const TEMPERATURE: f32 = 0.7;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

#[derive(Debug, Error)]
pub enum GroqError {
    #[error("Groq API request timed out")]
    Timeout,
    #[error("failed to send Groq API request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Groq API request failed ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Groq API returned an unparseable response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Groq API response did not contain an answer")]
    EmptyCompletion,
}

/// HTTP client for the Groq chat completions endpoint.
///
/// Base URL, model, and timeout are constructor parameters so tests can
/// point the client at a local stub server.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
    timeout_ms: u64,
}

impl GroqClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: &str,
        timeout_ms: u64,
    ) -> Self {
        let url = format!("{}{CHAT_COMPLETIONS_PATH}", base_url.trim_end_matches('/'));
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            url,
            timeout_ms,
        }
    }

    /// Send the system prompt and the user's question, return the assistant's
    /// answer text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, GroqError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let fut = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send();

        let response = timeout(Duration::from_millis(self.timeout_ms), fut)
            .await
            .map_err(|_| GroqError::Timeout)??;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(GroqError::Status { status, body });
        }

        let body = response.text().await?;
        parse_completion(&body)
    }
}

fn parse_completion(body: &str) -> Result<String, GroqError> {
    let completion: ChatResponse = serde_json::from_str(body)?;
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or(GroqError::EmptyCompletion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_choice_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}},{"message":{"role":"assistant","content":"ignored"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "hello");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let body = r#"{"choices":[]}"#;
        assert!(matches!(
            parse_completion(body),
            Err(GroqError::EmptyCompletion)
        ));
    }

    #[test]
    fn blank_content_is_an_error() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  \n"}}]}"#;
        assert!(matches!(
            parse_completion(body),
            Err(GroqError::EmptyCompletion)
        ));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(
            parse_completion("not json"),
            Err(GroqError::Parse(_))
        ));
    }
}
