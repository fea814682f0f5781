//! Text-completion API client backing the chat page.

mod error;
mod types;

pub use error::CompletionError;
pub use types::{CompletionChoice, CompletionRequest, CompletionResponse};

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::CompletionConfig;

use error::ApiErrorResponse;

/// Maximum tokens requested per completion.
const MAX_TOKENS: u32 = 3097;

/// Completions generated per request.
const NUM_CHOICES: u32 = 1;

/// Sampling temperature.
const TEMPERATURE: f64 = 0.5;

/// Completion API client.
///
/// Sends prompts to a text-completion endpoint and returns the first
/// generated choice.
#[derive(Clone)]
pub struct CompletionClient {
    inner: Arc<CompletionClientInner>,
}

struct CompletionClientInner {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl CompletionClient {
    /// Create a new completion client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &CompletionConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .expect("Invalid API key for header");
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(CompletionClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_owned(),
                model: config.model.clone(),
            }),
        }
    }

    /// Send a prompt and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails, returns an error response,
    /// or produces no choices.
    #[instrument(skip(self, prompt), fields(model = %self.inner.model))]
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            model: self.inner.model.clone(),
            prompt: prompt.to_owned(),
            max_tokens: MAX_TOKENS,
            n: NUM_CHOICES,
            temperature: TEMPERATURE,
        };

        let url = format!("{}/completions", self.inner.base_url);
        let response = self.inner.client.post(url).json(&request).send().await?;

        let response = self.handle_response(response).await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or(CompletionError::Empty)
    }

    /// Handle a response, mapping error statuses.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<CompletionResponse, CompletionError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| CompletionError::Parse(format!("Failed to parse response: {e}")))
        } else {
            Err(self.handle_error_status(status, response).await)
        }
    }

    /// Handle an error status code.
    async fn handle_error_status(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> CompletionError {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return CompletionError::RateLimited(retry_after);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return CompletionError::Unauthorized("Invalid API key".to_string());
        }

        match response.text().await {
            Ok(body) => {
                if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                    CompletionError::Api {
                        error_type: api_error.error.error_type,
                        message: api_error.error.message,
                    }
                } else {
                    CompletionError::Api {
                        error_type: "unknown".to_string(),
                        message: body,
                    }
                }
            }
            Err(e) => CompletionError::Http(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<CompletionClient>();
    }

    #[test]
    fn completion_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompletionClient>();
    }
}
