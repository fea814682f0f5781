//! Wire types for the text-completion API.

use serde::{Deserialize, Serialize};

/// Request body for the completions endpoint.
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Prompt text to complete.
    pub prompt: String,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
    /// Number of completions to generate.
    pub n: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Response body from the completions endpoint.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    /// Generated completions.
    pub choices: Vec<CompletionChoice>,
}

/// One generated completion.
#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    /// Generated text.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_all_fields() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo-instruct".to_string(),
            prompt: "Say hello".to_string(),
            max_tokens: 3097,
            n: 1,
            temperature: 0.5,
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["model"], "gpt-3.5-turbo-instruct");
        assert_eq!(json["prompt"], "Say hello");
        assert_eq!(json["max_tokens"], 3097);
        assert_eq!(json["n"], 1);
        assert!((json["temperature"].as_f64().expect("f64") - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn response_deserializes_choices() {
        let json = r#"{
            "id": "cmpl-abc",
            "object": "text_completion",
            "choices": [{"text": "\n\nHello there!", "index": 0, "finish_reason": "stop"}]
        }"#;

        let response: CompletionResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].text, "\n\nHello there!");
    }
}
