//! Chat route handlers.
//!
//! A thin proxy in front of the text-completion API: the page posts a
//! message, the handler forwards it as a prompt and returns the generated
//! text as JSON.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Chat page template.
#[derive(Template, WebTemplate)]
#[template(path = "chat.html")]
pub struct ChatTemplate {}

/// Chat message payload.
#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub message: String,
}

/// Chat reply payload.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// Display the chat page.
pub async fn page() -> impl IntoResponse {
    ChatTemplate {}
}

/// Forward a chat message to the completion API and return the reply
/// verbatim.
pub async fn send(
    State(state): State<AppState>,
    Json(payload): Json<ChatMessage>,
) -> Result<Json<ChatReply>> {
    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("message must not be empty".to_owned()));
    }

    let response = state.completion().complete(&payload.message).await?;

    Ok(Json(ChatReply { response }))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn chat_page_renders_without_a_logged_in_user() {
        let app = Router::new().route("/chat", get(page));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/chat")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("handler runs");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn chat_reply_keeps_completion_text_untouched() {
        let reply = ChatReply {
            response: "  two leading spaces and a trailing newline\n".to_owned(),
        };
        let json = serde_json::to_string(&reply).expect("serializes");
        assert_eq!(
            json,
            r#"{"response":"  two leading spaces and a trailing newline\n"}"#
        );
    }
}
