// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ChatRequest {
    /// Parses a raw request body and returns the trimmed message.
    ///
    /// Anything other than a JSON object with a non-blank string `message`
    /// is rejected as [`AppError::EmptyMessage`].
    pub fn parse_message(body: &[u8]) -> Result<String, AppError> {
        let request: ChatRequest =
            serde_json::from_slice(body).map_err(|_| AppError::EmptyMessage)?;

        match request.message {
            Some(Value::String(message)) if !message.trim().is_empty() => {
                Ok(message.trim().to_string())
            }
            _ => Err(AppError::EmptyMessage),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_trimmed() {
        let message = ChatRequest::parse_message(br#"{"message": "  hola  "}"#).unwrap();
        assert_eq!(message, "hola");
    }

    #[test]
    fn blank_or_missing_message_fails_closed() {
        for body in [
            r#"{"message": ""}"#,
            r#"{"message": "   "}"#,
            r#"{"message": null}"#,
            r#"{"message": 42}"#,
            r#"{"message": ["hi"]}"#,
            r#"{}"#,
            r#"[]"#,
            r#""hello""#,
            "not json",
            "",
        ] {
            assert!(
                matches!(
                    ChatRequest::parse_message(body.as_bytes()),
                    Err(AppError::EmptyMessage)
                ),
                "body {body:?} should be rejected"
            );
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let message =
            ChatRequest::parse_message(br#"{"message": "hi", "session_id": "abc"}"#).unwrap();
        assert_eq!(message, "hi");
    }
}
