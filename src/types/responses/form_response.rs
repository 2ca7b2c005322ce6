use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// What the modal shows after a command: a notice, optional data, and the
/// inline errors when something was rejected.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

impl<T> FormResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        FormResponse {
            message: message.into(),
            error: None,
            data: Some(data),
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        FormResponse {
            message: message.into(),
            error: None,
            data: None,
        }
    }

    pub fn error(message: impl Into<String>, error: ErrorDetails) -> Self {
        FormResponse {
            message: message.into(),
            error: Some(error),
            data: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
