//! Error bodies returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An error body returned by the backend.
///
/// The API reports failures in three shapes: `{"detail": "..."}`,
/// `{"error": "..."}`, or per-field lists such as
/// `{"email": ["user with this email already exists."]}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Framework-level message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Message set by application views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Validation errors keyed by field name.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ErrorResponse {
    /// Creates an error response carrying just a detail message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            detail: Some(message.into()),
            ..Self::default()
        }
    }

    /// The most specific human-readable message in the body, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if let Some(detail) = self.detail.as_ref().or(self.error.as_ref()) {
            return Some(detail.clone());
        }
        self.fields.iter().find_map(|(field, value)| {
            let text = match value {
                Value::String(text) => Some(text.clone()),
                Value::Array(items) => items.iter().find_map(|item| item.as_str().map(str::to_string)),
                _ => None,
            }?;
            Some(if field == "non_field_errors" {
                text
            } else {
                format!("{field}: {text}")
            })
        })
    }

    /// Checks if the body names specific fields.
    #[must_use]
    pub fn has_field_errors(&self) -> bool {
        !self.fields.is_empty()
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => f.write_str(&message),
            None => f.write_str("unknown error"),
        }
    }
}

impl std::error::Error for ErrorResponse {}
