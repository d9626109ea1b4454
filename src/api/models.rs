//! Request models for the notification HTTP API.

use std::collections::HashMap;

use serde::Deserialize;

use crate::dispatch::DispatchRequest;

/// Body for the per-category endpoints, which fix the category in the
/// route instead of the payload.
#[derive(Debug, Deserialize)]
pub struct CategoryDispatchRequest {
    /// Opaque device token of the recipient
    #[serde(default)]
    pub recipient_token: String,
    /// Display name of the sender
    #[serde(default)]
    pub sender_name: String,
    /// Category-specific extra fields
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

impl CategoryDispatchRequest {
    pub fn into_dispatch(self, category: &str) -> DispatchRequest {
        DispatchRequest {
            category: category.to_string(),
            recipient_token: self.recipient_token,
            sender_name: self.sender_name,
            extra: self.extra,
        }
    }
}
