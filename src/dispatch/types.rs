//! Core types flowing through the dispatch pipeline.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inbound notification request, immutable once decoded.
///
/// Absent string fields deserialize to empty strings so the validator can
/// apply a single empty-or-absent predicate to both cases.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchRequest {
    /// Category wire identifier (e.g. "friend_request")
    pub category: String,
    /// Opaque device token of the recipient
    #[serde(default)]
    pub recipient_token: String,
    /// Display name of the sender, interpolated into templates
    #[serde(default)]
    pub sender_name: String,
    /// Category-specific extra fields
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

/// Outbound message produced by the renderer and consumed by the
/// delivery client. Only validated requests ever reach this form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub recipient_token: String,
    pub title: String,
    pub body: String,
    pub data: HashMap<String, String>,
}

/// Closed set of dispatch failure kinds so callers can branch on the
/// code instead of matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum DispatchErrorCode {
    /// Caller input incomplete
    MissingFields,
    /// No template registered for the requested category
    UnknownCategory,
    /// Gateway rejected the message or the send failed
    DeliveryFailure,
}

/// Outcome of a single dispatch attempt, returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchResult {
    /// Whether the notification was delivered to the gateway
    pub success: bool,
    /// Failure kind, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<DispatchErrorCode>,
    /// Failure detail, passed through verbatim for delivery failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Identifier assigned to this dispatch attempt
    pub notification_id: Uuid,
    /// Timestamp of the attempt
    pub timestamp: DateTime<Utc>,
}

impl DispatchResult {
    pub fn delivered(notification_id: Uuid) -> Self {
        Self {
            success: true,
            error_code: None,
            error_message: None,
            notification_id,
            timestamp: Utc::now(),
        }
    }

    pub fn failed(
        notification_id: Uuid,
        code: DispatchErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            error_code: Some(code),
            error_message: Some(message.into()),
            notification_id,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_constructors() {
        let id = Uuid::new_v4();
        let ok = DispatchResult::delivered(id);
        assert!(ok.success);
        assert!(ok.error_code.is_none());
        assert!(ok.error_message.is_none());

        let failed = DispatchResult::failed(id, DispatchErrorCode::DeliveryFailure, "invalid-token");
        assert!(!failed.success);
        assert_eq!(failed.error_code, Some(DispatchErrorCode::DeliveryFailure));
        assert_eq!(failed.error_message.as_deref(), Some("invalid-token"));
    }

    #[test]
    fn test_error_code_wire_format() {
        let json = serde_json::to_string(&DispatchErrorCode::MissingFields).unwrap();
        assert_eq!(json, "\"MissingFields\"");
        let json = serde_json::to_string(&DispatchErrorCode::UnknownCategory).unwrap();
        assert_eq!(json, "\"UnknownCategory\"");
    }

    #[test]
    fn test_request_absent_fields_deserialize_empty() {
        let request: DispatchRequest =
            serde_json::from_str(r#"{"category": "friend_request", "sender_name": "Alice"}"#)
                .unwrap();
        assert_eq!(request.recipient_token, "");
        assert_eq!(request.sender_name, "Alice");
        assert!(request.extra.is_empty());
    }
}
