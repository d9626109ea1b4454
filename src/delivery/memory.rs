//! In-memory delivery client for development and tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::dispatch::RenderedMessage;

use super::{DeliveryClient, DeliveryError};

/// Records every sent message instead of contacting a gateway.
/// Can be configured to fail every send with a fixed reason.
#[derive(Debug, Default)]
pub struct MemoryDeliveryClient {
    sent: Mutex<Vec<RenderedMessage>>,
    fail_with: Option<String>,
}

impl MemoryDeliveryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose every send fails with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    /// Messages accepted so far.
    pub async fn sent(&self) -> Vec<RenderedMessage> {
        self.sent.lock().await.clone()
    }

    /// Number of messages accepted so far.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl DeliveryClient for MemoryDeliveryClient {
    async fn send(&self, message: &RenderedMessage) -> Result<(), DeliveryError> {
        if let Some(reason) = &self.fail_with {
            return Err(DeliveryError(reason.clone()));
        }

        tracing::debug!(title = %message.title, "Recorded notification in memory");
        self.sent.lock().await.push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn message() -> RenderedMessage {
        RenderedMessage {
            recipient_token: "tok123".to_string(),
            title: "Title".to_string(),
            body: "Body".to_string(),
            data: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn test_records_sent_messages() {
        let client = MemoryDeliveryClient::new();
        client.send(&message()).await.unwrap();
        client.send(&message()).await.unwrap();

        assert_eq!(client.sent_count().await, 2);
        assert_eq!(client.sent().await[0].title, "Title");
    }

    #[tokio::test]
    async fn test_failing_client_passes_reason_through() {
        let client = MemoryDeliveryClient::failing("invalid-token");
        let err = client.send(&message()).await.unwrap_err();

        assert_eq!(err.to_string(), "invalid-token");
        assert_eq!(client.sent_count().await, 0);
    }
}
