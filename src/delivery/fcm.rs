//! FCM HTTP gateway binding.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::dispatch::RenderedMessage;

use super::{DeliveryClient, DeliveryError};

/// Client for the FCM send endpoint, authenticated with a server key.
pub struct FcmClient {
    endpoint: String,
    server_key: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl FcmClient {
    pub fn new(endpoint: String, server_key: String, timeout_seconds: u64) -> Self {
        Self {
            endpoint,
            server_key,
            timeout: Duration::from_secs(timeout_seconds),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DeliveryClient for FcmClient {
    // Device tokens are never logged
    #[tracing::instrument(name = "fcm.send", skip(self, message), fields(title = %message.title))]
    async fn send(&self, message: &RenderedMessage) -> Result<(), DeliveryError> {
        let payload = json!({
            "to": message.recipient_token,
            "notification": {
                "title": message.title,
                "body": message.body,
            },
            "data": message.data,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("key={}", self.server_key))
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DeliveryError(e.to_string()))?;

        if !response.status().is_success() {
            let reason = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown gateway error".to_string());
            tracing::error!(reason = %reason, "FCM request rejected");
            return Err(DeliveryError(reason));
        }

        tracing::debug!("FCM notification sent");
        Ok(())
    }
}
