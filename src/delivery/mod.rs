//! Push-gateway delivery abstraction.
//!
//! The dispatcher only depends on the `DeliveryClient` trait; the
//! concrete FCM binding is the sole component touching the network.

mod fcm;
mod memory;

pub use fcm::FcmClient;
pub use memory::MemoryDeliveryClient;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::FcmConfig;
use crate::dispatch::RenderedMessage;

/// Gateway rejection or network failure. The reason is carried through
/// verbatim to the caller and never interpreted here.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DeliveryError(pub String);

/// Abstracts the push-gateway send operation.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    async fn send(&self, message: &RenderedMessage) -> Result<(), DeliveryError>;
}

/// Build the delivery client from configuration.
///
/// Without a server key the in-memory client is used so the service
/// stays runnable in development.
pub fn create_delivery_client(config: &FcmConfig) -> Arc<dyn DeliveryClient> {
    match config.server_key.as_deref() {
        Some(key) if !key.is_empty() => Arc::new(FcmClient::new(
            config.endpoint.clone(),
            key.to_string(),
            config.timeout_seconds,
        )),
        _ => {
            tracing::warn!("fcm.server_key not set, using in-memory delivery client");
            Arc::new(MemoryDeliveryClient::new())
        }
    }
}
