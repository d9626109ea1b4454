//! Dispatch pipeline: validate, look up template, render, deliver,
//! normalize the outcome.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::delivery::DeliveryClient;

use super::registry::TemplateRegistry;
use super::render::render;
use super::types::{DispatchErrorCode, DispatchRequest, DispatchResult};
use super::validate::{validate_base, validate_extras};

/// Counters for dispatch outcomes
#[derive(Debug, Default)]
pub struct DispatcherStats {
    /// Total dispatch attempts
    pub total_dispatched: AtomicU64,
    /// Attempts the gateway accepted
    pub total_delivered: AtomicU64,
    /// Attempts rejected before delivery (missing fields, unknown category)
    pub total_rejected: AtomicU64,
    /// Attempts the gateway refused
    pub total_delivery_failures: AtomicU64,
}

impl DispatcherStats {
    pub fn snapshot(&self) -> DispatcherStatsSnapshot {
        DispatcherStatsSnapshot {
            total_dispatched: self.total_dispatched.load(Ordering::Relaxed),
            total_delivered: self.total_delivered.load(Ordering::Relaxed),
            total_rejected: self.total_rejected.load(Ordering::Relaxed),
            total_delivery_failures: self.total_delivery_failures.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of dispatcher statistics
#[derive(Debug, Clone, Serialize)]
pub struct DispatcherStatsSnapshot {
    pub total_dispatched: u64,
    pub total_delivered: u64,
    pub total_rejected: u64,
    pub total_delivery_failures: u64,
}

/// Orchestrates one dispatch per inbound request.
///
/// Holds no per-request mutable state; the registry is read-only after
/// startup, so concurrent dispatches need no locking. A failed request
/// never affects subsequent ones.
pub struct Dispatcher {
    registry: Arc<TemplateRegistry>,
    delivery: Arc<dyn DeliveryClient>,
    stats: DispatcherStats,
}

impl Dispatcher {
    pub fn new(registry: Arc<TemplateRegistry>, delivery: Arc<dyn DeliveryClient>) -> Self {
        Self {
            registry,
            delivery,
            stats: DispatcherStats::default(),
        }
    }

    /// Get dispatcher statistics
    pub fn stats(&self) -> DispatcherStatsSnapshot {
        self.stats.snapshot()
    }

    /// Run one dispatch attempt to completion. Every failure branch is
    /// reported as a structured result; nothing is fatal to the process.
    #[tracing::instrument(
        name = "dispatcher.dispatch",
        skip(self, request),
        fields(category = %request.category)
    )]
    pub async fn dispatch(&self, request: DispatchRequest) -> DispatchResult {
        let notification_id = Uuid::new_v4();
        self.stats.total_dispatched.fetch_add(1, Ordering::Relaxed);

        if let Err(e) = validate_base(&request) {
            tracing::warn!(
                notification_id = %notification_id,
                error = %e,
                "Request rejected"
            );
            self.stats.total_rejected.fetch_add(1, Ordering::Relaxed);
            return DispatchResult::failed(
                notification_id,
                DispatchErrorCode::MissingFields,
                e.to_string(),
            );
        }

        let template = match self.registry.lookup(&request.category) {
            Ok(template) => template,
            Err(e) => {
                tracing::warn!(
                    notification_id = %notification_id,
                    error = %e,
                    "Request rejected"
                );
                self.stats.total_rejected.fetch_add(1, Ordering::Relaxed);
                return DispatchResult::failed(
                    notification_id,
                    DispatchErrorCode::UnknownCategory,
                    e.to_string(),
                );
            }
        };

        if let Err(e) = validate_extras(&request, template) {
            tracing::warn!(
                notification_id = %notification_id,
                error = %e,
                "Request rejected"
            );
            self.stats.total_rejected.fetch_add(1, Ordering::Relaxed);
            return DispatchResult::failed(
                notification_id,
                DispatchErrorCode::MissingFields,
                e.to_string(),
            );
        }

        // Render cannot fail for a validated request
        let message = render(&request, template);

        match self.delivery.send(&message).await {
            Ok(()) => {
                self.stats.total_delivered.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(
                    notification_id = %notification_id,
                    "Notification delivered"
                );
                DispatchResult::delivered(notification_id)
            }
            Err(e) => {
                self.stats
                    .total_delivery_failures
                    .fetch_add(1, Ordering::Relaxed);
                tracing::error!(
                    notification_id = %notification_id,
                    reason = %e,
                    "Gateway delivery failed"
                );
                // Reason is passed through verbatim for observability
                DispatchResult::failed(
                    notification_id,
                    DispatchErrorCode::DeliveryFailure,
                    e.to_string(),
                )
            }
        }
    }
}
