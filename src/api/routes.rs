use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::handlers::{
    dispatch_notification, friend_request_notification, shifushot_notification,
};
use super::health::{health, stats};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Stats
        .route("/health", get(health))
        .route("/stats", get(stats))
        // Notification endpoints
        .nest(
            "/api/v1",
            Router::new()
                // Generic entry point
                .route("/notifications/dispatch", post(dispatch_notification))
                // Per-category conveniences
                .route(
                    "/notifications/friend-request",
                    post(friend_request_notification),
                )
                .route("/notifications/shifushot", post(shifushot_notification)),
        )
}
