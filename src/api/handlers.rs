//! HTTP notification handlers.
//!
//! Dispatch failures are part of the response envelope, not HTTP
//! errors: every well-formed request gets a 200 with `success` and a
//! structured error code. Only malformed JSON is rejected at the
//! transport layer.

use axum::{extract::State, Json};

use crate::dispatch::{DispatchRequest, DispatchResult, FRIEND_REQUEST, SHIFUSHOT_REQUEST};
use crate::server::AppState;

use super::models::CategoryDispatchRequest;

/// Generic entry point with the category in the payload
#[tracing::instrument(
    name = "http.dispatch",
    skip(state, request),
    fields(category = %request.category)
)]
pub async fn dispatch_notification(
    State(state): State<AppState>,
    Json(request): Json<DispatchRequest>,
) -> Json<DispatchResult> {
    Json(state.dispatcher.dispatch(request).await)
}

/// Send a friend-request notification
#[tracing::instrument(name = "http.friend_request", skip(state, request))]
pub async fn friend_request_notification(
    State(state): State<AppState>,
    Json(request): Json<CategoryDispatchRequest>,
) -> Json<DispatchResult> {
    Json(
        state
            .dispatcher
            .dispatch(request.into_dispatch(FRIEND_REQUEST))
            .await,
    )
}

/// Send a Shifushot game-invite notification
#[tracing::instrument(name = "http.shifushot", skip(state, request))]
pub async fn shifushot_notification(
    State(state): State<AppState>,
    Json(request): Json<CategoryDispatchRequest>,
) -> Json<DispatchResult> {
    Json(
        state
            .dispatcher
            .dispatch(request.into_dispatch(SHIFUSHOT_REQUEST))
            .await,
    )
}
