//! End-to-end dispatch pipeline tests.
//!
//! These exercise the full validate -> lookup -> render -> deliver path
//! against the in-memory delivery client, without server startup or a
//! real gateway.

use std::collections::HashMap;
use std::sync::Arc;

use pushgate::delivery::{DeliveryClient, MemoryDeliveryClient};
use pushgate::dispatch::{
    default_registry, DispatchErrorCode, DispatchRequest, Dispatcher, Template, TemplateRegistry,
};

struct TestEnvironment {
    dispatcher: Dispatcher,
    delivery: Arc<MemoryDeliveryClient>,
}

fn create_test_environment() -> TestEnvironment {
    let registry = Arc::new(default_registry().unwrap());
    let delivery = Arc::new(MemoryDeliveryClient::new());
    let dispatcher = Dispatcher::new(registry, delivery.clone());

    TestEnvironment {
        dispatcher,
        delivery,
    }
}

fn create_failing_environment(reason: &str) -> Dispatcher {
    let registry = Arc::new(default_registry().unwrap());
    let delivery: Arc<dyn DeliveryClient> = Arc::new(MemoryDeliveryClient::failing(reason));
    Dispatcher::new(registry, delivery)
}

fn request(category: &str, token: &str, sender: &str) -> DispatchRequest {
    DispatchRequest {
        category: category.to_string(),
        recipient_token: token.to_string(),
        sender_name: sender.to_string(),
        extra: HashMap::new(),
    }
}

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn friend_request_is_rendered_and_delivered() {
    let env = create_test_environment();

    let result = env
        .dispatcher
        .dispatch(request("friend_request", "tok123", "Alice"))
        .await;

    assert!(result.success);
    assert!(result.error_code.is_none());
    assert!(result.error_message.is_none());

    let sent = env.delivery.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient_token, "tok123");
    assert_eq!(sent[0].title, "Nouvelle demande d'ami");
    assert_eq!(sent[0].body, "Alice t'a envoyé une demande d'ami.");
    assert_eq!(sent[0].data.get("type").unwrap(), "friend_request");
}

#[tokio::test]
async fn shifushot_request_uses_its_own_template() {
    let env = create_test_environment();

    let result = env
        .dispatcher
        .dispatch(request("shifushot_request", "tok1", "Bob"))
        .await;

    assert!(result.success);

    let sent = env.delivery.sent().await;
    assert_eq!(sent[0].title, "Demande de Shifushot 💥");
    assert_eq!(sent[0].body, "Bob veut jouer à Shifushot avec toi !");
    assert_eq!(sent[0].data.get("type").unwrap(), "shifushot_request");
}

#[tokio::test]
async fn rendering_is_deterministic_across_dispatches() {
    let env = create_test_environment();

    env.dispatcher
        .dispatch(request("friend_request", "tok123", "Alice"))
        .await;
    env.dispatcher
        .dispatch(request("friend_request", "tok123", "Alice"))
        .await;

    let sent = env.delivery.sent().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);
}

// =============================================================================
// Validation failures
// =============================================================================

#[tokio::test]
async fn missing_token_is_rejected_before_delivery() {
    let env = create_test_environment();

    let result = env
        .dispatcher
        .dispatch(request("friend_request", "", "Alice"))
        .await;

    assert!(!result.success);
    assert_eq!(result.error_code, Some(DispatchErrorCode::MissingFields));
    assert!(result
        .error_message
        .as_deref()
        .unwrap()
        .contains("recipient_token"));
    assert_eq!(env.delivery.sent_count().await, 0);
}

#[tokio::test]
async fn missing_sender_is_rejected_before_delivery() {
    let env = create_test_environment();

    let result = env
        .dispatcher
        .dispatch(request("friend_request", "tok123", ""))
        .await;

    assert_eq!(result.error_code, Some(DispatchErrorCode::MissingFields));
    assert_eq!(env.delivery.sent_count().await, 0);
}

#[tokio::test]
async fn unknown_category_is_rejected_before_delivery() {
    let env = create_test_environment();

    let result = env
        .dispatcher
        .dispatch(request("unknown_kind", "tok1", "Bob"))
        .await;

    assert!(!result.success);
    assert_eq!(result.error_code, Some(DispatchErrorCode::UnknownCategory));
    assert_eq!(env.delivery.sent_count().await, 0);
}

#[tokio::test]
async fn missing_required_extra_is_rejected() {
    let mut registry = TemplateRegistry::new();
    registry
        .register(
            Template::new("game_invite", "Invite", "{{sender_name}} invites you to {{game_id}}")
                .with_data("game_id", "{{game_id}}")
                .with_required_extra("game_id"),
        )
        .unwrap();

    let delivery = Arc::new(MemoryDeliveryClient::new());
    let dispatcher = Dispatcher::new(Arc::new(registry), delivery.clone());

    let result = dispatcher
        .dispatch(request("game_invite", "tok1", "Bob"))
        .await;
    assert_eq!(result.error_code, Some(DispatchErrorCode::MissingFields));
    assert!(result.error_message.as_deref().unwrap().contains("game_id"));
    assert_eq!(delivery.sent_count().await, 0);

    let mut req = request("game_invite", "tok1", "Bob");
    req.extra.insert("game_id".to_string(), "g42".to_string());
    let result = dispatcher.dispatch(req).await;
    assert!(result.success);

    let sent = delivery.sent().await;
    assert_eq!(sent[0].body, "Bob invites you to g42");
    assert_eq!(sent[0].data.get("game_id").unwrap(), "g42");
}

// =============================================================================
// Delivery failures
// =============================================================================

#[tokio::test]
async fn gateway_failure_reason_reaches_the_caller_verbatim() {
    let dispatcher = create_failing_environment("invalid-token");

    let result = dispatcher
        .dispatch(request("friend_request", "tok1", "Alice"))
        .await;

    assert!(!result.success);
    assert_eq!(result.error_code, Some(DispatchErrorCode::DeliveryFailure));
    assert_eq!(result.error_message.as_deref(), Some("invalid-token"));
}

#[tokio::test]
async fn stats_count_each_outcome() {
    let env = create_test_environment();

    env.dispatcher
        .dispatch(request("friend_request", "tok1", "Alice"))
        .await;
    env.dispatcher
        .dispatch(request("friend_request", "", ""))
        .await;
    env.dispatcher
        .dispatch(request("unknown_kind", "tok1", "Bob"))
        .await;

    let stats = env.dispatcher.stats();
    assert_eq!(stats.total_dispatched, 3);
    assert_eq!(stats.total_delivered, 1);
    assert_eq!(stats.total_rejected, 2);
    assert_eq!(stats.total_delivery_failures, 0);
}

// =============================================================================
// Result envelope wire format
// =============================================================================

#[tokio::test]
async fn failure_envelope_serializes_spec_error_codes() {
    let env = create_test_environment();

    let result = env
        .dispatcher
        .dispatch(request("friend_request", "", "Alice"))
        .await;

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error_code"], "MissingFields");

    let result = env
        .dispatcher
        .dispatch(request("unknown_kind", "tok1", "Bob"))
        .await;
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["error_code"], "UnknownCategory");
}

#[tokio::test]
async fn success_envelope_omits_error_fields() {
    let env = create_test_environment();

    let result = env
        .dispatcher
        .dispatch(request("friend_request", "tok123", "Alice"))
        .await;

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert!(json.get("error_code").is_none());
    assert!(json.get("error_message").is_none());
    assert!(json.get("notification_id").is_some());
}
