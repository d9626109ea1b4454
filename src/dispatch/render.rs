//! Pure payload rendering from a validated request and its template.

use std::collections::HashMap;

use super::template::{substitute, Template};
use super::types::{DispatchRequest, RenderedMessage};

/// Render the outbound message.
///
/// Pure and deterministic; total over requests the validator accepted
/// for this template's category. The data map always carries `type` =
/// the category wire id so the client app can branch on notification
/// kind.
pub fn render(request: &DispatchRequest, template: &Template) -> RenderedMessage {
    let mut variables: HashMap<String, String> = request
        .extra
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    // Base fields win over colliding extra keys
    variables.insert("sender_name".to_string(), request.sender_name.clone());

    let mut data: HashMap<String, String> = template
        .data
        .iter()
        .map(|(key, value)| (key.clone(), substitute(value, &variables)))
        .collect();
    data.insert("type".to_string(), template.category.clone());

    RenderedMessage {
        recipient_token: request.recipient_token.clone(),
        title: substitute(&template.title, &variables),
        body: substitute(&template.body, &variables),
        data,
    }
}
