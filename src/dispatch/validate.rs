//! Required-field validation with empty-or-absent semantics.
//!
//! An empty string is treated identically to an absent field. Rules are
//! data-driven: the base fields apply to every category, and each
//! template carries its own required-extra list.

use thiserror::Error;

use super::template::Template;
use super::types::DispatchRequest;

/// Validation failure naming every field that is absent or empty.
#[derive(Debug, Error)]
#[error("Missing required fields: {}", fields.join(", "))]
pub struct MissingFields {
    pub fields: Vec<String>,
}

/// Check the base fields every category requires.
pub fn validate_base(request: &DispatchRequest) -> Result<(), MissingFields> {
    let mut missing = Vec::new();

    if request.recipient_token.is_empty() {
        missing.push("recipient_token".to_string());
    }
    if request.sender_name.is_empty() {
        missing.push("sender_name".to_string());
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingFields { fields: missing })
    }
}

/// Check the extra fields the category's template requires.
pub fn validate_extras(
    request: &DispatchRequest,
    template: &Template,
) -> Result<(), MissingFields> {
    let missing: Vec<String> = template
        .required_extra
        .iter()
        .filter(|field| {
            request
                .extra
                .get(field.as_str())
                .map_or(true, |value| value.is_empty())
        })
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingFields { fields: missing })
    }
}
