//! Data-driven notification templates.
//!
//! A template describes how one category renders: title and body strings
//! with `{{variable}}` placeholders, a data-map template, and the extra
//! fields the category requires. Adding a category means registering one
//! more `Template`; the dispatch path itself never changes.

use std::collections::HashMap;

/// Rendering entry for a single notification category.
#[derive(Debug, Clone)]
pub struct Template {
    /// Category wire identifier, also emitted as `data["type"]`
    pub category: String,
    /// Notification title with `{{variable}}` placeholders
    pub title: String,
    /// Notification body with `{{variable}}` placeholders
    pub body: String,
    /// Data-map template, placeholders allowed in values
    pub data: HashMap<String, String>,
    /// Extra fields the category requires beyond the base fields
    pub required_extra: Vec<String>,
}

impl Template {
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            body: body.into(),
            data: HashMap::new(),
            required_extra: Vec::new(),
        }
    }

    /// Add a data-map entry; the value may contain placeholders.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Mark an extra field as required for this category.
    pub fn with_required_extra(mut self, field: impl Into<String>) -> Self {
        self.required_extra.push(field.into());
        self
    }
}

/// Substitute `{{variable}}` placeholders with values from `variables`.
/// Placeholders without a matching variable are left intact; validation
/// guarantees every referenced field is present for registered templates.
pub(crate) fn substitute(template: &str, variables: &HashMap<String, String>) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let pattern = format!("{{{{{}}}}}", key);
        result = result.replace(&pattern, value);
    }

    result
}
