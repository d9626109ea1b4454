//! Category-to-template registry.
//!
//! Built once at startup and shared read-only afterward; concurrent
//! dispatches only ever look templates up.

use std::collections::HashMap;

use thiserror::Error;

use super::template::Template;

/// Wire identifier for friend-request notifications.
pub const FRIEND_REQUEST: &str = "friend_request";

/// Wire identifier for Shifushot game-invite notifications.
pub const SHIFUSHOT_REQUEST: &str = "shifushot_request";

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Immutable-after-startup map of category wire ids to templates.
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Register a template for its category. Each category has exactly
    /// one template; a second registration is a configuration error.
    pub fn register(&mut self, template: Template) -> RegistryResult<()> {
        if self.templates.contains_key(&template.category) {
            return Err(RegistryError::DuplicateCategory(template.category));
        }

        self.templates.insert(template.category.clone(), template);
        Ok(())
    }

    /// Look up the template for a category.
    pub fn lookup(&self, category: &str) -> RegistryResult<&Template> {
        self.templates
            .get(category)
            .ok_or_else(|| RegistryError::UnknownCategory(category.to_string()))
    }

    /// Check if a category is registered
    pub fn contains(&self, category: &str) -> bool {
        self.templates.contains_key(category)
    }

    /// Get the number of registered categories
    pub fn count(&self) -> usize {
        self.templates.len()
    }
}

/// Build the registry with all supported categories.
///
/// A `DuplicateCategory` here means the static category set is broken;
/// the process must not start with a broken registry, so the error is
/// propagated out of `main`.
pub fn default_registry() -> RegistryResult<TemplateRegistry> {
    let mut registry = TemplateRegistry::new();

    registry.register(Template::new(
        FRIEND_REQUEST,
        "Nouvelle demande d'ami",
        "{{sender_name}} t'a envoyé une demande d'ami.",
    ))?;

    registry.register(Template::new(
        SHIFUSHOT_REQUEST,
        "Demande de Shifushot 💥",
        "{{sender_name}} veut jouer à Shifushot avec toi !",
    ))?;

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(Template::new("test_category", "Title", "Body"))
            .unwrap();

        let template = registry.lookup("test_category").unwrap();
        assert_eq!(template.title, "Title");
        assert!(registry.contains("test_category"));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_register_duplicate() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(Template::new("duplicate", "Title", "Body"))
            .unwrap();

        assert!(matches!(
            registry.register(Template::new("duplicate", "Other", "Other")),
            Err(RegistryError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = TemplateRegistry::new();
        assert!(matches!(
            registry.lookup("nope"),
            Err(RegistryError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_default_registry_categories() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.count(), 2);

        let friend = registry.lookup(FRIEND_REQUEST).unwrap();
        assert_eq!(friend.title, "Nouvelle demande d'ami");

        let shifushot = registry.lookup(SHIFUSHOT_REQUEST).unwrap();
        assert_eq!(shifushot.body, "{{sender_name}} veut jouer à Shifushot avec toi !");
    }
}
