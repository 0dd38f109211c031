use crate::config::SchemaConfig;
use crate::domain::{ModelRegistry, ModelType, Owner, Schema};
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory model registry keyed by model type name.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    models: HashMap<String, Arc<ModelType>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SchemaConfig) -> Self {
        let mut registry = Self::new();
        for (name, schema) in &config.models {
            registry.register(ModelType::new(name.clone(), schema.clone()));
        }
        tracing::debug!("Registered {} model types from schema", registry.len());
        registry
    }

    /// Registers a model type, replacing any previous type of the same name.
    pub fn register(&mut self, model_type: ModelType) -> Option<Arc<ModelType>> {
        self.models
            .insert(model_type.name().to_string(), Arc::new(model_type))
    }

    pub fn with_model(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.register(ModelType::new(name, schema));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ModelType>> {
        self.models.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn model_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.models.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn into_owner(self) -> Owner {
        Arc::new(self)
    }
}

impl ModelRegistry for SchemaRegistry {
    fn resolve(&self, type_name: &str) -> Option<Arc<ModelType>> {
        self.models.get(type_name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RelationshipDescriptor;

    #[test]
    fn test_register_and_resolve() {
        let registry = SchemaRegistry::new()
            .with_model("child", Schema::new())
            .with_model(
                "model",
                Schema::new().relationship("child", RelationshipDescriptor::has_one("child")),
            );

        assert_eq!(registry.model_names(), vec!["child", "model"]);
        assert!(registry.contains("child"));
        assert_eq!(registry.resolve("child").unwrap().name(), "child");
        assert!(registry.resolve("missing").is_none());
    }

    #[test]
    fn test_register_replaces_existing_type() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.register(ModelType::bare("child")).is_none());

        let previous = registry.register(ModelType::new(
            "child",
            Schema::new().relationship("parent", RelationshipDescriptor::has_one("model")),
        ));

        assert!(previous.unwrap().schema().is_empty());
        assert_eq!(registry.len(), 1);
        assert!(!registry.get("child").unwrap().schema().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = SchemaConfig::from_toml_str(
            r#"
[models.post.relationships.author]
type = "user"

[models.user]
"#,
        )
        .unwrap();

        let registry = SchemaRegistry::from_config(&config);
        assert_eq!(registry.model_names(), vec!["post", "user"]);
        assert!(!registry.is_empty());
    }
}
