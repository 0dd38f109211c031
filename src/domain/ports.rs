use crate::domain::model::ModelType;
use std::sync::Arc;

/// Capability supplied by the owning application: resolves a relationship's
/// declared type name to the related model type.
pub trait ModelRegistry: Send + Sync {
    fn resolve(&self, type_name: &str) -> Option<Arc<ModelType>>;
}

/// Owning application reference carried by every model instance.
pub type Owner = Arc<dyn ModelRegistry>;
