pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{JsonInput, SchemaRegistry};
pub use config::SchemaConfig;
pub use crate::core::ModelHydrator;
pub use domain::{
    FieldKind, FieldValue, ModelInstance, ModelRegistry, ModelType, Owner, PropertyDescriptor,
    RelationshipDescriptor, Schema,
};
pub use utils::error::{ModelError, Result};
