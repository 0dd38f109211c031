pub mod hydrator;
pub mod serializer;

pub use crate::domain::model::{FieldValue, Fields, ModelInstance, ModelType};
pub use crate::domain::ports::{ModelRegistry, Owner};
pub use crate::utils::error::Result;
pub use hydrator::{is_truthy, ModelHydrator};
