// Domain layer: model types, schema descriptors and the registry port.
// Nothing here depends on config or logging.

pub mod model;
pub mod ports;
pub mod schema;

pub use model::{FieldValue, Fields, ModelInstance, ModelType};
pub use ports::{ModelRegistry, Owner};
pub use schema::{FieldKind, PropertyDescriptor, RelationshipDescriptor, Schema};
