// Adapters layer: concrete implementations of the domain ports and the
// input side of the CLI.

pub mod input;
pub mod registry;

pub use input::JsonInput;
pub use registry::SchemaRegistry;
