pub mod schema_config;

pub use schema_config::{SchemaConfig, SchemaInfo};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
pub mod cli;
