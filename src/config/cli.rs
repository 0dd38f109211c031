use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "kudu-model")]
#[command(about = "Hydrate JSON data into schema-described models")]
pub struct CliConfig {
    /// Path to the TOML schema file
    #[arg(short, long, default_value = "schema.toml")]
    pub schema: String,

    /// Model type to construct (falls back to schema.default_model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// JSON input file, or "-" for stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Pretty-print the serialized output
    #[arg(long)]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("schema", &self.schema)?;
        validate_path("input", &self.input)?;
        Ok(())
    }
}
