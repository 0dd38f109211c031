use crate::domain::Schema;
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{validate_identifier, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Schema document: one entry per model type under `[models.<name>]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub schema: Option<SchemaInfo>,
    #[serde(default)]
    pub models: BTreeMap<String, Schema>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Model used by the CLI when `--model` is not given.
    pub default_model: Option<String>,
}

impl SchemaConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded schema file: {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        for (model_name, schema) in &self.models {
            validate_identifier("models", model_name)?;

            for (field, relationship) in &schema.relationships {
                let path = format!("models.{}.relationships", model_name);
                validate_identifier(&path, field)?;
                validate_identifier(&format!("{}.{}.type", path, field), &relationship.model_type)?;

                // Unregistered types hydrate as raw values, so this is not fatal.
                if !self.models.contains_key(&relationship.model_type) {
                    tracing::warn!(
                        "Relationship {}.{} refers to undeclared model '{}'",
                        model_name,
                        field,
                        relationship.model_type
                    );
                }
            }

            for field in schema.properties.keys() {
                validate_identifier(&format!("models.{}.properties", model_name), field)?;
            }
        }

        if let Some(default_model) = self.default_model() {
            if !self.models.contains_key(default_model) {
                return Err(ModelError::InvalidConfigValueError {
                    field: "schema.default_model".to_string(),
                    value: default_model.to_string(),
                    reason: "Default model is not declared under [models]".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn model(&self, name: &str) -> Option<&Schema> {
        self.models.get(name)
    }

    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn default_model(&self) -> Option<&str> {
        self.schema.as_ref().and_then(|s| s.default_model.as_deref())
    }
}

impl Validate for SchemaConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
