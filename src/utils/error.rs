use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Schema parsing error: {0}")]
    SchemaParseError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown model type: {name}")]
    UnknownModelError { name: String },

    #[error("Invalid input: {message}")]
    InvalidInputError { message: String },
}

impl ModelError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ModelError::SchemaParseError(_)
                | ModelError::InvalidConfigValueError { .. }
                | ModelError::MissingConfigError { .. }
                | ModelError::UnknownModelError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ModelError::IoError(_) => "Check that the file exists and is readable",
            ModelError::SerializationError(_) => "Make sure the input is valid JSON",
            ModelError::SchemaParseError(_) => "Make sure the schema file is valid TOML",
            ModelError::InvalidConfigValueError { .. } => "Fix the reported schema value and retry",
            ModelError::MissingConfigError { .. } => "Add the missing setting to the schema file",
            ModelError::UnknownModelError { .. } => "Declare the model under [models.<name>] in the schema file",
            ModelError::InvalidInputError { .. } => "Provide a JSON object or an array of objects",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ModelError::UnknownModelError { name } => format!("Model '{}' is not declared in the schema", name),
            ModelError::InvalidConfigValueError { field, reason, .. } => {
                format!("Schema setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_classification() {
        let unknown = ModelError::UnknownModelError {
            name: "post".to_string(),
        };
        assert!(unknown.is_config_error());
        assert_eq!(unknown.user_friendly_message(), "Model 'post' is not declared in the schema");

        let input = ModelError::InvalidInputError {
            message: "expected object".to_string(),
        };
        assert!(!input.is_config_error());
        assert_eq!(input.user_friendly_message(), "Invalid input: expected object");
    }
}
