use crate::utils::error::{ModelError, Result};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

/// Raw JSON documents to hydrate: either one object or an array of objects.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonInput {
    Single(Map<String, Value>),
    Batch(Vec<Map<String, Value>>),
}

impl JsonInput {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(JsonInput::Single(map)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Object(map) => Ok(map),
                    other => Err(ModelError::InvalidInputError {
                        message: format!("element {} is {}, expected an object", index, type_name(&other)),
                    }),
                })
                .collect::<Result<Vec<_>>>()
                .map(JsonInput::Batch),
            other => Err(ModelError::InvalidInputError {
                message: format!("top-level value is {}, expected an object or array", type_name(&other)),
            }),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            JsonInput::Single(_) => 1,
            JsonInput::Batch(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
