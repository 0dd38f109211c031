use crate::domain::ports::Owner;
use crate::domain::schema::Schema;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A named model type and its schema. Acts as the constructor for
/// instances of that type.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelType {
    name: String,
    schema: Schema,
}

impl ModelType {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }

    /// A model type without relationships or properties.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, Schema::default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// Value held by a model field after hydration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Raw(serde_json::Value),
    One(Box<ModelInstance>),
    /// Elements are `One` for hydrated objects and `Raw` for everything else.
    Many(Vec<FieldValue>),
}

impl FieldValue {
    pub fn as_raw(&self) -> Option<&serde_json::Value> {
        match self {
            FieldValue::Raw(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&ModelInstance> {
        match self {
            FieldValue::One(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_many(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Many(items) => Some(items),
            _ => None,
        }
    }

    pub fn to_plain_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Raw(value) => value.clone(),
            FieldValue::One(instance) => serde_json::Value::Object(instance.to_plain_object()),
            FieldValue::Many(items) => {
                serde_json::Value::Array(items.iter().map(FieldValue::to_plain_value).collect())
            }
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::Raw(value)
    }
}

impl From<ModelInstance> for FieldValue {
    fn from(instance: ModelInstance) -> Self {
        FieldValue::One(Box::new(instance))
    }
}

/// Insertion-ordered field mapping of a model instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Appends without checking for an existing entry; callers guarantee
    /// `key` is not present yet.
    pub(crate) fn push(&mut self, key: String, value: FieldValue) {
        self.entries.push((key, value));
    }

    /// Sets `key`, keeping its original position when it already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A hydrated model: its type, its fields, and the owning application.
///
/// The owner is kept out of `fields`, so it never reaches serialized output.
#[derive(Clone)]
pub struct ModelInstance {
    model_type: Arc<ModelType>,
    fields: Fields,
    owner: Owner,
}

impl ModelInstance {
    pub(crate) fn from_parts(model_type: Arc<ModelType>, fields: Fields, owner: Owner) -> Self {
        Self {
            model_type,
            fields,
            owner,
        }
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn model_type(&self) -> &ModelType {
        &self.model_type
    }

    pub fn is_instance_of(&self, type_name: &str) -> bool {
        self.model_type.name() == type_name
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Raw JSON value of a field that was not hydrated into a model.
    pub fn get_raw(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key).and_then(FieldValue::as_raw)
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }
}

impl PartialEq for ModelInstance {
    fn eq(&self, other: &Self) -> bool {
        self.model_type.name() == other.model_type.name() && self.fields == other.fields
    }
}

impl fmt::Debug for ModelInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelInstance")
            .field("model_type", &self.model_type.name())
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
