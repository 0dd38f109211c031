use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declares that a field holds instance(s) of another model type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDescriptor {
    #[serde(rename = "type")]
    pub model_type: String,
    #[serde(default, alias = "hasMany")]
    pub has_many: bool,
}

impl RelationshipDescriptor {
    pub fn has_one(model_type: impl Into<String>) -> Self {
        Self {
            model_type: model_type.into(),
            has_many: false,
        }
    }

    pub fn has_many(model_type: impl Into<String>) -> Self {
        Self {
            model_type: model_type.into(),
            has_many: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Informational type label, never checked during hydration.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl PropertyDescriptor {
    pub fn with_default(default: serde_json::Value) -> Self {
        Self {
            kind: None,
            default: Some(default),
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// Typed view of a single schema entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind<'a> {
    Scalar,
    HasOne(&'a str),
    HasMany(&'a str),
}

impl<'a> FieldKind<'a> {
    /// Name of the related model type, if this field is a relationship.
    pub fn related_type(self) -> Option<&'a str> {
        match self {
            FieldKind::Scalar => None,
            FieldKind::HasOne(name) | FieldKind::HasMany(name) => Some(name),
        }
    }
}

/// Static per-model descriptor of relationships and property defaults.
///
/// Both parts are optional in the serialized form; a missing part is the
/// same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, RelationshipDescriptor>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertyDescriptor>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn relationship(mut self, field: impl Into<String>, descriptor: RelationshipDescriptor) -> Self {
        self.relationships.insert(field.into(), descriptor);
        self
    }

    pub fn property(mut self, field: impl Into<String>, descriptor: PropertyDescriptor) -> Self {
        self.properties.insert(field.into(), descriptor);
        self
    }

    pub fn field_kind(&self, field: &str) -> FieldKind<'_> {
        match self.relationships.get(field) {
            Some(rel) if rel.has_many => FieldKind::HasMany(&rel.model_type),
            Some(rel) => FieldKind::HasOne(&rel.model_type),
            None => FieldKind::Scalar,
        }
    }

    /// Declared defaults, in property key order. Includes falsy defaults;
    /// the hydrator decides which ones apply.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.properties
            .iter()
            .filter_map(|(key, prop)| prop.default.as_ref().map(|value| (key.as_str(), value)))
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty() && self.properties.is_empty()
    }
}
