use crate::domain::{FieldValue, Fields, ModelInstance, ModelType, Owner};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Builds model instances from raw JSON data for a single owner.
///
/// Hydration never fails: unknown relationship types, non-object values and
/// unknown fields all pass through unchanged.
#[derive(Clone)]
pub struct ModelHydrator {
    owner: Owner,
}

impl ModelHydrator {
    pub fn new(owner: Owner) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn construct(&self, model_type: &Arc<ModelType>, data: Option<&Map<String, Value>>) -> ModelInstance {
        match data {
            Some(data) => self.hydrate(model_type, data),
            None => self.hydrate(model_type, &Map::new()),
        }
    }

    /// Resolves `type_name` through the owner before constructing.
    pub fn construct_by_name(&self, type_name: &str, data: Option<&Map<String, Value>>) -> Option<ModelInstance> {
        let model_type = self.owner.resolve(type_name)?;
        Some(self.construct(&model_type, data))
    }

    fn hydrate(&self, model_type: &Arc<ModelType>, data: &Map<String, Value>) -> ModelInstance {
        let schema = model_type.schema();
        let mut fields = Fields::with_capacity(data.len());

        for (key, value) in data {
            let field = match schema.field_kind(key).related_type() {
                Some(related) => self.hydrate_relationship(model_type.name(), key, related, value),
                None => FieldValue::Raw(value.clone()),
            };
            fields.push(key.clone(), field);
        }

        // Fields so far mirror the keys of `data`. Falsy defaults are never applied.
        for (key, default) in schema.defaults() {
            if is_truthy(default) && !data.contains_key(key) {
                fields.push(key.to_string(), FieldValue::Raw(default.clone()));
            }
        }

        ModelInstance::from_parts(Arc::clone(model_type), fields, Arc::clone(&self.owner))
    }

    // Array vs object handling follows the value shape, not `has_many`.
    fn hydrate_relationship(&self, model: &str, key: &str, related: &str, value: &Value) -> FieldValue {
        if !matches!(value, Value::Object(_) | Value::Array(_)) {
            return FieldValue::Raw(value.clone());
        }

        let Some(nested_type) = self.owner.resolve(related) else {
            tracing::debug!(
                model = model,
                field = key,
                related = related,
                "relationship type not registered, keeping raw value"
            );
            return FieldValue::Raw(value.clone());
        };

        tracing::trace!(model = model, field = key, related = related, "hydrating relationship");

        match value {
            Value::Array(items) => FieldValue::Many(
                items
                    .iter()
                    .map(|item| match item {
                        Value::Object(data) => FieldValue::One(Box::new(self.hydrate(&nested_type, data))),
                        other => FieldValue::Raw(other.clone()),
                    })
                    .collect(),
            ),
            Value::Object(data) => FieldValue::One(Box::new(self.hydrate(&nested_type, data))),
            other => FieldValue::Raw(other.clone()),
        }
    }
}

impl ModelType {
    /// Constructs an instance of this type owned by `owner`.
    pub fn construct(self: &Arc<Self>, owner: &Owner, data: Option<&Map<String, Value>>) -> ModelInstance {
        ModelHydrator::new(Arc::clone(owner)).construct(self, data)
    }
}

/// Dynamic-language truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
