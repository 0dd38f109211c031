use crate::domain::ModelInstance;
use crate::utils::error::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

impl ModelInstance {
    /// Plain copy of every field, nested instances included. The owner is
    /// not a field and so never appears; the instance itself is untouched.
    pub fn to_plain_object(&self) -> Map<String, Value> {
        self.fields()
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_plain_value()))
            .collect()
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for ModelInstance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields().len()))?;
        for (key, value) in self.fields().iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{ModelRegistry, ModelType, Owner, RelationshipDescriptor, Schema};
    use serde_json::{json, Map, Value};
    use std::sync::Arc;

    struct MockApp;

    impl ModelRegistry for MockApp {
        fn resolve(&self, type_name: &str) -> Option<Arc<ModelType>> {
            (type_name == "child").then(|| Arc::new(ModelType::bare("child")))
        }
    }

    fn model() -> (Owner, Arc<ModelType>) {
        let owner: Owner = Arc::new(MockApp);
        let model = Arc::new(ModelType::new(
            "model",
            Schema::new().relationship("children", RelationshipDescriptor::has_many("child")),
        ));
        (owner, model)
    }

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_plain_object_contains_only_fields() {
        let (owner, model) = model();
        let instance = model.construct(&owner, Some(&data(json!({ "type": "test", "name": "test" }))));

        let plain = instance.to_plain_object();

        assert_eq!(Value::Object(plain), json!({ "type": "test", "name": "test" }));
        assert!(!instance.has_field("app"));
        assert!(Arc::ptr_eq(instance.owner(), &owner));
    }

    #[test]
    fn test_plain_object_renders_nested_instances() {
        let (owner, model) = model();
        let input = json!({ "id": 1, "children": [{ "id": 2 }, null] });
        let instance = model.construct(&owner, Some(&data(input.clone())));

        assert_eq!(Value::Object(instance.to_plain_object()), input);
    }

    #[test]
    fn test_serialized_text_round_trips() {
        let (owner, model) = model();
        let instance = model.construct(
            &owner,
            Some(&data(json!({ "name": "test", "children": [{ "id": 2 }, { "id": 3 }] }))),
        );

        let text = instance.to_json_string().unwrap();
        let parsed: Map<String, Value> = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, instance.to_plain_object());
        assert!(text.starts_with(r#"{"name":"test""#));
    }

    #[test]
    fn test_pretty_output_is_valid_json() {
        let (owner, model) = model();
        let instance = model.construct(&owner, None);
        let text = instance.to_json_string_pretty().unwrap();
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), json!({}));
    }
}
