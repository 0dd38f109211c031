use anyhow::Result;
use kudu_model::utils::validation::Validate;
use kudu_model::{FieldValue, JsonInput, ModelHydrator, SchemaConfig, SchemaRegistry};
use serde_json::json;
use tempfile::TempDir;

const BLOG_SCHEMA: &str = r#"
[schema]
name = "blog"
default_model = "post"

[models.post.relationships.author]
type = "user"

[models.post.relationships.comments]
type = "comment"
has_many = true

[models.post.properties.status]
default = "draft"

[models.user.properties.role]
default = "member"

[models.comment.relationships.author]
type = "user"
"#;

/// Schema file on disk through to serialized output.
#[test]
fn test_hydrate_from_schema_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let schema_path = temp_dir.path().join("blog.toml");
    std::fs::write(&schema_path, BLOG_SCHEMA)?;

    let config = SchemaConfig::from_file(&schema_path)?;
    config.validate()?;

    let registry = SchemaRegistry::from_config(&config);
    let post_type = registry
        .get("post")
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("post not registered"))?;
    let hydrator = ModelHydrator::new(registry.into_owner());

    let input = JsonInput::from_json_str(
        r#"{
            "title": "Hello",
            "author": { "name": "ada" },
            "comments": [
                { "body": "nice", "author": { "name": "bob", "role": "admin" } },
                { "body": "anonymous", "author": null }
            ]
        }"#,
    )?;
    let JsonInput::Single(data) = input else {
        anyhow::bail!("expected a single document");
    };

    let post = hydrator.construct(&post_type, Some(&data));

    assert!(post.is_instance_of("post"));
    assert_eq!(post.get_raw("status"), Some(&json!("draft")));

    let author = post.get("author").and_then(FieldValue::as_model).unwrap();
    assert!(author.is_instance_of("user"));
    assert_eq!(author.get_raw("role"), Some(&json!("member")));

    let comments = post.get("comments").and_then(FieldValue::as_many).unwrap();
    let first = comments[0].as_model().unwrap();
    assert!(first.is_instance_of("comment"));
    assert_eq!(
        first.get("author").and_then(FieldValue::as_model).and_then(|a| a.get_raw("role")),
        Some(&json!("admin"))
    );
    assert_eq!(comments[1].as_model().unwrap().get_raw("author"), Some(&json!(null)));

    assert_eq!(
        post.to_plain_object().get("comments"),
        Some(&json!([
            { "body": "nice", "author": { "name": "bob", "role": "admin" } },
            { "body": "anonymous", "author": null }
        ]))
    );
    Ok(())
}

#[test]
fn test_construct_by_name_through_registry() -> Result<()> {
    let config = SchemaConfig::from_toml_str(BLOG_SCHEMA)?;
    let hydrator = ModelHydrator::new(SchemaRegistry::from_config(&config).into_owner());

    let default_model = config.default_model().unwrap_or("post");
    let post = hydrator.construct_by_name(default_model, None);

    assert_eq!(
        post.map(|p| p.to_plain_object()),
        json!({ "status": "draft" }).as_object().cloned()
    );
    assert!(hydrator.construct_by_name("article", None).is_none());
    Ok(())
}

#[test]
fn test_batch_input_hydrates_each_document() -> Result<()> {
    let config = SchemaConfig::from_toml_str(BLOG_SCHEMA)?;
    let hydrator = ModelHydrator::new(SchemaRegistry::from_config(&config).into_owner());

    let JsonInput::Batch(items) = JsonInput::from_json_str(r#"[{ "role": "admin" }, {}]"#)? else {
        anyhow::bail!("expected a batch");
    };

    let roles: Vec<_> = items
        .iter()
        .filter_map(|data| hydrator.construct_by_name("user", Some(data)))
        .map(|user| user.get_raw("role").cloned())
        .collect();

    assert_eq!(roles, vec![Some(json!("admin")), Some(json!("member"))]);
    Ok(())
}
