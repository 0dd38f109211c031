use clap::Parser;
use kudu_model::utils::validation::Validate;
use kudu_model::utils::logger;
use kudu_model::{CliConfig, JsonInput, ModelError, ModelHydrator, SchemaConfig, SchemaRegistry};
use serde_json::Value;

fn run(config: &CliConfig) -> kudu_model::Result<String> {
    config.validate()?;

    let schema = SchemaConfig::from_file(&config.schema)?;
    schema.validate()?;

    let model_name = match config.model.as_deref() {
        Some(name) => name,
        None => schema
            .default_model()
            .ok_or_else(|| ModelError::MissingConfigError {
                field: "--model or schema.default_model".to_string(),
            })?,
    };

    let registry = SchemaRegistry::from_config(&schema);
    let model_type = registry
        .get(model_name)
        .cloned()
        .ok_or_else(|| ModelError::UnknownModelError {
            name: model_name.to_string(),
        })?;
    let hydrator = ModelHydrator::new(registry.into_owner());

    let input = if config.reads_stdin() {
        JsonInput::from_reader(std::io::stdin().lock())?
    } else {
        JsonInput::from_file(&config.input)?
    };
    tracing::info!("Hydrating {} document(s) as '{}'", input.len(), model_name);

    let output = match input {
        JsonInput::Single(data) => Value::Object(hydrator.construct(&model_type, Some(&data)).to_plain_object()),
        JsonInput::Batch(items) => Value::Array(
            items
                .iter()
                .map(|data| Value::Object(hydrator.construct(&model_type, Some(data)).to_plain_object()))
                .collect(),
        ),
    };

    let text = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(text)
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            tracing::error!("❌ kudu-model failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = if e.is_config_error() { 1 } else { 2 };
            std::process::exit(exit_code);
        }
    }
}
