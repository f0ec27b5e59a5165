#![deny(missing_docs)]

//! # Generate Command
//!
//! Builds an OpenAPI body fragment from a shorthand file or a registered
//! model. Options come from an optional options file, then command-line
//! flags adjust the lists in place (`--exclude '!id'` removes `id` from a
//! list loaded from the file).

use crate::error::{CliError, CliResult};
use crate::io::{is_yaml, read_document, write_output, OutputArgs};
use oas_shorthand_core::{generate, toggle, GenerateOptions, ModelRegistry, Source};
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Shorthand descriptor file (YAML or JSON).
    #[clap(long, conflicts_with = "model", required_unless_present = "model")]
    pub source: Option<PathBuf>,

    /// Name of a registered model to use as the source.
    #[clap(long)]
    pub model: Option<String>,

    /// Model definitions file (YAML or JSON).
    #[clap(long, env = "OAS_SHORTHAND_MODELS")]
    pub models: Option<PathBuf>,

    /// Fragment description.
    #[clap(long, short, default_value = "")]
    pub description: String,

    /// Options file (YAML or JSON, camelCase keys).
    #[clap(long)]
    pub options: Option<PathBuf>,

    /// Properties to exclude. Prefix with `!` to drop an entry from the options file.
    #[clap(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Properties to keep.
    #[clap(long, value_delimiter = ',')]
    pub pick: Vec<String>,

    /// Properties marked as not required.
    #[clap(long, value_delimiter = ',')]
    pub optional: Vec<String>,

    /// Required properties.
    #[clap(long, value_delimiter = ',')]
    pub required: Vec<String>,

    /// Replace a property with a registered model.
    /// Format: `"property=Model"`.
    #[clap(long, value_parser = parse_key_val)]
    pub overwrite: Vec<(String, String)>,

    /// Replace a property with an array of a registered model.
    /// Format: `"property=Model"`.
    #[clap(long, value_parser = parse_key_val)]
    pub overwrite_array: Vec<(String, String)>,

    /// Wrap the schema in an array.
    #[clap(long)]
    pub array: bool,

    /// Read models without required fields.
    #[clap(long)]
    pub partial: bool,

    /// Replace the schema's required list instead of merging.
    #[clap(long)]
    pub overwrite_required: bool,

    /// Include model relations.
    #[clap(long)]
    pub relations: bool,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Helper to parse "key=value" arguments.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Loads model definitions from `path`, if given.
pub fn load_registry(path: Option<&Path>) -> CliResult<ModelRegistry> {
    let mut registry = ModelRegistry::new();
    if let Some(path) = path {
        let text = fs::read_to_string(path)?;
        if is_yaml(path) {
            registry.register_yaml(&text)?;
        } else {
            registry.register_json(&text)?;
        }
        tracing::info!(count = registry.names().count(), "loaded models");
    }
    Ok(registry)
}

/// Builds the effective options: file first, then flags.
pub fn build_options(args: &GenerateArgs) -> CliResult<GenerateOptions> {
    let mut options: GenerateOptions = match &args.options {
        Some(path) => serde_json::from_value(read_document(path)?)?,
        None => GenerateOptions::default(),
    };

    toggle(&mut options.exclude, &args.exclude);
    toggle(&mut options.pick, &args.pick);
    toggle(&mut options.optional, &args.optional);
    toggle(&mut options.required, &args.required);

    for (key, model) in &args.overwrite {
        options.overwrite.insert(key.clone(), Source::model(model));
    }
    for (key, model) in &args.overwrite_array {
        options.overwrite_array.insert(key.clone(), Source::model(model));
    }

    options.array |= args.array;
    options.partial |= args.partial;
    options.overwrite_required |= args.overwrite_required;
    options.include_relations |= args.relations;
    Ok(options)
}

/// Executes the generate command.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let registry = load_registry(args.models.as_deref())?;
    let options = build_options(args)?;

    let source = match (&args.source, &args.model) {
        (Some(path), _) => Source::shorthand(read_document(path)?),
        (None, Some(model)) => {
            if !registry.contains(model) {
                tracing::warn!(model = %model, "model is not registered");
            }
            Source::model(model)
        }
        (None, None) => {
            return Err(CliError::General(
                "either --source or --model is required".to_string(),
            ))
        }
    };

    let fragment = generate(&registry, &source, &args.description, &options);
    write_output(&fragment, &args.output)
}
