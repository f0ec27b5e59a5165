#![deny(missing_docs)]

//! # Template Command
//!
//! Prints a built-in template as a generated body fragment.

use crate::error::{CliError, CliResult};
use crate::io::{write_output, OutputArgs};
use oas_shorthand_core::templates::{by_name, TEMPLATE_NAMES};
use oas_shorthand_core::{generate, GenerateOptions, ModelRegistry, Source};

/// Arguments for the template command.
#[derive(clap::Args, Debug, Clone)]
pub struct TemplateArgs {
    /// Template name.
    #[clap(value_parser = clap::builder::PossibleValuesParser::new(TEMPLATE_NAMES.iter().copied()))]
    pub name: String,

    /// Fragment description.
    #[clap(long, short, default_value = "")]
    pub description: String,

    /// Wrap the schema in an array.
    #[clap(long)]
    pub array: bool,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Executes the template command.
pub fn execute(args: &TemplateArgs) -> CliResult<()> {
    let descriptor = by_name(&args.name)
        .ok_or_else(|| CliError::General(format!("unknown template '{}'", args.name)))?;
    let options = GenerateOptions::new().with_array(args.array);
    let fragment = generate(
        &ModelRegistry::new(),
        &Source::from(descriptor),
        &args.description,
        &options,
    );
    write_output(&fragment, &args.output)
}
