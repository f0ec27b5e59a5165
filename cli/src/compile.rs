#![deny(missing_docs)]

//! # Compile Command
//!
//! Compiles a shorthand descriptor file and prints the resulting schema.

use crate::error::CliResult;
use crate::io::{read_document, write_output, OutputArgs};
use oas_shorthand_core::{compile, compile_value};
use serde_json::Value;
use std::path::PathBuf;

/// Arguments for the compile command.
#[derive(clap::Args, Debug, Clone)]
pub struct CompileArgs {
    /// Shorthand descriptor (YAML or JSON).
    pub file: PathBuf,

    /// Compile as a nested descriptor (no top-level object wrapping).
    #[clap(long)]
    pub nested: bool,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Executes the compile command.
pub fn execute(args: &CompileArgs) -> CliResult<()> {
    let descriptor = read_document(&args.file)?;
    let compiled = match (&descriptor, args.nested) {
        (Value::Object(map), true) => Value::Object(compile(map, false)),
        _ => compile_value(&descriptor),
    };
    write_output(&compiled, &args.output)
}
