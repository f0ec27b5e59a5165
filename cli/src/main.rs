#![deny(missing_docs)]

//! # OAS Shorthand CLI
//!
//! Command Line Interface for the shorthand schema toolchain.
//!
//! Supported Commands:
//! - `compile`: Shorthand descriptor -> schema.
//! - `generate`: Shorthand descriptor or model -> OpenAPI body fragment.
//! - `template`: Built-in template -> OpenAPI body fragment.

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::error::CliResult;

mod compile;
mod error;
mod generate;
mod io;
mod template;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI shorthand schema toolchain")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a shorthand descriptor into a schema.
    Compile(compile::CompileArgs),
    /// Generate an OpenAPI body fragment.
    Generate(generate::GenerateArgs),
    /// Print a built-in template as a body fragment.
    Template(template::TemplateArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Compile(args) => compile::execute(args)?,
        Commands::Generate(args) => generate::execute(args)?,
        Commands::Template(args) => template::execute(args)?,
    }

    Ok(())
}
