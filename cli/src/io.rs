#![deny(missing_docs)]

//! # Document IO
//!
//! Reads YAML / JSON input documents and writes generated output.

use crate::error::CliResult;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Output encoding.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Shared output arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output encoding.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

/// Returns `true` if `path` has a `.yaml` / `.yml` extension.
pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Reads a YAML or JSON document, chosen by file extension.
pub fn read_document(path: &Path) -> CliResult<Value> {
    let text = fs::read_to_string(path)?;
    let value: Value = if is_yaml(path) {
        serde_yaml::from_str(&text)?
    } else {
        serde_json::from_str(&text)?
    };
    Ok(value)
}

/// Encodes `value` and writes it to the configured destination.
pub fn write_output(value: &Value, args: &OutputArgs) -> CliResult<()> {
    let text = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)?;
            tracing::info!(path = ?path, "wrote output");
        }
        None => println!("{}", text.trim_end()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_reads_yaml_and_json() {
        let dir = tempdir().unwrap();
        let yaml = dir.path().join("a.yml");
        let json_path = dir.path().join("a.json");
        fs::write(&yaml, "name: string\n").unwrap();
        fs::write(&json_path, r#"{"name": "string"}"#).unwrap();

        assert_eq!(read_document(&yaml).unwrap(), json!({ "name": "string" }));
        assert_eq!(read_document(&json_path).unwrap(), json!({ "name": "string" }));
    }

    #[test]
    fn test_write_yaml_output_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("out.yaml");
        let args = OutputArgs {
            format: OutputFormat::Yaml,
            output: Some(out.clone()),
        };
        write_output(&json!({ "type": "object" }), &args).unwrap();

        let back: Value = serde_yaml::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(back, json!({ "type": "object" }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_document(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, crate::error::CliError::Io(_)));
    }
}
