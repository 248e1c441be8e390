//! Serialization of the finished document to JSON or YAML.
//!
//! The JSON form is pretty-printed; it is the canonical machine-readable
//! artifact and the input handed to the render pipeline's consumers.

use crate::document::Document;
use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use std::fs;
use std::path::Path;

/// Canonical document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    /// File name of the canonical document in this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "rest.json",
            OutputFormat::Yaml => "rest.yaml",
        }
    }
}

/// Serializes a document to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(document: &Document) -> Result<String> {
    debug!("Serializing document to JSON");
    serde_json::to_string_pretty(document).context("Failed to serialize document to JSON")
}

/// Serializes a document to YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(document: &Document) -> Result<String> {
    debug!("Serializing document to YAML");
    serde_yaml::to_string(document).context("Failed to serialize document to YAML")
}

/// Writes string content to a file, creating parent directories as needed.
///
/// The file is overwritten if it already exists.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created or written.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
