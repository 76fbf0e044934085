//! JSON/YAML document loading by file extension

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml" | "yml") => Ok(Format::Yaml),
            _ => Err(CliError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Read and deserialize `path`, choosing the parser from its extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let value = match format {
        Format::Json => serde_json::from_str(&text)?,
        Format::Yaml => serde_yaml::from_str(&text)?,
    };
    Ok(value)
}
