//! Engine configuration dump and validation

use std::path::Path;

use anyhow::Result;
use cluster_engine::EngineConfig;
use tracing::info;

use crate::error::CliError;
use crate::loader::load_document;
use crate::output;

pub fn execute(check: Option<&Path>, json: bool) -> Result<()> {
    match check {
        Some(path) => {
            let config = load_config(path)?;
            info!(path = %path.display(), ?config, "Configuration loaded");
            output::print_success(&format!("Configuration valid: {}", path.display()), json);
            Ok(())
        }
        None => print_default(json),
    }
}

/// Load and validate an engine configuration file.
pub fn load_config(path: &Path) -> Result<EngineConfig, CliError> {
    let config: EngineConfig = load_document(path)?;
    config
        .validate()
        .map_err(|e| CliError::InvalidConfiguration(e.to_string()))?;
    Ok(config)
}

fn print_default(json: bool) -> Result<()> {
    let config = EngineConfig::default();
    if json {
        output::print_json("config", &config)
    } else {
        print!("{}", serde_yaml::to_string(&config)?);
        Ok(())
    }
}
