//! Configuration file support for dep-audit.
//!
//! Provides YAML-based configuration through `dep-audit.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use dep_audit::prelude::{ManifestKind, OutputFormat};
use dep_audit::shared::security::check_config_file;
use dep_audit::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-audit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub manifest_type: Option<String>,
    pub package: Option<String>,
    pub below: Option<u64>,
    pub branch: Option<String>,
    /// Seconds between repositories; fractions allowed.
    pub delay: Option<f64>,
    pub format: Option<String>,
    pub api_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    check_config_file(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref manifest_type) = config.manifest_type {
        if let Err(e) = manifest_type.parse::<ManifestKind>() {
            bail!("Invalid config: manifest_type: {}", e);
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: format: {}", e);
        }
    }

    if let Some(delay) = config.delay {
        if !delay.is_finite() || delay < 0.0 {
            bail!(
                "Invalid config: delay must be a non-negative number of seconds, got {}.\n\n\
                 💡 Hint: Use 0 to disable the pause between repositories.",
                delay
            );
        }
    }

    if let Some(ref package) = config.package {
        if package.trim().is_empty() {
            bail!(
                "Invalid config: package must not be empty.\n\n\
                 💡 Hint: Use the name as it appears in the manifest (e.g., \"livewire/livewire\" or \"react\")."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
