//! Configuration file support for app-catalog.
//!
//! Provides YAML-based configuration through `app-catalog.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use app_catalog::application::dto::OutputFormat;
use app_catalog::application::request_workflow::WorkflowConfig;
use app_catalog::catalog::domain::{Department, UserProfile};
use app_catalog::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use app_catalog::shared::{CatalogError, Result};

const CONFIG_FILENAME: &str = "app-catalog.config.yml";

/// Upper bound for `confirmation_delay_ms`
pub const MAX_CONFIRMATION_DELAY_MS: u64 = 60_000;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub user: Option<UserConfig>,
    pub confirmation_delay_ms: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The viewer shown in the header and used for recommendations.
#[derive(Debug, Deserialize, Default)]
pub struct UserConfig {
    pub name: Option<String>,
    pub department: Option<String>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Output format, if set. Only valid after [`validate_config`].
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }

    /// Viewer profile with defaults filled in for missing fields
    pub fn user_profile(&self) -> UserProfile {
        let defaults = UserProfile::default();
        let Some(user) = &self.user else {
            return defaults;
        };
        let name = user
            .name
            .as_deref()
            .map(str::trim)
            .map(str::to_string)
            .unwrap_or(defaults.name);
        let department = user
            .department
            .as_deref()
            .and_then(|d| d.parse::<Department>().ok())
            .unwrap_or(defaults.department);
        UserProfile::new(name, department)
    }

    pub fn workflow_config(&self) -> WorkflowConfig {
        self.confirmation_delay_ms
            .map(WorkflowConfig::with_delay_ms)
            .unwrap_or_default()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
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

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        CatalogError::ConfigError {
            path: path.to_path_buf(),
            details: format!("Failed to parse config file: {}", e),
            hint: "Ensure the file contains valid YAML syntax.".to_string(),
        }
    })?;

    validate_config(&config, path)?;
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

/// Loads the explicit config if given, otherwise looks in `dir`.
pub fn resolve_config(explicit: Option<&Path>, dir: &Path) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(dir)?.unwrap_or_default()),
    }
}

fn config_error(path: &Path, details: String, hint: &str) -> anyhow::Error {
    CatalogError::ConfigError {
        path: path.to_path_buf(),
        details,
        hint: hint.to_string(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(format) = &config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| config_error(path, e, "Use 'json' or 'markdown'."))?;
    }

    if let Some(user) = &config.user {
        if let Some(name) = &user.name {
            if name.trim().is_empty() {
                return Err(config_error(
                    path,
                    "user.name must not be empty".to_string(),
                    "Remove the field to use the default name, or set a display name.",
                ));
            }
        }
        if let Some(department) = &user.department {
            let department = department.parse::<Department>().map_err(|e| {
                config_error(path, e, "Use one of the department names shown in the catalog.")
            })?;
            if department.is_company_wide() {
                return Err(config_error(
                    path,
                    "user.department must name a single department, not All".to_string(),
                    "Set the department you work in, e.g. Engineering.",
                ));
            }
        }
    }

    if let Some(delay) = config.confirmation_delay_ms {
        if delay > MAX_CONFIRMATION_DELAY_MS {
            return Err(config_error(
                path,
                format!(
                    "confirmation_delay_ms must be at most {} (got {})",
                    MAX_CONFIRMATION_DELAY_MS, delay
                ),
                "The default delay is 2000 ms.",
            ));
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let nested = config
        .user
        .iter()
        .flat_map(|user| user.unknown_fields.keys().map(|key| format!("user.{}", key)));
    for key in config.unknown_fields.keys().cloned().chain(nested) {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
