//! Top-level configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, BackendConfig, ObservabilityConfig, OutputConfig, OutputFormat};
use crate::constants::DEFAULT_CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SENSU_*`)
/// 3. Config file (`--config <path>`, else `entities-status.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EstatusConfig {
    pub backend: BackendConfig,
    pub output: OutputConfig,
    pub observability: ObservabilityConfig,
    /// Extra query parameters sent with every page request.
    pub filters: BTreeMap<String, String>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub namespace: Option<String>,
    pub access_token: Option<String>,
    pub api_key: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub format: Option<OutputFormat>,
    pub debug: Option<bool>,
    pub page_size: Option<u32>,
    pub max_pages: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub filters: Vec<(String, String)>,
}

impl EstatusConfig {
    /// Load configuration reading the process environment.
    pub fn load(
        config_path: Option<&Path>,
        working_dir: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, working_dir, cli_overrides, |key| {
            std::env::var(key).ok()
        })
    }

    /// Load configuration with an explicit environment lookup.
    pub fn load_with_env<F>(
        config_path: Option<&Path>,
        working_dir: &Path,
        cli_overrides: Option<&CliOverrides>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Layer 3: config file. An explicit path must exist; the implicit
        // one is optional.
        let mut config = match Self::config_file(config_path, working_dir)? {
            Some(path) => Self::from_toml_file(&path)?,
            None => Self::default(),
        };

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config, env)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    fn config_file(
        config_path: Option<&Path>,
        working_dir: &Path,
    ) -> Result<Option<PathBuf>, ConfigError> {
        match config_path {
            Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
            Some(path) => Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }),
            None => {
                let implicit = working_dir.join(DEFAULT_CONFIG_FILENAME);
                Ok(implicit.is_file().then_some(implicit))
            }
        }
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides. Empty values count as unset.
    fn apply_env_overrides<F>(config: &mut EstatusConfig, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| env(key).filter(|v| !v.is_empty());

        if let Some(v) = var("SENSU_API_URL") {
            config.backend.api_url = Some(v);
        }
        if let Some(v) = var("SENSU_NAMESPACE") {
            config.backend.namespace = Some(v);
        }
        if let Some(v) = var("SENSU_ACCESS_TOKEN") {
            config.backend.access_token = Some(v);
        }
        if let Some(v) = var("SENSU_API_KEY") {
            config.backend.api_key = Some(v);
        }
        if let Some(v) = var("SENSU_USER") {
            config.backend.user = Some(v);
        }
        if let Some(v) = var("SENSU_PASSWORD") {
            config.backend.password = Some(v);
        }
        if let Some(v) = var("SENSU_PAGE_SIZE") {
            config.backend.page_size = v.parse().map_err(|_| ConfigError::InvalidValue {
                field: "SENSU_PAGE_SIZE".to_string(),
                message: format!("'{v}' is not a positive integer"),
            })?;
        }
        if let Some(v) = var("SENSU_FORMAT") {
            config.output.format = v.parse().map_err(|message| ConfigError::InvalidValue {
                field: "SENSU_FORMAT".to_string(),
                message,
            })?;
        }
        if let Some(v) = var("SENSU_DEBUG") {
            config.observability.debug =
                parse_bool(&v).ok_or_else(|| ConfigError::InvalidValue {
                    field: "SENSU_DEBUG".to_string(),
                    message: format!("'{v}' is not a boolean"),
                })?;
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut EstatusConfig, cli: &CliOverrides) {
        let backend = &mut config.backend;
        if let Some(ref v) = cli.api_url {
            backend.api_url = Some(v.clone());
        }
        if let Some(ref v) = cli.namespace {
            backend.namespace = Some(v.clone());
        }
        if let Some(ref v) = cli.access_token {
            backend.access_token = Some(v.clone());
        }
        if let Some(ref v) = cli.api_key {
            backend.api_key = Some(v.clone());
        }
        if let Some(ref v) = cli.user {
            backend.user = Some(v.clone());
        }
        if let Some(ref v) = cli.password {
            backend.password = Some(v.clone());
        }
        if let Some(v) = cli.page_size {
            backend.page_size = v;
        }
        if let Some(v) = cli.max_pages {
            backend.max_pages = Some(v);
        }
        if let Some(v) = cli.timeout_secs {
            backend.timeout_secs = Some(v);
        }
        if let Some(v) = cli.format {
            config.output.format = v;
        }
        if let Some(v) = cli.debug {
            config.observability.debug = v;
        }
        for (key, value) in &cli.filters {
            config.filters.insert(key.clone(), value.clone());
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &EstatusConfig) -> Result<(), ConfigError> {
        let backend = &config.backend;

        let api_url = non_empty(&backend.api_url).ok_or_else(|| ConfigError::MissingField {
            field: "backend.api_url".to_string(),
            hint: "--sensu-api-url flag or $SENSU_API_URL environment variable must be set"
                .to_string(),
        })?;
        if non_empty(&backend.namespace).is_none() {
            return Err(ConfigError::MissingField {
                field: "backend.namespace".to_string(),
                hint: "--namespace flag or $SENSU_NAMESPACE environment variable must be set"
                    .to_string(),
            });
        }
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "backend.api_url".to_string(),
                message: format!("'{api_url}' must be an absolute http(s) URL"),
            });
        }
        if backend.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.page_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if backend.max_pages == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "backend.max_pages".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }
        if non_empty(&backend.user).is_some() && non_empty(&backend.password).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "backend.password".to_string(),
                message: "required when backend.user is set".to_string(),
            });
        }
        if !defaults::LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "'{}' is not one of {}",
                    config.observability.log_level,
                    defaults::LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Accepts the spellings flag parsers commonly take for booleans.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
