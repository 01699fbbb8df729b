//! Configuration management for `issued`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI overrides
//! 2. Environment variables (`ISSUED_*`)
//! 3. YAML config file (`--config`, default `issued.yaml`)
//! 4. Defaults

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracker_lib::util::{DEFAULT_ID_PREFIX, is_valid_prefix};
use tracker_lib::{Result, TrackerError};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILENAME: &str = "issued.yaml";
/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
/// Frontend origins allowed by default.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:8080"];

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub id_prefix: String,
    pub cors_origins: Vec<String>,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(ToString::to_string).collect(),
            log_json: false,
        }
    }
}

/// Overrides passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub bind: Option<String>,
    pub id_prefix: Option<String>,
    pub log_json: Option<bool>,
}

/// One configuration source. Unset keys fall through to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigLayer {
    #[serde(default)]
    pub bind: Option<String>,
    #[serde(default, alias = "id_prefix")]
    pub id_prefix: Option<String>,
    #[serde(default, alias = "cors_origins")]
    pub cors_origins: Option<Vec<String>>,
    #[serde(default, alias = "log_json")]
    pub log_json: Option<bool>,
}

impl ConfigLayer {
    /// Build a layer from a YAML file path. Missing files return empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| TrackerError::Config(format!("{}: {e}", path.display())))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("{}: {e}", path.display())))
    }

    /// Build a layer from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ISSUED_LOG_JSON` is not a boolean.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::vars())
    }

    /// Build a layer from `ISSUED_*` key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if `ISSUED_LOG_JSON` is not a boolean.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut layer = Self::default();

        for (key, value) in vars {
            let value = value.into();
            match key.as_ref() {
                "ISSUED_BIND" => layer.bind = Some(value),
                "ISSUED_ID_PREFIX" => layer.id_prefix = Some(value),
                "ISSUED_CORS_ORIGINS" => {
                    layer.cors_origins = Some(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(ToString::to_string)
                            .collect(),
                    );
                }
                "ISSUED_LOG_JSON" => {
                    let parsed = parse_bool(&value).ok_or_else(|| {
                        TrackerError::Config(format!("ISSUED_LOG_JSON: not a boolean: {value}"))
                    })?;
                    layer.log_json = Some(parsed);
                }
                _ => {}
            }
        }

        Ok(layer)
    }

    /// Build a layer from CLI overrides.
    #[must_use]
    pub fn from_cli(overrides: &CliOverrides) -> Self {
        Self {
            bind: overrides.bind.clone(),
            id_prefix: overrides.id_prefix.clone(),
            cors_origins: None,
            log_json: overrides.log_json,
        }
    }

    /// Overlay `higher` on top of `self`.
    #[must_use]
    pub fn merge(self, higher: Self) -> Self {
        Self {
            bind: higher.bind.or(self.bind),
            id_prefix: higher.id_prefix.or(self.id_prefix),
            cors_origins: higher.cors_origins.or(self.cors_origins),
            log_json: higher.log_json.or(self.log_json),
        }
    }

    /// Fill gaps from defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the bind address or ID prefix is invalid.
    pub fn resolve(self) -> Result<ServerConfig> {
        let defaults = ServerConfig::default();

        let bind = match self.bind {
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .map_err(|e| TrackerError::Config(format!("bind: invalid address '{raw}': {e}")))?,
            None => defaults.bind,
        };

        let id_prefix = self.id_prefix.unwrap_or(defaults.id_prefix);
        if !is_valid_prefix(&id_prefix) {
            return Err(TrackerError::Config(format!(
                "id-prefix: '{id_prefix}' must be 1-16 ASCII letters or digits"
            )));
        }

        Ok(ServerConfig {
            bind,
            id_prefix,
            cors_origins: self.cors_origins.unwrap_or(defaults.cors_origins),
            log_json: self.log_json.unwrap_or(defaults.log_json),
        })
    }
}

/// Load the effective configuration from all sources.
///
/// # Errors
///
/// Returns an error if a source cannot be read or the result is invalid.
pub fn load(overrides: &CliOverrides) -> Result<ServerConfig> {
    let path = overrides
        .config_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));

    if overrides.config_path.is_some() && !path.exists() {
        return Err(TrackerError::Config(format!(
            "config file not found: {}",
            path.display()
        )));
    }

    ConfigLayer::from_yaml(&path)?
        .merge(ConfigLayer::from_env()?)
        .merge(ConfigLayer::from_cli(overrides))
        .resolve()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
