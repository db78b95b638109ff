use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    ApiPathsConfig, BlockingConfig, ConfigError, FirewallConfig, LoggingConfig, ServerConfig,
};

/// Root configuration, read from `gatewarden.toml`
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub firewall: FirewallConfig,

    #[serde(default)]
    pub blocking: BlockingConfig,

    #[serde(default)]
    pub api_paths: ApiPathsConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub firewall_address: Option<String>,
    pub api_key: Option<String>,
    pub vdoms: Option<Vec<String>>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the config file (when given and present) and applies overrides.
    ///
    /// Without a path, `gatewarden.toml` in the working directory is used if
    /// it exists; otherwise defaults apply.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new("gatewarden.toml").exists() => Self::from_file("gatewarden.toml")?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(address) = overrides.firewall_address {
            self.firewall.address = address;
        }
        if let Some(key) = overrides.api_key {
            self.firewall.api_key = Some(key);
        }
        if let Some(vdoms) = overrides.vdoms {
            self.firewall.vdoms = vdoms;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.firewall.address.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "firewall.address must be set".to_string(),
            ));
        }
        if self.firewall.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "firewall.timeout_secs must be greater than zero".to_string(),
            ));
        }
        for (name, template) in self.api_paths.all() {
            if !template.starts_with('/') {
                return Err(ConfigError::Invalid(format!(
                    "api_paths.{} must start with '/'",
                    name
                )));
            }
        }
        if !matches!(
            self.logging.level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(ConfigError::Invalid(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}
