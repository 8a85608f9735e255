//! Server configuration
//!
//! Priority: CLI flags > environment variables > `config/itemhub.toml` >
//! defaults. CLI flags are applied by the binary on top of [`Config::load`].

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default listen port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Name of the optional configuration file inside the config directory
pub const CONFIG_FILE: &str = "itemhub.toml";

/// Configuration errors that abort startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port is not a valid TCP port number
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// Surface name is not one of rest, pseudo-graphql, graphql
    #[error("Invalid surface: {0}")]
    InvalidSurface(String),

    /// Boolean flag could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidFlag {
        /// Environment variable name
        name: &'static str,
        /// Rejected value
        value: String,
    },
}

/// HTTP binding served by a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    /// `/items` resource routes
    #[default]
    Rest,
    /// Single `/query` endpoint backed by the literal dispatcher
    PseudoGraphql,
    /// Schema-driven GraphQL at `/query` with a playground at `/`
    Graphql,
}

impl Surface {
    /// Configuration name of the surface
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Rest => "rest",
            Surface::PseudoGraphql => "pseudo-graphql",
            Surface::Graphql => "graphql",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surface {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rest" => Ok(Surface::Rest),
            "pseudo-graphql" | "pseudo_graphql" => Ok(Surface::PseudoGraphql),
            "graphql" => Ok(Surface::Graphql),
            other => Err(ConfigError::InvalidSurface(other.to_string())),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Binding to serve
    pub surface: Surface,
    /// JSON document returned for `__schema` queries
    pub introspection_path: PathBuf,
    /// Whether permissive CORS headers are added
    pub cors_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            surface: Surface::default(),
            introspection_path: PathBuf::from("introspection.json"),
            cors_enabled: true,
        }
    }
}

/// Configuration file structure; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    host: Option<String>,
    port: Option<u16>,
    surface: Option<Surface>,
    introspection_path: Option<PathBuf>,
    cors_enabled: Option<bool>,
}

impl Config {
    /// Load configuration from `config_dir/itemhub.toml` and the environment
    pub fn load(config_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(file) = Self::read_file(config_dir) {
            config.apply_file(file);
        }
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read the configuration file
    /// Returns None if the file doesn't exist or can't be parsed
    fn read_file(config_dir: impl AsRef<Path>) -> Option<ConfigFile> {
        let config_path = config_dir.as_ref().join(CONFIG_FILE);

        if !config_path.exists() {
            tracing::debug!("Config file not found: {:?}", config_path);
            return None;
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(file) => {
                    tracing::info!("Loaded configuration from {:?}", config_path);
                    Some(file)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file {:?}: {}", config_path, e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file {:?}: {}", config_path, e);
                None
            }
        }
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(surface) = file.surface {
            self.surface = surface;
        }
        if let Some(path) = file.introspection_path {
            self.introspection_path = path;
        }
        if let Some(cors_enabled) = file.cors_enabled {
            self.cors_enabled = cors_enabled;
        }
    }

    /// Override settings from variables returned by `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("ITEMHUB_HOST") {
            self.host = host;
        }

        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(surface) = lookup("ITEMHUB_SURFACE") {
            self.surface = surface.parse()?;
        }

        if let Some(path) = lookup("ITEMHUB_INTROSPECTION") {
            self.introspection_path = PathBuf::from(path);
        }

        if let Some(cors) = lookup("ITEMHUB_CORS") {
            self.cors_enabled = cors.trim().parse().map_err(|_| ConfigError::InvalidFlag {
                name: "ITEMHUB_CORS",
                value: cors.clone(),
            })?;
        }

        Ok(())
    }

    /// Set the binding to serve
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    /// Set the listen port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the introspection document path
    pub fn with_introspection_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.introspection_path = path.into();
        self
    }
}
