use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "vecmath.toml";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Format spec used when `--format` is not given
    pub(crate) format: Option<String>,
}

impl Config {
    pub(crate) fn parse(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Could not read config file: {}", path.display()))?;
        let config: Self = toml::from_slice(&data)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Loads `path` if given, else `vecmath.toml` from the working directory if
    /// it exists, else the default config.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            debug!("Loading config from `{}`", path.display());
            return Self::parse(path);
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() && path.is_file() {
            debug!("Loading config from `{}`", path.display());
            Self::parse(path)
        } else {
            Ok(Self::default())
        }
    }
}
