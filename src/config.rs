//! Runtime configuration read from the environment (and an optional `.env` file).

use crate::error::Result;
use std::env::{self, VarError};
use tracing::debug;

/// Default location of the component registry document.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/nextui-org/nextui-cli/main/src/constants/components.json";

/// Default npm registry used for version lookups.
pub const DEFAULT_NPM_REGISTRY: &str = "https://registry.npmjs.org";

/// Package whose latest version is cached as `latestVersion`.
pub const DEFAULT_FRAMEWORK_PACKAGE: &str = "@nextui-org/react";

/// Settings shared by the registry client, version client and actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `http(s)://` URL or local path of the components document.
    pub registry_url: String,
    pub npm_registry_url: String,
    pub framework_package: String,
    pub cli_package: String,
    /// Skip all version lookups.
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            npm_registry_url: DEFAULT_NPM_REGISTRY.to_string(),
            framework_package: DEFAULT_FRAMEWORK_PACKAGE.to_string(),
            cli_package: env!("CARGO_PKG_NAME").to_string(),
            offline: false,
        }
    }
}

impl Config {
    /// Loads `.env` (if any) and reads the `UI_*` variables over the defaults.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            registry_url: var_or("UI_REGISTRY_URL", defaults.registry_url)?,
            npm_registry_url: var_or("UI_NPM_REGISTRY", defaults.npm_registry_url)?,
            framework_package: var_or("UI_FRAMEWORK_PACKAGE", defaults.framework_package)?,
            cli_package: var_or("UI_CLI_PACKAGE", defaults.cli_package)?,
            offline: parse_flag(&var_or("UI_OFFLINE", String::new())?),
        };

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

fn var_or(key: &str, default: String) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Ok(_) | Err(VarError::NotPresent) => Ok(default),
        Err(e) => Err(e.into()),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
