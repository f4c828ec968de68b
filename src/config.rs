//! Configuration handling for the TUI

use crate::service::DEFAULT_ADDRESS;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the configured server address
pub const SERVER_ADDRESS_ENV: &str = "DAILYSALES_SERVER_ADDRESS";

const DEFAULT_TOAST_SECONDS: u64 = 5;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Store service address
    pub server_address: Option<String>,
    /// How long toasts stay on screen
    pub toast_seconds: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("app", "dailysales", "dailysales-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Address to dial: environment, then file, then the default
    pub fn server_address(&self) -> String {
        self.resolve_address(std::env::var(SERVER_ADDRESS_ENV).ok())
    }

    fn resolve_address(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|a| !a.trim().is_empty())
            .or_else(|| self.server_address.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.toast_seconds.unwrap_or(DEFAULT_TOAST_SECONDS))
    }
}
