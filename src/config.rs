//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the content API
    pub api_base_url: Option<String>,
    /// Bearer token for admin endpoints
    pub auth_token: Option<String>,
    /// Session role ("admin" unlocks the admin screens)
    pub role: Option<String>,
    /// Page size for list requests
    pub page_limit: Option<u32>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ai", "saavigen", "saavi-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Role string for the auth context ("viewer" when unset)
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or("viewer")
    }

    /// Page size for list requests (server default cap applies on top)
    pub fn page_limit(&self) -> u32 {
        self.page_limit.unwrap_or(50)
    }
}
