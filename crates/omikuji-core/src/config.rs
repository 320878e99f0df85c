use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use omikuji_api::anilist::client::API_URL;
use serde::Deserialize;

use crate::error::OmikujiError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
///
/// Sections and keys missing from a user file keep their default values.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub anilist: AniListConfig,
    #[serde(default)]
    pub picker: PickerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AniListConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    API_URL.to_string()
}

impl Default for AniListConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PickerConfig {
    /// Username used when none is given on the command line.
    pub default_username: Option<String>,
    /// Fixed RNG seed; picks are reproducible when set.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load config: user file (if exists) layered over built-in defaults.
    pub fn load() -> Result<Self, OmikujiError> {
        Self::load_from(&Self::config_path())
    }

    /// Load `path` if it exists, falling back to the built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self, OmikujiError> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            let user_str = std::fs::read_to_string(path)?;
            Self::parse(&user_str)
        } else {
            Self::parse(DEFAULT_CONFIG)
        }
    }

    fn parse(s: &str) -> Result<Self, OmikujiError> {
        toml::from_str(s).map_err(|e| OmikujiError::Config(e.to_string()))
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "omikuji")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
