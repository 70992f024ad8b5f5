use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{API_BASE_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_BASE};

/// User settings, read from `~/.stadium-view/config.yaml`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    /// Per-request timeout; requests wait forever when unset
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: String::from(DEFAULT_API_BASE),
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Load from the default location, then apply the environment override
    pub fn load() -> Result<Self> {
        let mut settings = match config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        if let Ok(url) = std::env::var(API_BASE_ENV) {
            settings.base_url = url;
        }
        Ok(settings)
    }

    /// Missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    pub fn api_base(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url {:?}", self.base_url))?;
        anyhow::ensure!(!url.cannot_be_a_base(), "base_url {:?} cannot be a base", self.base_url);
        Ok(url)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
