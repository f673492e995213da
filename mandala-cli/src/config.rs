//! `mandala.toml` loading.
//!
//! Every key is optional. Lookup order for the file is `--config`, then
//! `$MANDALA_CONFIG`, then `./mandala.toml`; only an explicitly named file
//! has to exist.

use crate::roster::{default_roster, Character};
use mandala_images::{default_references, Reference, CHAPTER_QUALITY, CHARACTER_QUALITY, DEFAULT_CHAPTER_COUNT};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "MANDALA_CONFIG";
pub const BACKEND_URL_ENV: &str = "MANDALA_BACKEND_URL";
pub const DEFAULT_CONFIG_FILE: &str = "mandala.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub public_dir: PathBuf,
    images_dir: Option<PathBuf>,
    pub env_file: PathBuf,
    pub chapter_count: u32,
    pub probe: ProbeConfig,
    pub images: ImagesConfig,
    pub characters: Vec<Character>,
    pub references: Vec<Reference>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("frontend/public"),
            images_dir: None,
            env_file: PathBuf::from("frontend/.env"),
            chapter_count: DEFAULT_CHAPTER_COUNT,
            probe: ProbeConfig::default(),
            images: ImagesConfig::default(),
            characters: default_roster(),
            references: default_references(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub backend_url: Option<String>,
    pub timeout_secs: u64,
    pub persistence_delay_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            timeout_secs: 10,
            persistence_delay_ms: 1000,
        }
    }
}

impl ProbeConfig {
    pub fn options(&self) -> mandala_probe::ProbeOptions {
        mandala_probe::ProbeOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            persistence_delay: Duration::from_millis(self.persistence_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub bold_font: Option<PathBuf>,
    pub regular_font: Option<PathBuf>,
    pub character_quality: u8,
    pub chapter_quality: u8,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            bold_font: None,
            regular_font: None,
            character_quality: CHARACTER_QUALITY,
            chapter_quality: CHAPTER_QUALITY,
        }
    }
}

impl Config {
    pub fn images_dir(&self) -> PathBuf {
        self.images_dir
            .clone()
            .unwrap_or_else(|| self.public_dir.join("images"))
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Find, read and parse the config file, then apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let mut config = match explicit {
            Some(path) => Self::read(path)?,
            None => {
                let path = std::env::var_os(CONFIG_ENV)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
                if path.is_file() {
                    Self::read(&path)?
                } else {
                    tracing::debug!("No config at {}, using defaults", path.display());
                    Self::default()
                }
            }
        };

        config.apply_overrides(std::env::var(BACKEND_URL_ENV).ok());
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config = Self::parse(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn apply_overrides(&mut self, backend_url: Option<String>) {
        if let Some(url) = backend_url.filter(|u| !u.is_empty()) {
            self.probe.backend_url = Some(url);
        }
    }
}
