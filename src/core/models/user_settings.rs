use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::global_constants;

/// Immutable client configuration, fixed when the client is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub log_responses: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            log_responses: false,
        }
    }

    pub fn with_log_responses(mut self, log_responses: bool) -> Self {
        self.log_responses = log_responses;
        self
    }
}

fn default_top_k() -> u32 {
    global_constants::DEFAULT_TOP_K
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientSettings {
    pub api_url: String,
    #[serde(default)]
    pub log_responses: bool,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    /// Chosen webcam, kept for the camera front end that owns device
    /// selection. The client itself never reads it.
    #[serde(default)]
    pub camera_device: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: global_constants::DEFAULT_API_URL.to_string(),
            log_responses: false,
            top_k: global_constants::DEFAULT_TOP_K,
            camera_device: None,
        }
    }
}

impl ClientSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;
        self.save_to_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::warn!(
                "[SETTINGS] No settings file at {:?}, using defaults",
                settings_path
            );
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings from {:?}", settings_path))?;
        let settings: ClientSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {:?}", settings_path))?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] API URL: {}", settings.api_url);
        log::debug!("[SETTINGS] top_k: {}", settings.top_k);

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", settings_path))?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone()).with_log_responses(self.log_responses)
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
