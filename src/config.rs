// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use reel_carousel::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.api_base_url = Some("http://localhost:5000".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ReelCarousel";

/// Empty base URL means requests go to the same origin the host serves from.
/// Only browser-like embedders can resolve that; native hosts must set an
/// absolute `api_base_url`.
pub const DEFAULT_API_BASE_URL: &str = "";
/// Viewport width (px) at or below which the compact feed layout is used.
pub const DEFAULT_COMPACT_BREAKPOINT_PX: u32 = 600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub video_autoplay: Option<bool>,
    #[serde(default)]
    pub start_muted: Option<bool>,
    #[serde(default)]
    pub compact_breakpoint_px: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            video_autoplay: Some(true),
            start_muted: Some(false),
            compact_breakpoint_px: Some(DEFAULT_COMPACT_BREAKPOINT_PX),
        }
    }
}

impl Config {
    /// Returns the configured API base URL, or the same-origin default.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Returns whether videos should start playing when a session opens.
    pub fn video_autoplay(&self) -> bool {
        self.video_autoplay.unwrap_or(true)
    }

    /// Returns whether a session starts muted.
    pub fn start_muted(&self) -> bool {
        self.start_muted.unwrap_or(false)
    }

    /// Returns the compact layout breakpoint in pixels.
    pub fn compact_breakpoint_px(&self) -> u32 {
        self.compact_breakpoint_px
            .unwrap_or(DEFAULT_COMPACT_BREAKPOINT_PX)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            api_base_url: Some("http://localhost:5000".to_string()),
            video_autoplay: Some(false),
            start_muted: Some(true),
            compact_breakpoint_px: Some(480),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.api_base_url, config.api_base_url);
        assert_eq!(loaded.video_autoplay, config.video_autoplay);
        assert_eq!(loaded.start_muted, config.start_muted);
        assert_eq!(loaded.compact_breakpoint_px, config.compact_breakpoint_px);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.api_base_url.is_none());
        assert_eq!(loaded.compact_breakpoint_px(), DEFAULT_COMPACT_BREAKPOINT_PX);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_targets_same_origin() {
        let config = Config::default();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert!(config.video_autoplay());
        assert!(!config.start_muted());
    }
}
