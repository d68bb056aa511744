// SPDX-License-Identifier: MPL-2.0
//! User configuration persisted to a `settings.toml` file.
//!
//! All fields are optional; anything missing or unparsable falls back to
//! the built-in defaults, so a stale or hand-edited file never prevents
//! the app from starting.

use crate::error::Result;
use crate::indicator::style::{parse_hex_color, IndicatorStyle};
use crate::transform::PageTransform;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedDots";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Active dot paint as a `#rrggbb` hex string.
    pub active_color: Option<String>,
    /// Inactive/medium/small dot paint as a `#rrggbb` hex string.
    pub inactive_color: Option<String>,
    /// Maximum number of dots rendered at once (floor of 6).
    #[serde(default)]
    pub visible_dots: Option<usize>,
    /// Name of the page transform the demo carousel uses.
    #[serde(default)]
    pub transform: Option<String>,
}

impl Config {
    /// Builds an indicator style from the configured colors, keeping the
    /// defaults for anything missing or malformed.
    pub fn indicator_style(&self) -> IndicatorStyle {
        let mut style = IndicatorStyle::default();
        if let Some(color) = self.active_color.as_deref().and_then(parse_hex_color) {
            style.active_color = color;
        }
        if let Some(color) = self.inactive_color.as_deref().and_then(parse_hex_color) {
            style.inactive_color = color;
        }
        style
    }

    /// The configured page transform, or the default for unknown names.
    pub fn page_transform(&self) -> PageTransform {
        self.transform
            .as_deref()
            .and_then(PageTransform::from_name)
            .unwrap_or_default()
    }
}

/// Where the settings file lives for this user, if a config directory
/// exists at all.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
