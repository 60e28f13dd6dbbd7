//! Settings loaded from TOML.
//!
//! Defaults are embedded via `include_str!("default_settings.toml")`; a user
//! file replaces them wholesale. Settings are passed explicitly, there is no
//! global instance.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SettingsError;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub font: FontSettings,
    pub limits: LimitSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FontSettings {
    /// Family name applied to runs that need the legacy font.
    pub family: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub max_text_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Settings {
    /// Reads `path` if given, else the embedded defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                parse_settings_toml(&content)
            }
            None => parse_settings_toml(DEFAULT_SETTINGS_TOML),
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.font.family.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "font.family".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.limits.max_text_chars == 0 {
        return Err(SettingsError::InvalidValue {
            field: "limits.max_text_chars".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}
