use std::{fs, io, path::Path};

use log::LevelFilter;
use pace_domain::Locale;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "LocaleDef")]
    pub locale: Locale,
    #[serde(with = "LevelFilterDef")]
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            log_level: LevelFilter::Warn,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Locale", rename_all = "lowercase")]
enum LocaleDef {
    En,
    Ru,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "LevelFilter", rename_all = "lowercase")]
enum LevelFilterDef {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Read the settings from a JSON file.
///
/// A missing file results in the default settings.
pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(err) => Err(err.into()),
    }
}

pub fn parse_settings(content: &str) -> Result<Settings, SettingsError> {
    Ok(serde_json::from_str(content)?)
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}
