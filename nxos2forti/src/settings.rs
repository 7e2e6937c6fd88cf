use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Values applied to every generated FortiGate interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitSettings {
    /// Prefix of the generated interface name, followed by the VLAN id.
    pub name_prefix: String,
    pub vdom: String,
    pub allowaccess: String,
    pub status: String,
    pub role: String,
}

impl Default for EmitSettings {
    fn default() -> Self {
        Self {
            name_prefix: "VL.".to_string(),
            vdom: "root".to_string(),
            allowaccess: "ping".to_string(),
            status: "down".to_string(),
            role: "lan".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    interface: EmitSettings,
}

/// Errors returned when loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load emit settings from a TOML file. Keys left out keep their defaults.
pub fn load_settings(path: &Path) -> Result<EmitSettings, SettingsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_settings(&raw, path.display().to_string())
}

/// Built-in settings shipped with the binary.
pub fn default_settings() -> EmitSettings {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/settings/fortigate.toml"
    ));
    parse_settings(embedded, "embedded settings".to_string()).unwrap_or_default()
}

fn parse_settings(raw: &str, path: String) -> Result<EmitSettings, SettingsLoadError> {
    let parsed: SettingsFile =
        toml::from_str(raw).map_err(|source| SettingsLoadError::Parse { path, source })?;
    Ok(parsed.interface)
}
