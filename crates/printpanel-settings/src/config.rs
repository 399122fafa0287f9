//! Configuration for PrintPanel
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension.
//!
//! Configuration is organized into sections:
//! - Printer settings (OctoPrint server, API key, request timeout)
//! - Panel preferences (log level, dry run)

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Printer connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterSettings {
    /// OctoPrint server root
    pub base_url: String,
    /// OctoPrint API key
    pub api_key: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            api_key: String::new(),
            timeout_ms: 5000,
        }
    }
}

/// Panel preference settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Send commands to a no-op channel instead of the printer
    pub dry_run: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dry_run: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Printer connection
    pub printer: PrinterSettings,
    /// Panel preferences
    pub panel: PanelSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let url = self.printer.base_url.trim();
        if url.is_empty() {
            return Err(SettingsError::invalid("printer.base_url", "must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SettingsError::invalid(
                "printer.base_url",
                "must start with http:// or https://",
            ));
        }

        if self.printer.timeout_ms == 0 {
            return Err(SettingsError::invalid(
                "printer.timeout_ms",
                "must be greater than 0",
            ));
        }

        if self.panel.log_level.trim().is_empty() {
            return Err(SettingsError::invalid("panel.log_level", "must not be empty"));
        }

        Ok(())
    }
}
