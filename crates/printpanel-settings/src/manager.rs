//! Settings Manager
//!
//! Locates the configuration file in the platform config directory, loads it
//! (falling back to defaults when it does not exist yet) and writes it back.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "printpanel";
const CONFIG_FILE: &str = "config.toml";

/// Where the loaded configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    /// Read from the bound file
    File,
    /// The file did not exist; built-in defaults are in use
    Defaults,
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Defaults => write!(f, "defaults"),
        }
    }
}

/// Owns the loaded configuration and the file it came from
#[derive(Debug, Clone)]
pub struct SettingsManager {
    config: Config,
    path: PathBuf,
    source: SettingsSource,
}

impl SettingsManager {
    /// Platform configuration directory for the panel
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Default configuration file path
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load from the default location
    pub fn load_default() -> SettingsResult<Self> {
        Self::load(&Self::config_file_path()?)
    }

    /// Load from `path`, using defaults when the file does not exist
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let (config, source) = if path.exists() {
            (Config::load_from_file(path)?, SettingsSource::File)
        } else {
            (Config::default(), SettingsSource::Defaults)
        };
        debug!("Settings for {} taken from {}", path.display(), source);

        Ok(Self {
            config,
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the configuration back to its file, creating parent directories
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.config.save_to_file(&self.path)?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// File the configuration is bound to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the configuration was read from the file or defaulted
    ///
    /// Loading usually happens before logging is set up, so callers report
    /// this themselves once a subscriber is installed.
    pub fn source(&self) -> SettingsSource {
        self.source
    }
}
