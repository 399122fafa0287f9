//! PrintPanel Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, PanelSettings, PrinterSettings};
pub use error::{SettingsError, SettingsResult};
pub use manager::{SettingsManager, SettingsSource};
