//! # PrintPanel
//!
//! Control panel core for OctoPrint-connected dual-extruder 3D printers:
//! - Nozzle (Z-probe) and second-tool offset calibration
//! - Firmware settings restore
//! - OctoPrint HTTP command channel with a dry-run fallback
//!
//! ## Architecture
//!
//! PrintPanel is organized as a workspace with multiple crates:
//!
//! 1. **printpanel-core** - Offsets, units, error taxonomy, shared-state aliases
//! 2. **printpanel-communication** - Command channels, OctoPrint client, Marlin commands
//! 3. **printpanel-settings** - Configuration files and validation
//! 4. **printpanel-ui** - Toolkit-neutral calibration and settings pages
//! 5. **printpanel** - Console front-end that integrates all crates

pub mod console;

pub use printpanel_communication::{
    CommandChannel, NoOpChannel, OctoPrintChannel, OctoPrintConfig, SharedChannel,
};
pub use printpanel_core::{ChannelError, CommitMode, Offset, OffsetAxis, OffsetError};
pub use printpanel_settings::{Config, SettingsManager};
pub use printpanel_ui::{CalibrationScreen, PageRegistry, SettingsScreen};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Logs go to stderr so they never mix with console output. `RUST_LOG`
/// takes precedence over `default_level`. With `json` set, each event is
/// written as one JSON object per line.
pub fn init_logging(default_level: &str, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow::anyhow!("invalid log level {:?}: {}", default_level, e))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();
        registry.with(fmt_layer).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
