//! # PrintPanel Communication
//!
//! Printer command channels and firmware command creation for PrintPanel.
//! Commands reach the printer through an OctoPrint server; a no-op channel
//! stands in for dry runs.

pub mod channel;
pub mod firmware;
pub mod octoprint;

pub use channel::{dispatch_sequence, CommandChannel, FailedCommand, NoOpChannel, SharedChannel};
pub use firmware::{restore_defaults_sequence, OffsetCommandTable};
pub use octoprint::{OctoPrintChannel, OctoPrintConfig, ServerVersion};
