//! Firmware command creation
//!
//! Static mapping from an offset axis to the command that sets it, plus the
//! fixed maintenance sequences. Nothing here is configurable at runtime.

use printpanel_core::{Offset, OffsetAxis};

/// Persist the current settings to non-volatile storage
pub const SAVE_SETTINGS: &str = "M500";

/// Reset settings to the firmware's compiled-in defaults
pub const RESTORE_FACTORY_SETTINGS: &str = "M502";

/// Restart the firmware on the controller board
pub const FIRMWARE_RESTART: &str = "FIRMWARE_RESTART";

/// Restart the host-side firmware process
pub const HOST_RESTART: &str = "RESTART";

/// Tool index whose offset is calibrated relative to tool 0
pub const OFFSET_TOOL: u8 = 1;

/// Builds offset command sequences from the static table
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetCommandTable;

impl OffsetCommandTable {
    /// The set-offset command for `axis`
    ///
    /// | Axis | Command |
    /// |---|---|
    /// | Z probe | `M851 Z<v>` |
    /// | Tool X/Y/Z | `M218 T1 X<v>` / `Y<v>` / `Z<v>` |
    pub fn set_offset(axis: OffsetAxis, offset: Offset) -> String {
        let value = offset.command_value();
        match axis {
            OffsetAxis::ZProbe => format!("M851 Z{}", value),
            OffsetAxis::ToolX | OffsetAxis::ToolY | OffsetAxis::ToolZ => {
                format!("M218 T{} {}{}", OFFSET_TOOL, axis.letter(), value)
            }
        }
    }

    /// Set-offset command followed by the unconditional save
    pub fn sequence(axis: OffsetAxis, offset: Offset) -> Vec<String> {
        vec![Self::set_offset(axis, offset), SAVE_SETTINGS.to_string()]
    }
}

/// Sequence that restores default print settings and restarts the firmware
pub fn restore_defaults_sequence() -> Vec<String> {
    [
        RESTORE_FACTORY_SETTINGS,
        SAVE_SETTINGS,
        FIRMWARE_RESTART,
        HOST_RESTART,
    ]
    .iter()
    .map(|command| command.to_string())
    .collect()
}
