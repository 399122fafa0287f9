//! Settings screen actions that talk to the printer

use crate::calibration::PageResponse;
use crate::controls::ConfirmationDialog;
use printpanel_communication::{
    dispatch_sequence, restore_defaults_sequence, FailedCommand, SharedChannel,
};
use std::rc::Rc;
use tracing::{error, info};

/// Question asked before restoring print settings
pub const RESTORE_PRINT_SETTINGS_PROMPT: &str =
    "Are you sure you want to restore default print settings?\n\
     Warning: Doing so will erase offsets and bed leveling info";

/// Result of a restore request
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreOutcome {
    /// Every command was sent
    Restored,
    /// The user answered no; nothing was sent
    Declined,
    /// A command failed; later commands were not sent
    Failed(FailedCommand),
}

pub struct SettingsScreen {
    channel: SharedChannel,
    dialog: Rc<dyn ConfirmationDialog>,
}

impl SettingsScreen {
    pub fn new(channel: SharedChannel, dialog: Rc<dyn ConfirmationDialog>) -> Self {
        Self { channel, dialog }
    }

    /// Reset firmware settings to defaults, save them and restart
    ///
    /// Offsets and bed leveling data are lost, so the user is asked first.
    pub fn restore_print_settings(&self) -> RestoreOutcome {
        if !self.dialog.warning_yes_no(RESTORE_PRINT_SETTINGS_PROMPT) {
            info!("Restore of print settings declined");
            return RestoreOutcome::Declined;
        }

        let commands = restore_defaults_sequence();
        info!("Restoring default print settings");
        match dispatch_sequence(&mut *self.channel.borrow_mut(), &commands) {
            Ok(()) => RestoreOutcome::Restored,
            Err(failed) => {
                error!(
                    "Failed to restore print settings at {}: {}",
                    failed.command, failed.error
                );
                self.dialog.warning_ok(&format!(
                    "Error restoring print settings: {} failed: {}",
                    failed.command, failed.error
                ));
                RestoreOutcome::Failed(failed)
            }
        }
    }

    pub fn go_back(&self) -> PageResponse {
        PageResponse::NavigateBack
    }
}
