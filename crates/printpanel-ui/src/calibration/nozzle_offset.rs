//! Nozzle offset page: sets the Z-probe offset with `M851`

use super::{AxisWiring, OffsetAction, PageResponse};
use crate::controls::{ConfirmationDialog, OffsetDisplay, OffsetInput};
use printpanel_communication::SharedChannel;
use printpanel_core::{Offset, OffsetAxis};
use std::rc::Rc;
use tracing::info;

/// Registry id and log name of the page
pub const PAGE_ID: &str = "nozzle_offset";
/// Spin box holding the offset to add
pub const INPUT: &str = "nozzle_offset_input";
/// Label showing the accumulated probe offset
pub const DISPLAY: &str = "current_nozzle_offset";

/// Control handles for the page; `None` marks a control the toolkit could not provide
#[derive(Default)]
pub struct NozzleOffsetControls {
    /// Spin box named [`INPUT`]
    pub input: Option<Box<dyn OffsetInput>>,
    /// Label named [`DISPLAY`]
    pub display: Option<Box<dyn OffsetDisplay>>,
}

/// Buttons on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NozzleOffsetAction {
    /// Add the entered value to the probe offset and save it
    Set,
    /// Return to the main calibration page
    Back,
}

/// Page adjusting the Z-probe offset
///
/// Entries are additive: each commit sends the running total, so entering
/// `0.1` twice leaves the probe at `0.20 mm`.
pub struct NozzleOffsetPage {
    set: OffsetAction,
    dialog: Rc<dyn ConfirmationDialog>,
}

impl NozzleOffsetPage {
    /// Wire the page; a missing control disables the set action
    pub fn new(
        channel: &SharedChannel,
        dialog: Rc<dyn ConfirmationDialog>,
        controls: NozzleOffsetControls,
    ) -> Self {
        let set = OffsetAction::assemble(
            PAGE_ID,
            AxisWiring {
                axis: OffsetAxis::ZProbe,
                input: controls.input,
                input_name: INPUT,
                display: controls.display,
                display_name: DISPLAY,
            },
            channel,
        );
        Self { set, dialog }
    }

    /// Press a button on the page
    pub fn activate(&mut self, action: NozzleOffsetAction) -> PageResponse {
        match action {
            NozzleOffsetAction::Set => self.set.run(PAGE_ID, self.dialog.as_ref()),
            NozzleOffsetAction::Back => {
                info!("Returning to main calibration page from {}", PAGE_ID);
                PageResponse::NavigateBack
            }
        }
    }

    /// Whether the action can do anything
    pub fn is_enabled(&self, action: NozzleOffsetAction) -> bool {
        match action {
            NozzleOffsetAction::Set => self.set.is_enabled(),
            NozzleOffsetAction::Back => true,
        }
    }

    /// Accumulated probe offset, if the set action is wired
    pub fn current_offset(&self) -> Option<Offset> {
        self.set.controller().map(|controller| controller.current())
    }
}
