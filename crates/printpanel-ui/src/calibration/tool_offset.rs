//! Tool offset page
//!
//! Sets the X, Y and Z offsets of the second extruder relative to the first
//! with `M218 T1`. Each axis has its own spin box, label and set button and
//! is wired independently: losing one axis' controls disables only that
//! axis.

use super::{AxisWiring, OffsetAction, PageResponse};
use crate::controls::{ConfirmationDialog, OffsetDisplay, OffsetInput};
use printpanel_communication::SharedChannel;
use printpanel_core::{Offset, OffsetAxis};
use std::rc::Rc;
use tracing::info;

/// Registry id and log name of the page
pub const PAGE_ID: &str = "tool_offset";

// Spin boxes and labels, one of each per axis
pub const X_INPUT: &str = "tool_offset_x_input";
pub const Y_INPUT: &str = "tool_offset_y_input";
pub const Z_INPUT: &str = "tool_offset_z_input";
pub const X_DISPLAY: &str = "current_tool_offset_x";
pub const Y_DISPLAY: &str = "current_tool_offset_y";
pub const Z_DISPLAY: &str = "current_tool_offset_z";

/// Control handles for one axis
#[derive(Default)]
pub struct AxisControls {
    /// Spin box holding the new offset
    pub input: Option<Box<dyn OffsetInput>>,
    /// Label showing the last committed offset
    pub display: Option<Box<dyn OffsetDisplay>>,
}

/// Control handles for the page
#[derive(Default)]
pub struct ToolOffsetControls {
    pub x: AxisControls,
    pub y: AxisControls,
    pub z: AxisControls,
}

/// Buttons on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOffsetAction {
    /// Replace the X offset with the entered value
    SetX,
    /// Replace the Y offset with the entered value
    SetY,
    /// Replace the Z offset with the entered value
    SetZ,
    /// Return to the main calibration page
    Back,
}

impl ToolOffsetAction {
    /// Axis committed by a set action; `None` for `Back`
    pub fn axis(self) -> Option<OffsetAxis> {
        match self {
            Self::SetX => Some(OffsetAxis::ToolX),
            Self::SetY => Some(OffsetAxis::ToolY),
            Self::SetZ => Some(OffsetAxis::ToolZ),
            Self::Back => None,
        }
    }
}

/// Page setting the second tool's offsets; each entry replaces the axis' value
pub struct ToolOffsetPage {
    x: OffsetAction,
    y: OffsetAction,
    z: OffsetAction,
    dialog: Rc<dyn ConfirmationDialog>,
}

fn wiring<'a>(
    axis: OffsetAxis,
    controls: AxisControls,
    input_name: &'a str,
    display_name: &'a str,
) -> AxisWiring<'a> {
    AxisWiring {
        axis,
        input: controls.input,
        input_name,
        display: controls.display,
        display_name,
    }
}

impl ToolOffsetPage {
    /// Wire each axis independently
    pub fn new(
        channel: &SharedChannel,
        dialog: Rc<dyn ConfirmationDialog>,
        controls: ToolOffsetControls,
    ) -> Self {
        let ToolOffsetControls { x, y, z } = controls;
        Self {
            x: OffsetAction::assemble(
                PAGE_ID,
                wiring(OffsetAxis::ToolX, x, X_INPUT, X_DISPLAY),
                channel,
            ),
            y: OffsetAction::assemble(
                PAGE_ID,
                wiring(OffsetAxis::ToolY, y, Y_INPUT, Y_DISPLAY),
                channel,
            ),
            z: OffsetAction::assemble(
                PAGE_ID,
                wiring(OffsetAxis::ToolZ, z, Z_INPUT, Z_DISPLAY),
                channel,
            ),
            dialog,
        }
    }

    fn action(&self, axis: OffsetAxis) -> Option<&OffsetAction> {
        match axis {
            OffsetAxis::ToolX => Some(&self.x),
            OffsetAxis::ToolY => Some(&self.y),
            OffsetAxis::ToolZ => Some(&self.z),
            OffsetAxis::ZProbe => None,
        }
    }

    /// Press a button on the page
    pub fn activate(&mut self, action: ToolOffsetAction) -> PageResponse {
        let dialog = self.dialog.as_ref();
        match action {
            ToolOffsetAction::SetX => self.x.run(PAGE_ID, dialog),
            ToolOffsetAction::SetY => self.y.run(PAGE_ID, dialog),
            ToolOffsetAction::SetZ => self.z.run(PAGE_ID, dialog),
            ToolOffsetAction::Back => {
                info!("Returning to main calibration page from {}", PAGE_ID);
                PageResponse::NavigateBack
            }
        }
    }

    /// Whether the action can do anything; `Back` always can
    pub fn is_enabled(&self, action: ToolOffsetAction) -> bool {
        match action.axis() {
            Some(axis) => self.action(axis).is_some_and(OffsetAction::is_enabled),
            None => true,
        }
    }

    /// Last committed offset for a tool axis, if that axis is wired
    pub fn current_offset(&self, axis: OffsetAxis) -> Option<Offset> {
        self.action(axis)
            .and_then(OffsetAction::controller)
            .map(|controller| controller.current())
    }
}
