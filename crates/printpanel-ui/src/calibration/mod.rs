//! Calibration pages
//!
//! Each page is assembled once from optional control handles. An action
//! whose controls are all present owns an [`OffsetController`]; an action
//! missing a control is disabled at construction and ignores activations.

pub mod controller;
pub mod nozzle_offset;
pub mod tool_offset;

pub use controller::{CommitOutcome, OffsetControls, OffsetController};
pub use nozzle_offset::{NozzleOffsetAction, NozzleOffsetControls, NozzleOffsetPage};
pub use tool_offset::{AxisControls, ToolOffsetAction, ToolOffsetControls, ToolOffsetPage};

use crate::controls::{ConfirmationDialog, OffsetDisplay, OffsetInput};
use printpanel_communication::SharedChannel;
use printpanel_core::{OffsetAxis, OffsetError};
use tracing::{debug, error, info};

/// What happened when a page action was activated
#[derive(Debug, Clone, PartialEq)]
pub enum PageResponse {
    /// The offset was sent and the display updated
    Committed(CommitOutcome),
    /// The commit failed; the user has been shown the error
    Failed(OffsetError),
    /// The action is disabled or does not exist on this page
    Ignored,
    /// The page asks to return to the main calibration page
    NavigateBack,
}

/// Toolkit-neutral page action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Commit the entry for an axis
    Set(OffsetAxis),
    /// Leave the page
    Back,
}

/// Name of the input control for an axis
pub fn input_control_name(axis: OffsetAxis) -> &'static str {
    match axis {
        OffsetAxis::ZProbe => nozzle_offset::INPUT,
        OffsetAxis::ToolX => tool_offset::X_INPUT,
        OffsetAxis::ToolY => tool_offset::Y_INPUT,
        OffsetAxis::ToolZ => tool_offset::Z_INPUT,
    }
}

/// A set action that is either wired to a controller or disabled
pub(crate) enum OffsetAction {
    Ready(OffsetController),
    Disabled(OffsetError),
}

/// One axis' control handles and their names, as handed to a page
pub(crate) struct AxisWiring<'a> {
    pub axis: OffsetAxis,
    pub input: Option<Box<dyn OffsetInput>>,
    pub input_name: &'a str,
    pub display: Option<Box<dyn OffsetDisplay>>,
    pub display_name: &'a str,
}

impl OffsetAction {
    pub(crate) fn assemble(page: &str, wiring: AxisWiring<'_>, channel: &SharedChannel) -> Self {
        match (wiring.input, wiring.display) {
            (Some(input), Some(display)) => Self::Ready(OffsetController::new(
                wiring.axis,
                channel.clone(),
                OffsetControls { input, display },
            )),
            (input, _) => {
                let missing = if input.is_none() {
                    wiring.input_name
                } else {
                    wiring.display_name
                };
                let err = OffsetError::missing_control(page, missing);
                error!("{}; {} offset action disabled", err, wiring.axis);
                Self::Disabled(err)
            }
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub(crate) fn controller(&self) -> Option<&OffsetController> {
        match self {
            Self::Ready(controller) => Some(controller),
            Self::Disabled(_) => None,
        }
    }

    pub(crate) fn run(&mut self, page: &str, dialog: &dyn ConfirmationDialog) -> PageResponse {
        let controller = match self {
            Self::Ready(controller) => controller,
            Self::Disabled(reason) => {
                debug!("{}: activation ignored ({})", page, reason);
                return PageResponse::Ignored;
            }
        };

        match controller.commit() {
            Ok(outcome) => {
                info!(
                    "{}: {} offset now {}",
                    page,
                    outcome.axis,
                    outcome.displayed.display_text()
                );
                PageResponse::Committed(outcome)
            }
            Err(err) => {
                error!("{}: failed to set {} offset: {}", page, controller.axis(), err);
                dialog.warning_ok(&format!(
                    "Error setting {} offset: {}",
                    controller.axis(),
                    err
                ));
                PageResponse::Failed(err)
            }
        }
    }
}

/// A page built from the calibration registry
pub enum CalibrationPage {
    /// Nozzle probe offset page
    NozzleOffset(NozzleOffsetPage),
    /// Second tool offset page
    ToolOffset(ToolOffsetPage),
}

impl CalibrationPage {
    /// Route a toolkit-neutral action to the page
    pub fn dispatch(&mut self, action: PageAction) -> PageResponse {
        match self {
            Self::NozzleOffset(page) => match action {
                PageAction::Set(OffsetAxis::ZProbe) => page.activate(NozzleOffsetAction::Set),
                PageAction::Set(_) => PageResponse::Ignored,
                PageAction::Back => page.activate(NozzleOffsetAction::Back),
            },
            Self::ToolOffset(page) => match action {
                PageAction::Set(OffsetAxis::ToolX) => page.activate(ToolOffsetAction::SetX),
                PageAction::Set(OffsetAxis::ToolY) => page.activate(ToolOffsetAction::SetY),
                PageAction::Set(OffsetAxis::ToolZ) => page.activate(ToolOffsetAction::SetZ),
                PageAction::Set(OffsetAxis::ZProbe) => PageResponse::Ignored,
                PageAction::Back => page.activate(ToolOffsetAction::Back),
            },
        }
    }

    /// Axes this page can commit
    pub fn axes(&self) -> &'static [OffsetAxis] {
        match self {
            Self::NozzleOffset(_) => &[OffsetAxis::ZProbe],
            Self::ToolOffset(_) => &[OffsetAxis::ToolX, OffsetAxis::ToolY, OffsetAxis::ToolZ],
        }
    }
}
