//! Offset controller
//!
//! Turns the value entered in an offset input into a firmware command
//! sequence, sends it, and only then updates the display and clears the
//! input. A commit is all-or-nothing from the user's point of view: if any
//! command fails the display and input keep their previous state. Commands
//! that already reached the printer are not rolled back.

use crate::controls::{OffsetDisplay, OffsetInput};
use printpanel_communication::{dispatch_sequence, OffsetCommandTable, SharedChannel};
use printpanel_core::{CommitMode, Offset, OffsetAxis, OffsetError};
use tracing::info;

/// Controls an offset controller drives
pub struct OffsetControls {
    /// Entry the offset is read from
    pub input: Box<dyn OffsetInput>,
    /// Field showing the committed offset
    pub display: Box<dyn OffsetDisplay>,
}

/// Result of a successful commit
#[derive(Debug, Clone, PartialEq)]
pub struct CommitOutcome {
    /// Axis the offset was applied to
    pub axis: OffsetAxis,
    /// Reconciliation rule used
    pub mode: CommitMode,
    /// Rounded value that was entered and sent
    pub entered: Offset,
    /// Value now shown on the display
    pub displayed: Offset,
    /// Commands sent, in order
    pub commands: Vec<String>,
}

/// Commits offsets for one axis
pub struct OffsetController {
    axis: OffsetAxis,
    mode: CommitMode,
    current: Offset,
    channel: SharedChannel,
    input: Box<dyn OffsetInput>,
    display: Box<dyn OffsetDisplay>,
}

impl OffsetController {
    /// Create a controller using the axis' own reconciliation rule
    pub fn new(axis: OffsetAxis, channel: SharedChannel, controls: OffsetControls) -> Self {
        Self::with_mode(axis, axis.default_mode(), channel, controls)
    }

    /// Create a controller with an explicit reconciliation rule
    ///
    /// The display starts at `0.00 mm`.
    pub fn with_mode(
        axis: OffsetAxis,
        mode: CommitMode,
        channel: SharedChannel,
        controls: OffsetControls,
    ) -> Self {
        let OffsetControls { input, mut display } = controls;
        display.set_text(&Offset::ZERO.display_text());

        Self {
            axis,
            mode,
            current: Offset::ZERO,
            channel,
            input,
            display,
        }
    }

    /// Axis this controller commits
    pub fn axis(&self) -> OffsetAxis {
        self.axis
    }

    /// Reconciliation rule
    pub fn mode(&self) -> CommitMode {
        self.mode
    }

    /// Value currently shown on the display
    pub fn current(&self) -> Offset {
        self.current
    }

    /// Commit whatever the input control currently holds
    pub fn commit(&mut self) -> Result<CommitOutcome, OffsetError> {
        let raw = self.input.raw_value();
        self.commit_value(&raw)
    }

    /// Commit `raw` as the new offset
    pub fn commit_value(&mut self, raw: &str) -> Result<CommitOutcome, OffsetError> {
        let entered = Offset::parse(raw)?;
        // Reconcile before sending so an out-of-range total never reaches the printer.
        let displayed = self
            .mode
            .reconcile(self.current, entered)
            .ok_or_else(|| OffsetError::invalid_input(raw, "accumulated offset out of range"))?;

        let commands = OffsetCommandTable::sequence(self.axis, entered);
        info!(
            axis = %self.axis,
            mode = %self.mode,
            "Setting {} offset to {} mm",
            self.axis,
            entered.command_value()
        );

        dispatch_sequence(&mut *self.channel.borrow_mut(), &commands)?;

        self.current = displayed;
        self.display.set_text(&displayed.display_text());
        self.input.reset();

        Ok(CommitOutcome {
            axis: self.axis,
            mode: self.mode,
            entered,
            displayed,
            commands,
        })
    }
}
