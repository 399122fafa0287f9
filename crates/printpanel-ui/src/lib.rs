//! # PrintPanel UI
//!
//! Toolkit-neutral pages for PrintPanel. Pages talk to widgets only through
//! the traits in [`controls`], so a GUI toolkit or the console front-end can
//! drive the same calibration logic.

pub mod calibration;
pub mod controls;
pub mod screen;
pub mod settings_screen;

pub use calibration::{
    input_control_name, AxisControls, CalibrationPage, CommitOutcome, NozzleOffsetAction,
    NozzleOffsetControls, NozzleOffsetPage, OffsetControls, OffsetController, PageAction,
    PageResponse, ToolOffsetAction, ToolOffsetControls, ToolOffsetPage,
};
pub use controls::{
    ConfirmationDialog, HeadlessDialog, LabelDisplay, OffsetDisplay, OffsetInput, SpinBoxInput,
    ZERO_ENTRY,
};
pub use screen::{
    page_title, CalibrationScreen, ControlFactory, PageContext, PageEntry, PageRegistry,
    ScreenError, ScreenPage,
};
pub use settings_screen::{RestoreOutcome, SettingsScreen, RESTORE_PRINT_SETTINGS_PROMPT};
