//! Control interfaces
//!
//! Pages never look controls up by name at runtime. A toolkit layer hands
//! each page explicit handles implementing these traits when the page is
//! assembled. The in-memory implementations here are reference-counted
//! handles, like toolkit widgets: clones observe the same state.

use printpanel_core::{shared, Shared};
use tracing::{info, warn};

/// Numeric entry control (spin box) holding the offset to commit
pub trait OffsetInput {
    /// Current entry as text; may not be a valid number
    fn raw_value(&self) -> String;

    /// Put the control back to zero
    fn reset(&mut self);
}

/// Read-only text field showing the committed offset
pub trait OffsetDisplay {
    /// Replace the shown text
    fn set_text(&mut self, text: &str);

    /// Currently shown text
    fn text(&self) -> String;
}

/// Modal dialog used to report failures and ask for confirmation
pub trait ConfirmationDialog {
    /// Show a warning and block until the user acknowledges it
    fn warning_ok(&self, message: &str);

    /// Ask a yes/no question, blocking until answered
    fn warning_yes_no(&self, message: &str) -> bool;
}

/// Text shown by a spin box after it is reset
pub const ZERO_ENTRY: &str = "0.00";

/// In-memory spin box
#[derive(Debug, Clone)]
pub struct SpinBoxInput {
    value: Shared<String>,
}

impl SpinBoxInput {
    /// Create a spin box showing zero
    pub fn new() -> Self {
        Self {
            value: shared(ZERO_ENTRY.to_string()),
        }
    }

    /// Type `text` into the spin box
    pub fn set_raw(&self, text: &str) {
        *self.value.borrow_mut() = text.to_string();
    }
}

impl Default for SpinBoxInput {
    fn default() -> Self {
        Self::new()
    }
}

impl OffsetInput for SpinBoxInput {
    fn raw_value(&self) -> String {
        self.value.borrow().clone()
    }

    fn reset(&mut self) {
        self.set_raw(ZERO_ENTRY);
    }
}

/// In-memory label
#[derive(Debug, Clone, Default)]
pub struct LabelDisplay {
    text: Shared<String>,
}

impl LabelDisplay {
    /// Create an empty label
    pub fn new() -> Self {
        Self::default()
    }
}

impl OffsetDisplay for LabelDisplay {
    fn set_text(&mut self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }

    fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

/// Dialog for unattended runs: logs every message and gives a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct HeadlessDialog {
    answer: bool,
}

impl HeadlessDialog {
    /// Create a dialog that answers every question with `answer`
    pub fn answering(answer: bool) -> Self {
        Self { answer }
    }
}

impl ConfirmationDialog for HeadlessDialog {
    fn warning_ok(&self, message: &str) {
        warn!("{}", message);
    }

    fn warning_yes_no(&self, message: &str) -> bool {
        info!(answer = self.answer, "{}", message);
        self.answer
    }
}
