//! Calibration offsets
//!
//! An [`Offset`] is a signed length in millimetres that has already been
//! validated and rounded to two decimals. Rounding happens once, at
//! construction: the parsed `f64` is scaled by 100, rounded half away from
//! zero with [`f64::round`], and scaled back. Because the rule operates on the
//! binary value, `"1.005"` (stored as 1.00499...) becomes `1.0` while
//! `"0.125"` (exact in binary) becomes `0.13`.

use crate::error::OffsetError;
use crate::units;
use std::fmt;
use std::str::FromStr;

/// Axis an offset applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetAxis {
    /// Nozzle Z-probe offset
    ZProbe,
    /// Second tool X offset
    ToolX,
    /// Second tool Y offset
    ToolY,
    /// Second tool Z offset
    ToolZ,
}

impl OffsetAxis {
    /// All axes, in page order
    pub const ALL: [OffsetAxis; 4] = [Self::ZProbe, Self::ToolX, Self::ToolY, Self::ToolZ];

    /// Firmware axis letter used in the set-offset command
    pub fn letter(self) -> char {
        match self {
            Self::ZProbe | Self::ToolZ => 'Z',
            Self::ToolX => 'X',
            Self::ToolY => 'Y',
        }
    }

    /// How a commit on this axis reconciles the displayed value
    ///
    /// The probe offset accumulates; tool offsets are replaced.
    pub fn default_mode(self) -> CommitMode {
        match self {
            Self::ZProbe => CommitMode::Additive,
            Self::ToolX | Self::ToolY | Self::ToolZ => CommitMode::Replacing,
        }
    }
}

impl fmt::Display for OffsetAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZProbe => write!(f, "Z Probe"),
            Self::ToolX => write!(f, "Tool X"),
            Self::ToolY => write!(f, "Tool Y"),
            Self::ToolZ => write!(f, "Tool Z"),
        }
    }
}

/// Display reconciliation rule applied after a successful commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// New entries accumulate onto the displayed value
    Additive,
    /// New entries overwrite the displayed value
    Replacing,
}

impl CommitMode {
    /// Compute the value to display after committing `entered`
    ///
    /// Returns `None` when accumulation leaves the representable range.
    pub fn reconcile(self, previous: Offset, entered: Offset) -> Option<Offset> {
        match self {
            Self::Additive => previous.checked_add(entered),
            Self::Replacing => Some(entered),
        }
    }
}

impl fmt::Display for CommitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Additive => write!(f, "additive"),
            Self::Replacing => write!(f, "replacing"),
        }
    }
}

/// A validated offset in millimetres, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Offset(f64);

impl Offset {
    /// The zero offset every page starts from
    pub const ZERO: Offset = Offset(0.0);

    /// Parse user input into an offset
    pub fn parse(raw: &str) -> Result<Self, OffsetError> {
        let value =
            units::parse_length(raw).map_err(|reason| OffsetError::invalid_input(raw, reason))?;
        Self::from_mm(value).ok_or_else(|| OffsetError::invalid_input(raw, "value out of range"))
    }

    /// Round a millimetre value into an offset
    ///
    /// Returns `None` for NaN or values whose scaled form overflows.
    pub fn from_mm(value: f64) -> Option<Self> {
        let rounded = (value * 100.0).round() / 100.0;
        if !rounded.is_finite() {
            return None;
        }
        // Fold -0.0 into 0.0 so it never renders as "-0.00".
        Some(Self(rounded + 0.0))
    }

    /// Value in millimetres
    pub fn mm(self) -> f64 {
        self.0
    }

    /// Sum of two offsets, re-rounded
    pub fn checked_add(self, other: Offset) -> Option<Offset> {
        Self::from_mm(self.0 + other.0)
    }

    /// Number as written into a firmware command (`1.0`, `-0.25`)
    pub fn command_value(self) -> String {
        units::format_gcode_number(self.0)
    }

    /// Text shown on a display control (`1.50 mm`)
    pub fn display_text(self) -> String {
        units::format_length(self.0)
    }
}

impl FromStr for Offset {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text())
    }
}
