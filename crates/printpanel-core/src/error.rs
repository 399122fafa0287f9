//! Error handling for PrintPanel
//!
//! Provides error types for all layers of the panel:
//! - Channel errors (transport/firmware failures while executing a command)
//! - Offset errors (user input, device dispatch, construction-time wiring)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Printer command channel error type
///
/// Represents a failure to execute a single command against the printer,
/// whatever the transport.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    /// Transport-level failure (connection refused, broken pipe, DNS...)
    #[error("Transport error: {reason}")]
    Transport {
        /// The reason reported by the transport.
        reason: String,
    },

    /// The printer host answered but refused the command
    #[error("Command rejected (status {status}): {message}")]
    Rejected {
        /// Status code returned by the printer host.
        status: u16,
        /// Body or reason returned with the status.
        message: String,
    },

    /// No answer within the configured timeout
    #[error("Command timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Generic channel error
    #[error("Channel error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Offset calibration error type
///
/// The three failure modes of an offset commit. `InvalidInput` and
/// `DeviceCommand` are user-facing; `MissingControl` is a wiring failure
/// detected when a page is assembled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OffsetError {
    /// The entered value is not a usable number
    #[error("Invalid offset '{input}': {reason}")]
    InvalidInput {
        /// The raw text that was entered.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A command of the sequence failed; later commands were not sent
    #[error("Command {index} '{command}' failed: {source}")]
    DeviceCommand {
        /// The command text that failed.
        command: String,
        /// Zero-based position of the command in its sequence.
        index: usize,
        /// The underlying channel failure.
        #[source]
        source: ChannelError,
    },

    /// A control the action depends on was not provided
    #[error("{page}: required control '{control}' is missing")]
    MissingControl {
        /// The page being assembled.
        page: String,
        /// The missing control's name.
        control: String,
    },
}

impl OffsetError {
    /// Create an invalid input error
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing control error
    pub fn missing_control(page: impl Into<String>, control: impl Into<String>) -> Self {
        Self::MissingControl {
            page: page.into(),
            control: control.into(),
        }
    }
}
