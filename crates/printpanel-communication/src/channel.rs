//! Printer command channels
//!
//! A [`CommandChannel`] executes one opaque firmware command at a time and
//! reports success or failure. Sequences are dispatched with
//! [`dispatch_sequence`], which stops at the first failed command.

use printpanel_core::{ChannelError, OffsetError, Shared};
use tracing::{debug, warn};

/// A channel that executes firmware commands against the printer
pub trait CommandChannel {
    /// Execute a single command, blocking until the printer host answers
    fn execute(&mut self, command: &str) -> Result<(), ChannelError>;

    /// Short name used in log lines
    fn name(&self) -> &str;
}

/// Channel handle shared by every page on the UI thread
pub type SharedChannel = Shared<dyn CommandChannel>;

/// The command of a sequence that failed, with its cause
#[derive(Debug, Clone, PartialEq)]
pub struct FailedCommand {
    /// Zero-based position in the sequence
    pub index: usize,
    /// Command text
    pub command: String,
    /// Channel failure
    pub error: ChannelError,
}

impl From<FailedCommand> for OffsetError {
    fn from(failed: FailedCommand) -> Self {
        OffsetError::DeviceCommand {
            command: failed.command,
            index: failed.index,
            source: failed.error,
        }
    }
}

/// Send `commands` in order, stopping at the first failure
///
/// Commands after the failing one are never sent. Commands before it have
/// already reached the printer; nothing is rolled back.
pub fn dispatch_sequence<S: AsRef<str>>(
    channel: &mut dyn CommandChannel,
    commands: &[S],
) -> Result<(), FailedCommand> {
    for (index, command) in commands.iter().enumerate() {
        let command = command.as_ref();
        debug!(channel = channel.name(), index, command, "Sending command");
        if let Err(error) = channel.execute(command) {
            warn!(
                channel = channel.name(),
                index,
                command,
                %error,
                skipped = commands.len() - index - 1,
                "Command failed, aborting sequence"
            );
            return Err(FailedCommand {
                index,
                command: command.to_string(),
                error,
            });
        }
    }
    Ok(())
}

/// Channel that accepts every command without contacting a printer
///
/// Used for dry runs; keeps the commands it was given.
#[derive(Debug, Default)]
pub struct NoOpChannel {
    sent: Vec<String>,
}

impl NoOpChannel {
    /// Create a new no-op channel
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, oldest first
    pub fn sent(&self) -> &[String] {
        &self.sent
    }
}

impl CommandChannel for NoOpChannel {
    fn execute(&mut self, command: &str) -> Result<(), ChannelError> {
        debug!("Dry run: {}", command);
        self.sent.push(command.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "dry-run"
    }
}
