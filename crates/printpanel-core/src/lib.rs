//! # PrintPanel Core
//!
//! Core types and utilities for PrintPanel.
//! Provides calibration offsets, unit formatting, shared-state aliases and
//! the error taxonomy used by every other crate.

pub mod error;
pub mod offset;
pub mod types;
pub mod units;

pub use error::{ChannelError, OffsetError};
pub use offset::{CommitMode, Offset, OffsetAxis};
pub use types::{shared, Shared};
