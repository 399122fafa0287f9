//! Firmware command vocabulary
//!
//! The panel talks to a dual-extruder printer whose firmware accepts the
//! Marlin offset codes (`M851`, `M218`, `M500`, `M502`) plus host-level
//! restart commands.

pub mod commands;

pub use commands::{
    restore_defaults_sequence, OffsetCommandTable, FIRMWARE_RESTART, HOST_RESTART, OFFSET_TOOL,
    RESTORE_FACTORY_SETTINGS, SAVE_SETTINGS,
};
