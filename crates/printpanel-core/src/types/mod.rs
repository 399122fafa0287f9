//! Type aliases shared across PrintPanel crates.

pub mod aliases;

pub use aliases::{shared, Shared};
