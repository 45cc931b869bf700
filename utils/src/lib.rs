//! Shared utilities for the mint auditor.

pub mod logging;

pub use logging::{init_logging, LogFormat, LogFormatError};
