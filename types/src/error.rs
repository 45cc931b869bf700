//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the mint auditor.
#[derive(Debug, Error)]
pub enum AuditorError {
    #[error("{asset} amount must be finite, got {value}")]
    NonFiniteAmount { asset: &'static str, value: f64 },

    #[error("{asset} amount overflow while adding {addend} to {total}")]
    AmountOverflow {
        asset: &'static str,
        total: f64,
        addend: f64,
    },

    #[error("config error: {0}")]
    Config(String),
}
