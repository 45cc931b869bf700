//! Fundamental types for the mint auditor.
//!
//! This crate defines the values shared by every other crate in the workspace:
//! stable-unit and reserve amounts, transaction identifiers, and the top-level
//! error type.

pub mod amount;
pub mod error;
pub mod hash;

pub use amount::{MobUsdAmount, RsvAmount};
pub use error::AuditorError;
pub use hash::{RsvHash, TxoId};
