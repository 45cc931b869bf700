//! Mint and burn transaction pairs and their audit logic.
//!
//! A pair ties together the two legs of a single event:
//! - **Mint**: reserve asset (RSV) deposited → stable unit (mobUSD) issued
//! - **Burn**: stable unit (mobUSD) destroyed → reserve asset (RSV) released
//!
//! The wire format does not say which leg shape sits in which slot, so the
//! conventional ordering is checked and reported by [`validation`], never
//! assumed when decoding or totalling.

pub mod error;
pub mod leg;
pub mod pair;
pub mod summary;
pub mod validation;

pub use error::{PairTypeError, TransactionError};
pub use leg::{Leg, LegKind, MobUsdTransaction, RsvTransaction};
pub use pair::{parse_pairs, LegPosition, PairType, TransactionPair};
pub use summary::PairSummary;
pub use validation::{check_pair, validate_pair, Finding, Severity};
