use mint_auditor_types::AuditorError;
use thiserror::Error;

use crate::validation::Finding;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("malformed transaction pair JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("leg convention violated: {0}")]
    Convention(Finding),

    #[error(transparent)]
    Auditor(#[from] AuditorError),
}

/// A pair type string that is neither `"mint"` nor `"burn"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown pair type {0:?}, expected \"mint\" or \"burn\"")]
pub struct PairTypeError(pub String);
