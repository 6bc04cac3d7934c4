use thiserror::Error;

use crate::ledger::{AccountId, SplitId, TransactionId};

/// Error type that captures register and ledger access failures.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown account: {0}")]
    UnknownAccount(AccountId),
    #[error("Unknown transaction: {0}")]
    UnknownTransaction(TransactionId),
    #[error("Unknown split: {0}")]
    UnknownSplit(SplitId),
    #[error("Row {0} is outside the loaded register")]
    RowOutOfRange(usize),
    #[error("Register has not been loaded")]
    NotLoaded,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type RegisterResult<T> = Result<T, RegisterError>;
