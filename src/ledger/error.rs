use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The underlying storage engine failed: disk full, file locked,
    /// permission denied. Surfaced to the caller, never retried here.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] fjall::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation log accessed before initialize()")]
    NotInitialized,

    #[error("invalid record key in operation log")]
    InvalidKey,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
