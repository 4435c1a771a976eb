use thiserror::Error;

/// Domain errors raised by the compute engine.
///
/// All variants describe inputs outside an operation's documented domain.
/// They are recoverable by the caller and are never written to the
/// operation log.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("exponent must be >= 0, got {0}")]
    NegativeExponent(i64),

    #[error("n must be >= 0, got {0}")]
    NegativeArgument(i64),

    #[error("exponent {0} exceeds the supported range")]
    ExponentOutOfRange(i64),
}
