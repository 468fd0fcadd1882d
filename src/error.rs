use thiserror::Error;

/// Top-level error type for the vectis vector math kernel.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience type alias for results using [`VectorError`].
pub type Result<T> = std::result::Result<T, VectorError>;
