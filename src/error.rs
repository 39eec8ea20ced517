// src/error.rs

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumUtilError {
    #[error("{operation} is undefined for {value}")]
    InvalidArgument { operation: &'static str, value: i64 },

    #[error("{operation} divides by zero")]
    DivisionByZero { operation: &'static str },

    #[error("{operation} overflows at {value}")]
    Overflow { operation: &'static str, value: i64 },
}

pub type Result<T> = std::result::Result<T, NumUtilError>;

/// Rejects negative input for operations defined only on n >= 0.
pub(crate) fn require_non_negative(operation: &'static str, n: i32) -> Result<()> {
    if n < 0 {
        return Err(NumUtilError::InvalidArgument { operation, value: n as i64 });
    }
    Ok(())
}
