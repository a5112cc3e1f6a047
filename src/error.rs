use thiserror::Error;

/// Errors surfaced by the calculation engine and its lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Goal input rejected before any computation ran.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A level outside the 1..=126 progression table.
    #[error("prayer level {0} is out of range")]
    LevelOutOfRange(i32),

    /// Shard arithmetic left the representable integer domain.
    #[error("shard calculation overflowed")]
    Overflow,
}
