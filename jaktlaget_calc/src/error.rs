//! Error types for the calculator library.

use thiserror::Error;

/// Result alias used across the calculator.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised when a scenario cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A percentage was NaN, infinite or outside `[0, 100]`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Region key not present in the license table.
    #[error("unknown region '{0}' (expected one of NORDEN, SE, NO, DK, FI)")]
    UnknownRegion(String),

    /// Only the two published price tiers are accepted.
    #[error("unknown price tier {0} kr (expected 19 or 49)")]
    UnknownPriceTier(u32),
}
