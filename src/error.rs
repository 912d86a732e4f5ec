use thiserror::Error;

/// Errors raised by the sampling operations.
///
/// Everything except [`Error::WeightedScanExhausted`] is an invalid argument
/// supplied by the caller. Validation always runs before the random source is
/// touched, so a failed call never consumes a draw.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The lower bound of an inclusive range is greater than the upper bound.
    #[error("min must be less than or equal to max")]
    InvertedBounds,
    /// A floating-point bound is NaN or infinite.
    #[error("bounds must be finite")]
    NonFiniteBound,
    /// The container or iterable has no elements.
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    /// A weighted collection holds a missing entry.
    #[error("choices cannot contain absent elements (index {index})")]
    AbsentChoice { index: usize },
    /// A choice carries a negative or NaN weight.
    #[error("choice at index {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },
    /// Every weight is zero.
    #[error("total weight must be positive, got {0}")]
    NonPositiveTotalWeight(f64),
    /// The weights sum to infinity.
    #[error("total weight must be finite, got {0}")]
    NonFiniteTotalWeight(f64),
    /// The weighted scan walked past the last choice. Only reachable when the
    /// collection yields different choices on its second pass.
    #[error("weighted scan ran past the last choice")]
    WeightedScanExhausted,
}

impl Error {
    /// Whether the error was caused by the arguments of the call.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Error::WeightedScanExhausted)
    }
}

/// A type alias for `Result<T, randoms::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[test]
fn test_invalid_argument_kind() {
    assert!(Error::InvertedBounds.is_invalid_argument());
    assert!(Error::Empty("array").is_invalid_argument());
    assert!(Error::AbsentChoice { index: 2 }.is_invalid_argument());
    assert!(!Error::WeightedScanExhausted.is_invalid_argument());

    assert_eq!(Error::Empty("list").to_string(), "list cannot be empty");
    assert_eq!(
        Error::InvalidWeight { index: 1, weight: -0.5 }.to_string(),
        "choice at index 1 has invalid weight -0.5"
    );
}
