use thiserror::Error;

/// Errors surfaced by the PIN strength engine.
///
/// Classification itself never fails: malformed PINs become an `Invalid`
/// verdict and unparseable dates are ignored. These variants exist for the
/// configuration step, date parsing at the caller's boundary and suggestion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PinError {
    #[error("Digit length must be a positive even number no greater than {max}, got {0}", max = crate::service::MAX_DIGIT_LENGTH)]
    InvalidDigitLength(usize),

    #[error("Unparseable date '{0}', expected DD-MM-YYYY")]
    UnparseableDate(String),

    #[error("No strong PIN found after {0} attempts")]
    SuggestionExhausted(usize),
}

/// Result type for engine operations
pub type PinResult<T> = Result<T, PinError>;
