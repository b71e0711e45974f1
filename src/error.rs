use alloc::string::String;

use thiserror::Error;

/// Error type for matcher construction.
///
/// Matching itself never fails with an error: a mismatch is reported through
/// [`Cursor::is_success`](crate::Cursor::is_success).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid character interval: {low:?} is greater than {high:?}")]
    InvalidInterval { low: char, high: char },
    #[error("invalid repeat bounds: minimum {min} is greater than maximum {max}")]
    InvalidRepeatBounds { min: u32, max: u32 },
    #[error("malformed repeat bounds {0:?}: expected `min:max` where both sides are optional non-negative integers")]
    MalformedRepeatBounds(String),
}
