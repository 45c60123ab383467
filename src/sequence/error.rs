//! Error type for the checked cursor operations.
//!
//! The core cursor operations treat misuse as a precondition violation and do
//! not check for it. The `try_*` counterparts on the protocol traits check the
//! precondition first and report a [`SequenceError`] instead.

use std::fmt;

/// Represents a cursor operation whose precondition did not hold.
///
/// # Examples
///
/// ```rust
/// use flatview::sequence::SequenceError;
///
/// let error = SequenceError::OutOfRange {
///     position: 3,
///     offset: 5,
///     length: 6,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "jump by 5 from position 3 leaves the range 0..=6"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The cursor was already at the end.
    PastEnd {
        /// The operation that was attempted (`"read"`, `"advance"`).
        operation: &'static str,
    },
    /// The cursor was already at the beginning and could not retreat.
    BeforeBegin,
    /// A jump would move the cursor outside `0..=length`.
    OutOfRange {
        /// Offset of the cursor before the jump.
        position: usize,
        /// The requested signed offset.
        offset: isize,
        /// Length of the sequence.
        length: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PastEnd { operation } => {
                write!(formatter, "cannot {operation}: cursor is at the end")
            }
            Self::BeforeBegin => {
                write!(formatter, "cannot retreat: cursor is at the beginning")
            }
            Self::OutOfRange {
                position,
                offset,
                length,
            } => write!(
                formatter,
                "jump by {offset} from position {position} leaves the range 0..={length}"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}
