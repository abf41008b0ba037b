//! Error types for the `console_life` crate.
//!
//! Every fallible operation in the library returns [`Error`] through the
//! [`Result`] alias. Nothing in the library terminates the process; the
//! entry point decides what to do with a failure.

/// Errors raised while configuring a simulation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested board size is zero or negative.
    #[error("grid size must be positive, got {0}")]
    NonPositiveSize(i64),

    /// The requested number of coordinate pairs is negative.
    #[error("coordinate pair count must not be negative, got {0}")]
    NegativeCount(i64),

    /// A value could not be parsed as an integer.
    #[error("unable to read {what}: {input:?} is not an integer")]
    Malformed {
        /// Which value was being read.
        what: String,
        /// The offending text.
        input: String,
    },

    /// Input ended before a value was supplied.
    #[error("unable to read {what}: unexpected end of input")]
    UnexpectedEof {
        /// Which value was being read.
        what: String,
    },

    /// A seed coordinate lies outside the board.
    #[error("supplied coordinate ({row}, {col}) is out of bounds for size {size}")]
    OutOfBounds {
        row: i64,
        col: i64,
        size: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
