//! Errors produced while reading bus notes.

use residua_crt::CrtError;
use thiserror::Error;

/// Errors that can occur while parsing notes or solving a schedule.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The notes did not consist of exactly two non-blank lines.
    #[error("invalid notes: expected 2 lines, got {lines}")]
    InvalidNotes {
        /// Number of non-blank lines found.
        lines: usize,
    },

    /// The earliest departure line is not a non-negative integer.
    #[error("invalid earliest departure {token:?}")]
    InvalidDeparture {
        /// The offending line.
        token: String,
    },

    /// A bus entry is neither a wildcard nor a positive integer.
    #[error("malformed constraint {token:?} at position {position}: {reason}")]
    MalformedConstraint {
        /// Position of the entry in the bus line.
        position: usize,
        /// The offending entry.
        token: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The schedule parsed but has no solution.
    #[error(transparent)]
    Solver(#[from] CrtError),
}
