//! # Error Types
//!
//! This module defines the error type shared by every part of the crate.
//!
//! Errors fall into three groups (see [`ErrorKind`]):
//! - **Validation** - malformed tuning, chord or song input the caller can fix
//! - **State** - a write that breaks the tab's protocol (time going backwards,
//!   two notes on one string at once, a string that doesn't exist)
//! - **Configuration** - a writer or fretboard built with impossible settings
//!
//! Nothing is logged or swallowed internally. A failed write leaves the tab
//! exactly as it was before the call.
//!
//! ## Usage
//! ```rust
//! use fretwork::{Tuning, TabError};
//!
//! match Tuning::parse("H4 B3 G3 D3 A2 E2") {
//!     Ok(tuning) => println!("{} strings", tuning.len()),
//!     Err(TabError::InvalidNoteName(name)) => eprintln!("bad note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Broad category of a [`TabError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    State,
    Configuration,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TabError {
    /// Tuning specification with no tokens.
    ///
    /// ```
    /// # use fretwork::TabError;
    /// assert_eq!(TabError::EmptyInput.to_string(), "empty notes");
    /// ```
    #[error("empty notes")]
    EmptyInput,

    /// Tuning token whose last character is not an octave digit.
    ///
    /// ```
    /// # use fretwork::TabError;
    /// let err = TabError::InvalidOctave("EX".to_string());
    /// assert_eq!(err.to_string(), "invalid octave at note: EX");
    /// ```
    #[error("invalid octave at note: {0}")]
    InvalidOctave(String),

    /// Name that doesn't resolve to one of the 12 chromatic pitch classes.
    #[error("invalid note name: {0}")]
    InvalidNoteName(String),

    /// Closest-note search over no candidates.
    #[error("empty notes list")]
    EmptyCollection,

    /// Event scheduled before the tab's current time.
    #[error("note time {time} precedes current time {cursor}")]
    TimeRegression { time: f64, cursor: f64 },

    /// Event time that is NaN, infinite, or too far past the cursor to lay out.
    #[error("note time {0} is out of range")]
    InvalidTime(f64),

    #[error("string {string} is out of range for a {strings}-string tab")]
    InvalidStringIndex { string: usize, strings: usize },

    /// Two simultaneous events on the same string.
    #[error("string {string} is written twice at time {time}")]
    DuplicateStringWrite { string: usize, time: f64 },

    #[error("frets value can not be negative: {0}")]
    InvalidFretCount(i32),

    /// Number of open-string labels or tuning notes doesn't fit the instrument.
    #[error("invalid tuning notes count: expected {expected}, found {found}")]
    TuningMismatch { expected: usize, found: usize },

    #[error("time step must be a positive number, got {0}")]
    InvalidTimeStep(f64),

    #[error("unknown chord: {0}")]
    UnknownChord(String),

    /// Song document that can't be read or deserialized.
    #[error("invalid song: {0}")]
    SongError(String),
}

impl TabError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TabError::EmptyInput
            | TabError::InvalidOctave(_)
            | TabError::InvalidNoteName(_)
            | TabError::EmptyCollection
            | TabError::UnknownChord(_)
            | TabError::SongError(_) => ErrorKind::Validation,
            TabError::TimeRegression { .. }
            | TabError::InvalidTime(_)
            | TabError::InvalidStringIndex { .. }
            | TabError::DuplicateStringWrite { .. } => ErrorKind::State,
            TabError::InvalidFretCount(_)
            | TabError::TuningMismatch { .. }
            | TabError::InvalidTimeStep(_) => ErrorKind::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            TabError::InvalidNoteName("H".to_string()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            TabError::TimeRegression { time: 0.2, cursor: 0.4 }.kind(),
            ErrorKind::State
        );
        assert_eq!(
            TabError::DuplicateStringWrite { string: 1, time: 0.0 }.kind(),
            ErrorKind::State
        );
        assert_eq!(TabError::InvalidFretCount(-1).kind(), ErrorKind::Configuration);
        assert_eq!(
            TabError::TuningMismatch { expected: 6, found: 4 }.kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_error_messages() {
        let err = TabError::InvalidStringIndex { string: 10, strings: 6 };
        assert_eq!(err.to_string(), "string 10 is out of range for a 6-string tab");

        let err = TabError::TimeRegression { time: 0.3, cursor: 0.6 };
        assert_eq!(err.to_string(), "note time 0.3 precedes current time 0.6");
    }
}
