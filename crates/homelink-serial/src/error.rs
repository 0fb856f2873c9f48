//! Error types for serial value decoding.

use thiserror::Error;

/// Errors that can occur while decoding a value from the byte stream.
///
/// Timeout is the only failure kind. Malformed or unexpected bytes are
/// absorbed silently rather than rejected: the physical link is noisy and
/// the protocol is deliberately tolerant of line noise. A timeout never
/// terminates the process, only the current exchange; retrying is the
/// dispatch collaborator's call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// No terminating byte arrived within the poll attempt budget.
    #[error("timed out after {attempts} poll attempts")]
    Timeout {
        /// Poll attempts consumed before giving up.
        attempts: u32,
    },
}

/// Result type alias for decode operations.
pub type SerialResult<T> = Result<T, SerialError>;
