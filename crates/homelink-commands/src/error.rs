//! Error types for the command namespace.

use thiserror::Error;

use crate::commands::EncodingMode;
use crate::namespace::NodeId;

/// Errors that can occur when working with the command namespace.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// A received command byte is not in the active node's table.
    #[error("unknown command code 0x{code:02X} for {node} in {mode:?} mode")]
    UnknownCode {
        /// The node whose table was consulted.
        node: NodeId,
        /// The encoding mode in effect.
        mode: EncodingMode,
        /// The unmatched byte.
        code: u8,
    },
}

/// Result type alias for namespace operations.
pub type CommandResult<T> = Result<T, CommandError>;
