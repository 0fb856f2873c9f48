//! HomeLink Command Namespace
//!
//! This crate is the single source of truth for the one-byte command codes
//! exchanged between the HomeLink controller and its nodes (basement,
//! garage, bedroom) over their serial links. Both ends of a link must be
//! built against the same table, so the tables live here and nowhere else.
//!
//! # Protocol Overview
//!
//! A command is a single unescaped byte on the wire, optionally followed by
//! a value payload (see the `homelink-serial` crate). Two mutually exclusive
//! code spaces exist, selected per build:
//!
//! - **Numeric-compact**: small arbitrary byte values for production links.
//! - **ASCII-debug**: every code is a printable character so a human can
//!   drive a node from a serial terminal.
//!
//! The encoding mode is modeled as [`EncodingMode`] and every lookup is
//! parameterized over it, so the two tables cannot be mixed in one build.
//!
//! # Known defect
//!
//! Codes are unique within one node's table, but not across nodes: in
//! ASCII-debug mode, controller `setBedroomSetPoint` and basement
//! `requestFurnaceStatus` are both `'B'`. [`cross_namespace_collisions`]
//! reports these overlaps so a deployment can scope each stream to one
//! namespace instead of relying on accidental non-collision.
//!
//! # Example
//!
//! ```rust,ignore
//! use homelink_commands::{BasementCommand, EncodingMode, Namespace, NodeId};
//!
//! // Sender side: encode a command byte.
//! let byte = BasementCommand::RequestTemp.code(EncodingMode::AsciiDebug);
//!
//! // Receiver side: the dispatch loop looks the byte up again.
//! let ns = Namespace::new(NodeId::Basement, EncodingMode::AsciiDebug);
//! let cmd = ns.decode(byte)?;
//! ```

pub mod codes;
mod commands;
mod error;
mod namespace;

pub use commands::*;
pub use error::*;
pub use namespace::*;
