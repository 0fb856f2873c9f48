//! HomeLink Serial Value Decoding
//!
//! This crate decodes the value payloads that follow a command byte on a
//! HomeLink serial link: floats, signed integers, and booleans, sent as
//! unescaped ASCII and terminated by a single delimiter byte the handler
//! chooses (booleans carry their value in the terminal byte instead).
//!
//! # Protocol Overview
//!
//! The links are single-reader, blocking-poll, and physically noisy, which
//! shapes the whole design:
//!
//! - The decoder polls a non-blocking [`ByteSource`] one byte at a time;
//!   there is no buffering, peeking, or pushback.
//! - Bytes that don't belong to a numeric payload are dropped silently --
//!   noise tolerance, not an omission.
//! - The only failure is [`SerialError::Timeout`], raised when the bounded
//!   poll budget runs out. A timeout is a distinct error variant, so it can
//!   never be confused with a legitimate `0`, `0.0`, or `false` reading.
//!
//! The attempt budgets live in [`PollLimits`] and can be derived from an
//! intended wall-clock timeout via [`PollLimits::from_timeout`].
//!
//! # Example
//!
//! ```rust,ignore
//! use homelink_serial::{ByteSource, ValueDecoder};
//!
//! // `port` is whatever non-blocking byte source the host provides.
//! let mut decoder = ValueDecoder::new(port);
//! let temperature = decoder.read_float(b'\r')?;
//! ```

mod decode;
mod error;
mod source;

pub use decode::*;
pub use error::*;
pub use source::*;
