//! The byte source abstraction the decoder polls.
//!
//! The decoder never talks to a serial port directly; it polls a
//! [`ByteSource`] one byte at a time. There is no buffering, no peek-ahead,
//! and no pushback: once a byte is consumed it cannot be reinspected, and a
//! source must be exclusively owned for the duration of a decode call.

use std::collections::VecDeque;

use bytes::{Buf, Bytes, BytesMut};

/// A non-blocking, single-reader byte source.
pub trait ByteSource {
    /// Try to read one byte; `None` means no data is available right now.
    fn try_read(&mut self) -> Option<u8>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn try_read(&mut self) -> Option<u8> {
        (**self).try_read()
    }
}

/// A `Bytes` buffer drained front to back; empty forever once exhausted.
impl ByteSource for Bytes {
    fn try_read(&mut self) -> Option<u8> {
        if self.has_remaining() {
            Some(self.get_u8())
        } else {
            None
        }
    }
}

impl ByteSource for BytesMut {
    fn try_read(&mut self) -> Option<u8> {
        if self.has_remaining() {
            Some(self.get_u8())
        } else {
            None
        }
    }
}

/// A scripted source for tests and replay.
///
/// Each slot is either a byte or a gap (one empty poll), so a script can
/// model a slow sender and exercise the decoder's attempt budget.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    slots: VecDeque<Option<u8>>,
}

impl ScriptedSource {
    /// Create an empty source (every poll reports no data).
    pub fn new() -> Self {
        ScriptedSource::default()
    }

    /// Create a source preloaded with `data`, available back to back.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut source = ScriptedSource::new();
        source.push_bytes(data);
        source
    }

    /// Append bytes to the script.
    pub fn push_bytes(&mut self, data: &[u8]) {
        self.slots.extend(data.iter().copied().map(Some));
    }

    /// Append `polls` empty polls to the script.
    pub fn push_silence(&mut self, polls: usize) {
        self.slots.extend(std::iter::repeat(None).take(polls));
    }

    /// Bytes and gaps not yet consumed.
    pub fn remaining(&self) -> usize {
        self.slots.len()
    }
}

impl ByteSource for ScriptedSource {
    fn try_read(&mut self) -> Option<u8> {
        self.slots.pop_front().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_source_drains() {
        let mut source = Bytes::from_static(b"ab");
        assert_eq!(source.try_read(), Some(b'a'));
        assert_eq!(source.try_read(), Some(b'b'));
        assert_eq!(source.try_read(), None);
        assert_eq!(source.try_read(), None);
    }

    #[test]
    fn test_scripted_source_gaps() {
        let mut source = ScriptedSource::new();
        source.push_bytes(b"1");
        source.push_silence(2);
        source.push_bytes(b"2");

        assert_eq!(source.try_read(), Some(b'1'));
        assert_eq!(source.try_read(), None);
        assert_eq!(source.try_read(), None);
        assert_eq!(source.try_read(), Some(b'2'));
        assert_eq!(source.try_read(), None);
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        let mut source = ScriptedSource::from_bytes(b"x");
        let mut by_ref = &mut source;
        assert_eq!(by_ref.try_read(), Some(b'x'));
    }
}
