//! Blocking, timeout-bounded value decoders.
//!
//! Node handlers call these after the dispatch loop has consumed a command
//! byte, to read the trailing value payload: ASCII digits with an optional
//! sign and a single decimal point, terminated by a handler-chosen delimiter
//! byte. The decoders poll the source until the delimiter (or terminal `'0'`
//! / `'1'` for booleans) arrives or the attempt budget runs out.
//!
//! Noise tolerance is deliberate: any byte that is not a digit, sign,
//! decimal point, or the delimiter is dropped without complaint, and only a
//! timeout is reported as an error.

use std::time::Duration;

use log::debug;

use crate::error::{SerialError, SerialResult};
use crate::source::ByteSource;

/// Empty-poll rate measured on the reference link, in polls per second.
///
/// The attempt budgets below are iteration counts, so their wall-clock
/// meaning depends on how fast the caller's loop spins when no data is
/// available. At this rate the defaults work out to roughly six seconds for
/// numeric reads and twelve for booleans.
pub const DEFAULT_POLL_RATE_HZ: u32 = 80_000;

/// Default attempt budget for float and integer reads (~6 s).
pub const DEFAULT_VALUE_ATTEMPTS: u32 = 500_000;

/// Default attempt budget for boolean reads (~12 s).
///
/// Deliberately larger than [`DEFAULT_VALUE_ATTEMPTS`]: a boolean `false` is
/// a real reading, so the budget errs on the side of waiting rather than
/// risk reporting a timeout where a slow sender was about to deliver.
/// Timeout is its own error variant either way, never a sentinel value.
pub const DEFAULT_BOOL_ATTEMPTS: u32 = 1_000_000;

/// Poll attempt budgets for one decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollLimits {
    /// Attempt ceiling for float and integer reads.
    pub value_attempts: u32,
    /// Attempt ceiling for boolean reads.
    pub bool_attempts: u32,
}

impl Default for PollLimits {
    fn default() -> Self {
        PollLimits {
            value_attempts: DEFAULT_VALUE_ATTEMPTS,
            bool_attempts: DEFAULT_BOOL_ATTEMPTS,
        }
    }
}

impl PollLimits {
    /// Derive attempt budgets from an intended wall-clock timeout and a
    /// measured or configured poll rate.
    ///
    /// The boolean budget is twice the value budget, mirroring the defaults.
    pub fn from_timeout(timeout: Duration, poll_rate_hz: u32) -> Self {
        let value_attempts = (timeout.as_secs_f64() * f64::from(poll_rate_hz)) as u32;
        PollLimits {
            value_attempts,
            bool_attempts: value_attempts.saturating_mul(2),
        }
    }
}

/// Decodes typed values from an exclusively-owned byte source.
///
/// Owning the source (or a `&mut` to it) for the decoder's lifetime encodes
/// the protocol's single-reader rule in the type system: interleaving two
/// decode calls on one stream would corrupt both.
///
/// Each decode call is all-or-nothing. The accumulation state (magnitude,
/// decimal scale, sign, attempt counter) is local to the call and discarded
/// at return; nothing persists between calls.
#[derive(Debug)]
pub struct ValueDecoder<S> {
    source: S,
    limits: PollLimits,
}

impl<S: ByteSource> ValueDecoder<S> {
    /// Create a decoder with the default attempt budgets.
    pub fn new(source: S) -> Self {
        ValueDecoder {
            source,
            limits: PollLimits::default(),
        }
    }

    /// Create a decoder with explicit attempt budgets.
    pub fn with_limits(source: S, limits: PollLimits) -> Self {
        ValueDecoder { source, limits }
    }

    /// Read a float terminated by `delimiter`.
    ///
    /// Digits accumulate into the integer part until the first `'.'`, then
    /// into successively smaller decimal places; a second `'.'` is a no-op.
    /// A `'-'` anywhere before the delimiter marks the value negative -- the
    /// sign is applied at finalization, so (non-standard, but long-standing
    /// firmware behavior) a `'-'` arriving *after* digits still negates
    /// them. Everything else is ignored as line noise. A delimiter with no
    /// digits before it yields `0.0`.
    ///
    /// The caller must pick a delimiter that cannot appear inside a valid
    /// numeric payload, e.g. a control character.
    pub fn read_float(&mut self, delimiter: u8) -> SerialResult<f32> {
        let mut magnitude: f32 = 0.0;
        // 0 means the integer part; 10, 100, ... is the divisor for the
        // next fractional digit.
        let mut scale: f32 = 0.0;
        let mut negative = false;
        let mut attempts: u32 = 0;

        loop {
            if attempts > self.limits.value_attempts {
                debug!("float read timed out after {} poll attempts", attempts);
                return Err(SerialError::Timeout { attempts });
            }

            match self.source.try_read() {
                Some(byte) if byte == delimiter => break,
                Some(b'-') => negative = true,
                Some(b'.') => {
                    if scale == 0.0 {
                        scale = 10.0;
                    }
                }
                Some(byte @ b'0'..=b'9') => {
                    let digit = f32::from(byte - b'0');
                    if scale == 0.0 {
                        magnitude = magnitude * 10.0 + digit;
                    } else {
                        magnitude += digit / scale;
                        scale *= 10.0;
                    }
                }
                // Line noise and empty polls alike: skip, but spend budget.
                _ => {}
            }
            attempts += 1;
        }

        if negative {
            magnitude = -magnitude;
        }
        Ok(magnitude)
    }

    /// Read a signed integer terminated by `delimiter`.
    ///
    /// Same framing as [`read_float`](Self::read_float) without decimal
    /// handling. The sign defaults to non-negative; a value only comes back
    /// negative if a `'-'` byte actually arrived before the delimiter. A
    /// delimiter with no digits before it yields `0`.
    ///
    /// Digits are never rejected, so a run longer than `i32` can hold (ten
    /// digits and up) wraps around, matching the firmware's accumulator.
    /// A decode never panics; timeout is the only failure.
    pub fn read_int(&mut self, delimiter: u8) -> SerialResult<i32> {
        let mut magnitude: i32 = 0;
        let mut negative = false;
        let mut attempts: u32 = 0;

        loop {
            if attempts > self.limits.value_attempts {
                debug!("integer read timed out after {} poll attempts", attempts);
                return Err(SerialError::Timeout { attempts });
            }

            match self.source.try_read() {
                Some(byte) if byte == delimiter => break,
                Some(b'-') => negative = true,
                Some(byte @ b'0'..=b'9') => {
                    magnitude = magnitude
                        .wrapping_mul(10)
                        .wrapping_add(i32::from(byte - b'0'));
                }
                _ => {}
            }
            attempts += 1;
        }

        if negative {
            // wrapping_neg so an accumulator sitting at i32::MIN stays put
            // instead of panicking.
            magnitude = magnitude.wrapping_neg();
        }
        Ok(magnitude)
    }

    /// Read a boolean.
    ///
    /// No delimiter: the terminal byte carries the value itself, `'1'` for
    /// true and `'0'` for false. Everything else is ignored. Uses the larger
    /// boolean attempt budget (see [`DEFAULT_BOOL_ATTEMPTS`]).
    pub fn read_bool(&mut self) -> SerialResult<bool> {
        let mut attempts: u32 = 0;

        loop {
            if attempts > self.limits.bool_attempts {
                debug!("boolean read timed out after {} poll attempts", attempts);
                return Err(SerialError::Timeout { attempts });
            }

            match self.source.try_read() {
                Some(b'1') => return Ok(true),
                Some(b'0') => return Ok(false),
                _ => {}
            }
            attempts += 1;
        }
    }

    /// The attempt budgets in effect.
    pub fn limits(&self) -> PollLimits {
        self.limits
    }

    /// Mutable access to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the decoder and get the source back.
    pub fn into_inner(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;
    use approx::assert_relative_eq;
    use bytes::Bytes;

    const DELIM: u8 = b'\r';

    fn tight_limits() -> PollLimits {
        PollLimits {
            value_attempts: 50,
            bool_attempts: 100,
        }
    }

    fn decoder(data: &[u8]) -> ValueDecoder<ScriptedSource> {
        ValueDecoder::with_limits(ScriptedSource::from_bytes(data), tight_limits())
    }

    #[test]
    fn test_float_simple() {
        assert_relative_eq!(decoder(b"3.14\r").read_float(DELIM).unwrap(), 3.14, max_relative = 1e-6);
    }

    #[test]
    fn test_float_negative() {
        assert_relative_eq!(decoder(b"-3.14\r").read_float(DELIM).unwrap(), -3.14, max_relative = 1e-6);
    }

    #[test]
    fn test_float_zero() {
        assert_eq!(decoder(b"0\r").read_float(DELIM).unwrap(), 0.0);
    }

    #[test]
    fn test_float_double_decimal_point_is_noop() {
        assert_relative_eq!(decoder(b"3..14\r").read_float(DELIM).unwrap(), 3.14, max_relative = 1e-6);
    }

    #[test]
    fn test_float_bare_delimiter_yields_zero() {
        assert_eq!(decoder(b"\r").read_float(DELIM).unwrap(), 0.0);
    }

    #[test]
    fn test_float_trailing_sign_still_negates() {
        // Long-standing firmware behavior: the sign is applied at
        // finalization wherever the '-' showed up.
        assert_relative_eq!(decoder(b"3.5-\r").read_float(DELIM).unwrap(), -3.5, max_relative = 1e-6);
    }

    #[test]
    fn test_float_ignores_line_noise() {
        assert_relative_eq!(decoder(b"\x02 2x1.5!\r").read_float(DELIM).unwrap(), 21.5, max_relative = 1e-6);
    }

    #[test]
    fn test_float_timeout_on_empty_source() {
        let err = decoder(b"").read_float(DELIM).unwrap_err();
        assert!(matches!(err, SerialError::Timeout { .. }));
    }

    #[test]
    fn test_float_survives_gaps_within_budget() {
        let mut source = ScriptedSource::new();
        source.push_silence(10);
        source.push_bytes(b"1.5");
        source.push_silence(10);
        source.push_bytes(b"\r");
        let mut dec = ValueDecoder::with_limits(source, tight_limits());
        assert_relative_eq!(dec.read_float(DELIM).unwrap(), 1.5, max_relative = 1e-6);
    }

    #[test]
    fn test_int_simple() {
        assert_eq!(decoder(b"42\r").read_int(DELIM).unwrap(), 42);
    }

    #[test]
    fn test_int_negative() {
        assert_eq!(decoder(b"-7\r").read_int(DELIM).unwrap(), -7);
    }

    #[test]
    fn test_int_without_sign_is_non_negative() {
        // The sign flag defaults to non-negative; digits alone can never
        // produce a negative value.
        for payload in [b"0\r".as_slice(), b"1\r", b"99\r", b"12345\r"] {
            assert!(decoder(payload).read_int(DELIM).unwrap() >= 0);
        }
    }

    #[test]
    fn test_int_bare_delimiter_yields_zero() {
        assert_eq!(decoder(b"\r").read_int(DELIM).unwrap(), 0);
    }

    #[test]
    fn test_int_ignores_decimal_point() {
        assert_eq!(decoder(b"3.14\r").read_int(DELIM).unwrap(), 314);
    }

    #[test]
    fn test_int_long_digit_run_wraps() {
        // Eleven digits exceed i32; the accumulator wraps like the
        // firmware's instead of panicking. 99999999999 mod 2^32.
        assert_eq!(decoder(b"99999999999\r").read_int(DELIM).unwrap(), 1_215_752_191);
    }

    #[test]
    fn test_int_min_magnitude_negates_without_panic() {
        // 2147483648 wraps to i32::MIN in the accumulator; negating it
        // must not overflow.
        assert_eq!(decoder(b"-2147483648\r").read_int(DELIM).unwrap(), i32::MIN);
    }

    #[test]
    fn test_float_long_digit_run_overflows_to_infinity() {
        let mut dec = decoder(b"999999999999999999999999999999999999999999999\r");
        let value = dec.read_float(DELIM).unwrap();
        assert!(value.is_infinite());
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_int_timeout_distinct_from_zero() {
        let err = decoder(b"").read_int(DELIM).unwrap_err();
        assert!(matches!(err, SerialError::Timeout { .. }));
    }

    #[test]
    fn test_int_timeout_when_gaps_exceed_budget() {
        let mut source = ScriptedSource::new();
        source.push_silence(200);
        source.push_bytes(b"5\r");
        let mut dec = ValueDecoder::with_limits(source, tight_limits());
        assert!(dec.read_int(DELIM).is_err());
    }

    #[test]
    fn test_bool_true() {
        assert!(decoder(b"1").read_bool().unwrap());
    }

    #[test]
    fn test_bool_false() {
        assert!(!decoder(b"0").read_bool().unwrap());
    }

    #[test]
    fn test_bool_ignores_noise_before_value() {
        assert!(decoder(b"xyz 1").read_bool().unwrap());
    }

    #[test]
    fn test_bool_timeout_distinct_from_false() {
        let err = decoder(b"").read_bool().unwrap_err();
        assert!(matches!(err, SerialError::Timeout { .. }));
    }

    #[test]
    fn test_bool_budget_is_larger() {
        let limits = PollLimits::default();
        assert!(limits.bool_attempts > limits.value_attempts);
    }

    #[test]
    fn test_limits_from_timeout() {
        let limits = PollLimits::from_timeout(Duration::from_secs(6), DEFAULT_POLL_RATE_HZ);
        assert_eq!(limits.value_attempts, 480_000);
        assert_eq!(limits.bool_attempts, 960_000);
    }

    #[test]
    fn test_bytes_buffer_as_source() {
        let mut dec = ValueDecoder::with_limits(Bytes::from_static(b"21.5\r"), tight_limits());
        assert_relative_eq!(dec.read_float(DELIM).unwrap(), 21.5, max_relative = 1e-6);
    }

    #[test]
    fn test_sequential_reads_share_source() {
        let mut dec = decoder(b"20\r1");
        assert_eq!(dec.read_int(DELIM).unwrap(), 20);
        assert!(dec.read_bool().unwrap());
    }
}
