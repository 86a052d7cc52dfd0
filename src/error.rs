// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the bit codec and the serialize surface.
//!
//! Two regimes, matching the two trust boundaries of the core:
//!
//! - [`BitsError`] is returned by the handful of fallible *constructors*
//!   (backing buffer not rounded to a word). These are programming errors,
//!   but unlike the rest of the writer/measure side, Rust gives us no
//!   "undefined behavior in release" escape hatch for a bad allocation
//!   size, so they get a real, checked `Result` instead of a
//!   `debug_assert!`.
//! - [`SerializeError`] is returned by read-side field operations on
//!   untrusted input. It is never a panic; the shared serialize routine
//!   propagates it with `?` and the caller discards the packet.

use core::fmt;

/// Failure constructing or using a [`crate::bits::BitWriter`] /
/// [`crate::bits::BitReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsError {
    /// The backing buffer's byte length is not a multiple of 4.
    CapacityNotWordAligned { len: usize },
}

impl fmt::Display for BitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitsError::CapacityNotWordAligned { len } => {
                write!(f, "backing buffer length {len} is not a multiple of 4 bytes")
            }
        }
    }
}

impl core::error::Error for BitsError {}

/// Failure decoding a field from an untrusted bit stream.
///
/// Every variant corresponds to one of the recoverable failures spec'd for
/// the read side: running past the end of the buffer, a padding or check
/// byte that should have been zero/magic but wasn't, or a decoded integer
/// falling outside its declared range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializeError {
    /// Ran out of bits before the requested field could be read.
    Eof,
    /// A decoded integer fell outside `[min, max]`.
    OutOfRange,
    /// Alignment padding bits were expected to be zero but weren't.
    UnalignedPadding,
    /// The safety-check magic value did not decode to `0x1234_5678`.
    CheckMismatch,
    /// A write or measurement would exceed the stream's bit capacity.
    CapacityExceeded,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::Eof => write!(f, "ran out of bits before field could be read"),
            SerializeError::OutOfRange => write!(f, "decoded integer out of declared range"),
            SerializeError::UnalignedPadding => write!(f, "non-zero alignment padding bits"),
            SerializeError::CheckMismatch => write!(f, "safety check magic mismatch"),
            SerializeError::CapacityExceeded => write!(f, "exceeded stream bit capacity"),
        }
    }
}

impl core::error::Error for SerializeError {}

/// Shorthand for the serialize surface's fallible return type.
pub type SerializeResult<T = ()> = Result<T, SerializeError>;
