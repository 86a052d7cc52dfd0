// SPDX-License-Identifier: MIT OR Apache-2.0

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bit_array;
pub mod bits;
pub mod error;
pub mod queue;
pub mod sequence_buffer;
pub mod stream;
pub mod varint;

/// Prelude module to import everything from this crate.
pub mod prelude {
    pub use crate::bit_array::*;
    pub use crate::bits::*;
    pub use crate::error::*;
    pub use crate::queue::*;
    pub use crate::sequence_buffer::*;
    pub use crate::stream::*;
    pub use crate::varint::*;
}
