// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bit-level codec: [`BitWriter`] and [`BitReader`].
//!
//! Bits are packed into a stream of 32-bit little-endian words. Within a
//! word, the first bit written lands in the lowest bit of the first byte;
//! the 33rd bit written lands in the lowest bit of the fifth byte, and so
//! on. Because words are always stored as little-endian on the wire, the
//! same byte sequence is produced regardless of host endianness — there is
//! no bit-order knob, unlike general-purpose bit-stream crates, because
//! this format is fixed by the protocols built on top of it.

mod reader;
mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

const WORD_BYTES: usize = 4;
const WORD_BITS: usize = 32;
