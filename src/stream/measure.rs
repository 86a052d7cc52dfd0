// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Serializer;
use crate::error::{SerializeError, SerializeResult};

/// Runs the same serialize routine as [`super::WriteStream`] but only
/// counts bits, for sizing a message before committing it to a real
/// buffer.
///
/// Alignment is always charged its worst case (7 bits), never the actual
/// position-dependent cost a real write would pay — this keeps the count
/// a guaranteed upper bound on the eventual written size rather than an
/// exact prediction of it.
#[derive(Debug, Clone)]
pub struct MeasureStream<Ctx = ()> {
    bits: usize,
    capacity_bits: Option<usize>,
    ctx: Ctx,
}

impl MeasureStream<()> {
    pub fn new() -> Self {
        Self::with_context(())
    }

    pub fn with_capacity_bits(capacity_bits: usize) -> Self {
        Self { bits: 0, capacity_bits: Some(capacity_bits), ctx: () }
    }
}

impl Default for MeasureStream<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> MeasureStream<Ctx> {
    pub fn with_context(ctx: Ctx) -> Self {
        Self { bits: 0, capacity_bits: None, ctx }
    }

    pub fn with_context_and_capacity_bits(capacity_bits: usize, ctx: Ctx) -> Self {
        Self { bits: 0, capacity_bits: Some(capacity_bits), ctx }
    }

    #[inline]
    pub fn bits_measured(&self) -> usize {
        self.bits
    }

    #[inline]
    pub fn bytes_measured(&self) -> usize {
        self.bits.div_ceil(8)
    }

    /// `true` iff the bits measured so far would fit in `budget_bytes`.
    pub fn fits_in(&self, budget_bytes: usize) -> bool {
        self.bytes_measured() <= budget_bytes
    }

    fn add_bits(&mut self, n: usize) -> SerializeResult<()> {
        self.bits += n;
        if let Some(cap) = self.capacity_bits {
            if self.bits > cap {
                return Err(SerializeError::CapacityExceeded);
            }
        }
        Ok(())
    }
}

impl<Ctx> Serializer for MeasureStream<Ctx> {
    type Ctx = Ctx;
    const IS_READING: bool = false;
    const IS_WRITING: bool = false;

    fn context(&self) -> &Ctx {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut Ctx {
        &mut self.ctx
    }

    #[inline]
    fn raw_bits(&mut self, _value: &mut u32, bits: u32) -> SerializeResult<()> {
        self.add_bits(bits as usize)
    }

    fn raw_bytes(&mut self, buf: &mut [u8]) -> SerializeResult<()> {
        self.add_bits(buf.len() * 8)
    }

    fn raw_align(&mut self) -> SerializeResult<()> {
        self.add_bits(7)
    }
}
