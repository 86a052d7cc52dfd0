// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Serializer;
use crate::bits::BitWriter;
use crate::error::{BitsError, SerializeResult};
#[cfg(feature = "checks")]
use crate::error::SerializeError;

/// Packs real field values into a byte buffer. The producer side of the
/// three [`Serializer`] directions.
#[derive(Debug)]
pub struct WriteStream<'a, Ctx = ()> {
    writer: BitWriter<'a>,
    ctx: Ctx,
}

impl<'a> WriteStream<'a, ()> {
    /// Wraps `buffer` with no context value.
    pub fn new(buffer: &'a mut [u8]) -> Result<Self, BitsError> {
        Self::with_context(buffer, ())
    }
}

impl<'a, Ctx> WriteStream<'a, Ctx> {
    pub fn with_context(buffer: &'a mut [u8], ctx: Ctx) -> Result<Self, BitsError> {
        Ok(Self { writer: BitWriter::new(buffer)?, ctx })
    }

    #[inline]
    pub fn bits_written(&self) -> usize {
        self.writer.bits_written()
    }

    #[inline]
    pub fn bytes_written(&self) -> usize {
        self.writer.bytes_written()
    }

    /// Flushes any pending partial word and returns the written bytes.
    pub fn finish(mut self) -> (usize, Ctx) {
        let bytes = self.writer.bytes_written();
        self.writer.flush_bits();
        (bytes, self.ctx)
    }

    /// Returns the written bytes without consuming the stream.
    pub fn data(&mut self) -> &[u8] {
        self.writer.data()
    }
}

impl<'a, Ctx> Serializer for WriteStream<'a, Ctx> {
    type Ctx = Ctx;
    const IS_READING: bool = false;
    const IS_WRITING: bool = true;

    fn context(&self) -> &Ctx {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut Ctx {
        &mut self.ctx
    }

    #[inline]
    fn raw_bits(&mut self, value: &mut u32, bits: u32) -> SerializeResult<()> {
        #[cfg(feature = "checks")]
        {
            let remaining = self.writer.bits_capacity() - self.writer.bits_written();
            if bits as usize > remaining {
                return Err(SerializeError::CapacityExceeded);
            }
        }
        self.writer.write_bits(*value, bits);
        Ok(())
    }

    fn raw_bytes(&mut self, buf: &mut [u8]) -> SerializeResult<()> {
        #[cfg(feature = "checks")]
        {
            let remaining = self.writer.bits_capacity() - self.writer.bits_written();
            if buf.len() * 8 > remaining {
                return Err(SerializeError::CapacityExceeded);
            }
        }
        self.writer.write_bytes(buf);
        Ok(())
    }

    fn raw_align(&mut self) -> SerializeResult<()> {
        self.writer.write_align();
        Ok(())
    }
}
