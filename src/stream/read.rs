// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Serializer;
use crate::bits::BitReader;
use crate::error::{BitsError, SerializeResult};

/// Unpacks field values out of an untrusted byte buffer. The consumer
/// side of the three [`Serializer`] directions; every failure surfaces as
/// a [`crate::error::SerializeError`], never a panic.
#[derive(Debug)]
pub struct ReadStream<'a, Ctx = ()> {
    reader: BitReader<'a>,
    ctx: Ctx,
}

impl<'a> ReadStream<'a, ()> {
    /// Wraps the whole of `source` with no context value.
    pub fn new(source: &'a [u8]) -> Result<Self, BitsError> {
        Self::with_context(source, ())
    }
}

impl<'a, Ctx> ReadStream<'a, Ctx> {
    pub fn with_context(source: &'a [u8], ctx: Ctx) -> Result<Self, BitsError> {
        Ok(Self { reader: BitReader::new(source)?, ctx })
    }

    /// Exposes only the first `bits_capacity` bits as logically readable,
    /// for a buffer whose backing allocation is rounded up past the real
    /// packet length.
    pub fn with_capacity(source: &'a [u8], bits_capacity: usize, ctx: Ctx) -> Result<Self, BitsError> {
        Ok(Self { reader: BitReader::with_capacity(source, bits_capacity)?, ctx })
    }

    #[inline]
    pub fn bits_read(&self) -> usize {
        self.reader.bits_read()
    }

    #[inline]
    pub fn bytes_read(&self) -> usize {
        self.reader.bytes_read()
    }

    pub fn into_context(self) -> Ctx {
        self.ctx
    }
}

impl<'a, Ctx> Serializer for ReadStream<'a, Ctx> {
    type Ctx = Ctx;
    const IS_READING: bool = true;
    const IS_WRITING: bool = false;

    fn context(&self) -> &Ctx {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut Ctx {
        &mut self.ctx
    }

    #[inline]
    fn raw_bits(&mut self, value: &mut u32, bits: u32) -> SerializeResult<()> {
        *value = self.reader.read_bits(bits)?;
        Ok(())
    }

    fn raw_bytes(&mut self, buf: &mut [u8]) -> SerializeResult<()> {
        self.reader.read_bytes(buf)
    }

    fn raw_align(&mut self) -> SerializeResult<()> {
        self.reader.read_align()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SerializeError;
    use crate::stream::WriteStream;

    #[test]
    fn round_trips_mixed_fields() {
        let mut buf = [0u8; 16];
        {
            let mut w = WriteStream::new(&mut buf).unwrap();
            let mut a: i64 = 12;
            w.serialize_int(&mut a, 0, 15).unwrap();
            let mut b = true;
            w.serialize_bool(&mut b).unwrap();
            let mut c: u32 = 0xDEAD_BEEF;
            w.serialize_u32(&mut c).unwrap();
            w.serialize_check().unwrap();
        }

        let mut r = ReadStream::new(&buf).unwrap();
        let mut a: i64 = 0;
        r.serialize_int(&mut a, 0, 15).unwrap();
        assert_eq!(a, 12);
        let mut b = false;
        r.serialize_bool(&mut b).unwrap();
        assert!(b);
        let mut c: u32 = 0;
        r.serialize_u32(&mut c).unwrap();
        assert_eq!(c, 0xDEAD_BEEF);
        r.serialize_check().unwrap();
    }

    #[test]
    fn corrupted_check_is_rejected() {
        let mut buf = [0u8; 8];
        {
            let mut w = WriteStream::new(&mut buf).unwrap();
            let mut v: u32 = 7;
            w.serialize_u32(&mut v).unwrap();
            w.serialize_check().unwrap();
        }
        buf[4] ^= 0xFF;

        let mut r = ReadStream::new(&buf).unwrap();
        let mut v: u32 = 0;
        r.serialize_u32(&mut v).unwrap();
        assert_eq!(r.serialize_check(), Err(SerializeError::CheckMismatch));
    }

    #[test]
    fn reading_past_end_is_eof() {
        let buf = [0u8; 4];
        let mut r = ReadStream::new(&buf).unwrap();
        let mut v = 0u32;
        r.serialize_bits(&mut v, 32).unwrap();
        assert_eq!(r.serialize_bits(&mut v, 1), Err(SerializeError::Eof));
    }

    #[test]
    fn string_round_trips() {
        let mut buf = [0u8; 16];
        {
            let mut w = WriteStream::new(&mut buf).unwrap();
            let mut src = *b"hi\0\0\0\0\0\0";
            let mut len = 2usize;
            w.serialize_string(&mut src, &mut len).unwrap();
        }
        let mut r = ReadStream::new(&buf).unwrap();
        let mut dst = [0u8; 8];
        let mut len = 0usize;
        r.serialize_string(&mut dst, &mut len).unwrap();
        assert_eq!(len, 2);
        assert_eq!(&dst[..2], b"hi");
    }

    #[test]
    fn relative_sequence_round_trips_across_wrap() {
        let mut buf = [0u8; 8];
        {
            let mut w = WriteStream::new(&mut buf).unwrap();
            let mut seq: u16 = 3;
            w.serialize_sequence_relative(65534, &mut seq).unwrap();
        }
        let mut r = ReadStream::new(&buf).unwrap();
        let mut seq: u16 = 0;
        r.serialize_sequence_relative(65534, &mut seq).unwrap();
        assert_eq!(seq, 3);
    }
}
