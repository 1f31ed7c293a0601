//! Binary wire reader and writer.
//!
//! Integers are little-endian. Variable-length fields are prefixed with a
//! Bitcoin CompactSize integer:
//!
//! ```text
//! < 0xfd        1 byte
//! 0xfd + u16    3 bytes
//! 0xfe + u32    5 bytes
//! 0xff + u64    9 bytes
//! ```
//!
//! The reader rejects non-minimal CompactSize encodings.

use bytes::{BufMut, BytesMut};

use crate::error::EncodingError;

/// Encoded size of a CompactSize integer.
pub fn varint_len(n: u64) -> usize {
    match n {
        0..0xfd => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

/// Append-only little-endian writer.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: BytesMut,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.put_u8(v);
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buf.put_u16_le(v);
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.put_u32_le(v);
    }

    pub fn write_u64(&mut self, v: u64) {
        self.buf.put_u64_le(v);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    pub fn write_varint(&mut self, n: u64) {
        match varint_len(n) {
            1 => self.write_u8(n as u8),
            3 => {
                self.write_u8(0xfd);
                self.write_u16(n as u16);
            }
            5 => {
                self.write_u8(0xfe);
                self.write_u32(n as u32);
            }
            _ => {
                self.write_u8(0xff);
                self.write_u64(n);
            }
        }
    }

    /// Length-prefixed byte string.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_varint(bytes.len() as u64);
        self.write_bytes(bytes);
    }

    /// Length-prefixed UTF-8 string.
    pub fn write_var_str(&mut self, s: &str) {
        self.write_var_bytes(s.as_bytes());
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf.to_vec()
    }
}

/// Bounds-checked cursor over a byte slice.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], EncodingError> {
        let have = self.remaining();
        if n > have {
            return Err(EncodingError::UnexpectedEof { need: n, have });
        }
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], EncodingError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, EncodingError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, EncodingError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, EncodingError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, EncodingError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_varint(&mut self) -> Result<u64, EncodingError> {
        let (n, width) = match self.read_u8()? {
            0xff => (self.read_u64()?, 9),
            0xfe => (u64::from(self.read_u32()?), 5),
            0xfd => (u64::from(self.read_u16()?), 3),
            b => return Ok(u64::from(b)),
        };
        if varint_len(n) != width {
            return Err(EncodingError::NonCanonicalVarInt);
        }
        Ok(n)
    }

    /// Length-prefixed byte string.
    pub fn read_var_bytes(&mut self) -> Result<&'a [u8], EncodingError> {
        let len = self.read_varint()?;
        let len = usize::try_from(len).map_err(|_| EncodingError::LengthOverflow(len))?;
        self.read_bytes(len)
    }

    /// Length-prefixed UTF-8 string.
    pub fn read_var_str(&mut self) -> Result<&'a str, EncodingError> {
        let bytes = self.read_var_bytes()?;
        std::str::from_utf8(bytes).map_err(|_| EncodingError::InvalidUtf8)
    }

    /// Fail unless every byte has been consumed.
    pub fn finish(&self) -> Result<(), EncodingError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(EncodingError::TrailingData(n)),
        }
    }
}
