//! Little-endian byte-cursor primitives shared by every variant's codec.
//!
//! Mirrors the role of the teacher's `reader::coord` / `writer` modules, but
//! generalized to every fixed-width field the format needs, since geometries
//! here are owned trees decoded in one pass rather than zero-copy views.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::EwkbError;

/// A forward-only cursor over a decode input buffer.
pub struct Reader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Wrap a buffer for sequential little-endian reads.
    pub fn new(buf: &'a [u8]) -> Self {
        Reader { buf, offset: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Current offset from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn require(&self, context: &'static str, needed: usize) -> Result<(), EwkbError> {
        if self.remaining() < needed {
            Err(EwkbError::InsufficientBytes {
                context,
                needed,
                available: self.remaining(),
                offset: self.offset,
            })
        } else {
            Ok(())
        }
    }

    /// Read one unsigned byte.
    pub fn read_u8(&mut self, context: &'static str) -> Result<u8, EwkbError> {
        self.require(context, 1)?;
        let v = self.buf[self.offset];
        self.offset += 1;
        Ok(v)
    }

    /// Read a little-endian `u32`.
    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, EwkbError> {
        self.require(context, 4)?;
        let mut slice = &self.buf[self.offset..self.offset + 4];
        let v = slice
            .read_u32::<LittleEndian>()
            .expect("length checked above");
        self.offset += 4;
        Ok(v)
    }

    /// Read a little-endian `f64`.
    pub fn read_f64(&mut self, context: &'static str) -> Result<f64, EwkbError> {
        self.require(context, 8)?;
        let mut slice = &self.buf[self.offset..self.offset + 8];
        let v = slice
            .read_f64::<LittleEndian>()
            .expect("length checked above");
        self.offset += 8;
        Ok(v)
    }

    /// Verify that `count` items of `item_width` bytes each fit in the
    /// remaining buffer before the caller allocates a `Vec` of that
    /// capacity, per the defensive-allocation guidance in spec.md §5.
    pub fn require_count(
        &self,
        context: &'static str,
        count: usize,
        item_width: usize,
    ) -> Result<(), EwkbError> {
        let needed = count
            .checked_mul(item_width)
            .ok_or(EwkbError::InsufficientBytes {
                context,
                needed: usize::MAX,
                available: self.remaining(),
                offset: self.offset,
            })?;
        self.require(context, needed)
    }
}

/// An append-only little-endian byte sink.
#[derive(Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Start an empty output buffer.
    pub fn new() -> Self {
        Writer { buf: Vec::new() }
    }

    /// Append one unsigned byte.
    pub fn write_u8(&mut self, v: u8) {
        self.buf.write_u8(v).expect("writes to a Vec never fail");
    }

    /// Append a little-endian `u32`.
    pub fn write_u32(&mut self, v: u32) {
        self.buf
            .write_u32::<LittleEndian>(v)
            .expect("writes to a Vec never fail");
    }

    /// Append a little-endian `f64`.
    pub fn write_f64(&mut self, v: f64) {
        self.buf
            .write_f64::<LittleEndian>(v)
            .expect("writes to a Vec never fail");
    }

    /// Append raw bytes, e.g. another geometry's already-encoded body.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Consume the writer, returning the accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
