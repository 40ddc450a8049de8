//! Forward-only big-endian reader over an in-memory buffer.

use bytes::Buf;

use crate::error::NbtError;

/// Sequential reader used by the decoder.
///
/// Every read either consumes exactly the width of its type or fails with
/// [`NbtError::OutOfBounds`] and consumes nothing.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    rest: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, rest: data }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.data.len() - self.rest.len()
    }

    pub fn remaining(&self) -> usize {
        self.rest.remaining()
    }

    pub fn is_empty(&self) -> bool {
        !self.rest.has_remaining()
    }

    fn ensure(&self, needed: usize) -> Result<(), NbtError> {
        if self.rest.remaining() < needed {
            Err(NbtError::OutOfBounds {
                needed,
                remaining: self.rest.remaining(),
            })
        } else {
            Ok(())
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, NbtError> {
        self.ensure(1)?;
        Ok(self.rest.get_u8())
    }

    pub fn read_i8(&mut self) -> Result<i8, NbtError> {
        self.ensure(1)?;
        Ok(self.rest.get_i8())
    }

    pub fn read_u16(&mut self) -> Result<u16, NbtError> {
        self.ensure(2)?;
        Ok(self.rest.get_u16())
    }

    pub fn read_i16(&mut self) -> Result<i16, NbtError> {
        self.ensure(2)?;
        Ok(self.rest.get_i16())
    }

    pub fn read_i32(&mut self) -> Result<i32, NbtError> {
        self.ensure(4)?;
        Ok(self.rest.get_i32())
    }

    pub fn read_u64(&mut self) -> Result<u64, NbtError> {
        self.ensure(8)?;
        Ok(self.rest.get_u64())
    }

    pub fn read_f32(&mut self) -> Result<f32, NbtError> {
        self.ensure(4)?;
        Ok(self.rest.get_f32())
    }

    pub fn read_f64(&mut self) -> Result<f64, NbtError> {
        self.ensure(8)?;
        Ok(self.rest.get_f64())
    }

    /// Borrow the next `len` bytes and advance past them.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], NbtError> {
        self.ensure(len)?;
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        Ok(head)
    }
}
