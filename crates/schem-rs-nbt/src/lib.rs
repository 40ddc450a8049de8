//! NBT (Named Binary Tag) decoding for Java Edition files.
//!
//! Everything is big-endian: ints are i32_be, string lengths are u16_be.
//! Scalar `TAG_Long` keeps only its low 32 bits; `TAG_Long_Array` keeps
//! both halves of every element as a [`PackedWord`].

pub mod cursor;
pub mod error;
mod io;
pub mod tag;
#[cfg(any(test, feature = "fixtures"))]
pub mod write;

pub use cursor::ByteCursor;
pub use error::NbtError;
pub use io::{decode_document, decode_tag, MAX_DEPTH};
pub use tag::{NbtCompound, NbtRoot, NbtString, NbtValue, PackedWord};

/// Decode a complete, already decompressed NBT file.
pub fn read_nbt(data: &[u8]) -> Result<NbtRoot, NbtError> {
    let mut cursor = ByteCursor::new(data);
    decode_document(&mut cursor)
}
