//! Big-endian NBT reading.

use crate::cursor::ByteCursor;
use crate::error::NbtError;
use crate::tag::*;

/// Maximum nesting depth to prevent stack overflow.
pub const MAX_DEPTH: usize = 512;

/// Decode a whole document: a named root compound.
pub fn decode_document(cursor: &mut ByteCursor<'_>) -> Result<NbtRoot, NbtError> {
    let tag_type = cursor.read_u8()?;
    if tag_type != TAG_COMPOUND {
        return Err(NbtError::Format(format!(
            "expected TAG_Compound (10) at root, got {tag_type}"
        )));
    }
    let name = read_string(cursor)?;
    let compound = read_compound(cursor, 0)?;
    Ok(NbtRoot { name, compound })
}

/// Decode the payload of a single tag whose kind byte has already been read.
pub fn decode_tag(kind: u8, cursor: &mut ByteCursor<'_>) -> Result<NbtValue, NbtError> {
    read_tag(cursor, kind, 0)
}

fn read_tag(cursor: &mut ByteCursor<'_>, kind: u8, depth: usize) -> Result<NbtValue, NbtError> {
    if depth > MAX_DEPTH {
        return Err(NbtError::NestingTooDeep { limit: MAX_DEPTH });
    }

    match kind {
        TAG_END => Ok(NbtValue::End),
        TAG_BYTE => Ok(NbtValue::Byte(cursor.read_i8()?)),
        TAG_SHORT => Ok(NbtValue::Short(cursor.read_i16()?)),
        TAG_INT => Ok(NbtValue::Int(cursor.read_i32()?)),
        TAG_LONG => {
            // High word is consumed and dropped.
            let _high = cursor.read_i32()?;
            Ok(NbtValue::Long(cursor.read_i32()?))
        }
        TAG_FLOAT => Ok(NbtValue::Float(cursor.read_f32()?)),
        TAG_DOUBLE => Ok(NbtValue::Double(cursor.read_f64()?)),
        TAG_BYTE_ARRAY => {
            let len = read_count(cursor)?;
            let mut arr = Vec::with_capacity(len.min(cursor.remaining()));
            for _ in 0..len {
                arr.push(cursor.read_i8()?);
            }
            Ok(NbtValue::ByteArray(arr))
        }
        TAG_STRING => Ok(NbtValue::String(read_string(cursor)?)),
        TAG_LIST => {
            let element_kind = cursor.read_u8()?;
            let len = read_count(cursor)?;
            if element_kind == TAG_END && len > 0 {
                return Err(NbtError::Format(format!(
                    "list of TAG_End declares {len} elements"
                )));
            }
            let mut items = Vec::with_capacity(len.min(cursor.remaining()));
            for _ in 0..len {
                items.push(read_tag(cursor, element_kind, depth + 1)?);
            }
            Ok(NbtValue::List {
                kind: element_kind,
                items,
            })
        }
        TAG_COMPOUND => Ok(NbtValue::Compound(read_compound(cursor, depth + 1)?)),
        TAG_INT_ARRAY => {
            let len = read_count(cursor)?;
            let mut arr = Vec::with_capacity(len.min(cursor.remaining() / 4));
            for _ in 0..len {
                arr.push(cursor.read_i32()?);
            }
            Ok(NbtValue::IntArray(arr))
        }
        TAG_LONG_ARRAY => {
            let len = read_count(cursor)?;
            let mut arr = Vec::with_capacity(len.min(cursor.remaining() / 8));
            for _ in 0..len {
                arr.push(PackedWord::from(cursor.read_u64()?));
            }
            Ok(NbtValue::LongArray(arr))
        }
        _ => Err(NbtError::UnknownTag(kind)),
    }
}

fn read_compound(cursor: &mut ByteCursor<'_>, depth: usize) -> Result<NbtCompound, NbtError> {
    if depth > MAX_DEPTH {
        return Err(NbtError::NestingTooDeep { limit: MAX_DEPTH });
    }
    let mut map = NbtCompound::new();
    loop {
        let kind = cursor.read_u8()?;
        if kind == TAG_END {
            break;
        }
        let name = read_string(cursor)?;
        let tag = read_tag(cursor, kind, depth)?;
        map.insert(name, tag);
    }
    Ok(map)
}

/// Length-prefixed string. The bytes are kept as stored.
fn read_string(cursor: &mut ByteCursor<'_>) -> Result<NbtString, NbtError> {
    let len = cursor.read_u16()? as usize;
    if len == 0 {
        return Ok(NbtString::default());
    }
    Ok(NbtString::from_bytes(cursor.read_bytes(len)?))
}

/// Element count prefix. Negative counts read as zero elements.
fn read_count(cursor: &mut ByteCursor<'_>) -> Result<usize, NbtError> {
    let len = cursor.read_i32()?;
    Ok(usize::try_from(len).unwrap_or(0))
}
