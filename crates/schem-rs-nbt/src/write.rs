//! Big-endian NBT writing, for building fixtures.
//!
//! A scalar `Long` only stores its low half, so it is written with a zero
//! high word.

use bytes::BufMut;

use crate::tag::{NbtCompound, NbtRoot, NbtString, NbtValue, TAG_COMPOUND, TAG_END};

pub fn encode_document(buf: &mut impl BufMut, root: &NbtRoot) {
    buf.put_u8(TAG_COMPOUND);
    write_string(buf, &root.name);
    write_compound(buf, &root.compound);
}

/// Write only the payload of `tag` (no kind byte, no name).
pub fn encode_tag(buf: &mut impl BufMut, tag: &NbtValue) {
    match tag {
        NbtValue::End => {}
        NbtValue::Byte(v) => buf.put_i8(*v),
        NbtValue::Short(v) => buf.put_i16(*v),
        NbtValue::Int(v) => buf.put_i32(*v),
        NbtValue::Long(v) => {
            buf.put_i32(0);
            buf.put_i32(*v);
        }
        NbtValue::Float(v) => buf.put_f32(*v),
        NbtValue::Double(v) => buf.put_f64(*v),
        NbtValue::ByteArray(arr) => {
            buf.put_i32(arr.len() as i32);
            for &b in arr {
                buf.put_i8(b);
            }
        }
        NbtValue::String(s) => write_string(buf, s),
        NbtValue::List { kind, items } => {
            buf.put_u8(*kind);
            buf.put_i32(items.len() as i32);
            for item in items {
                encode_tag(buf, item);
            }
        }
        NbtValue::Compound(map) => write_compound(buf, map),
        NbtValue::IntArray(arr) => {
            buf.put_i32(arr.len() as i32);
            for &v in arr {
                buf.put_i32(v);
            }
        }
        NbtValue::LongArray(arr) => {
            buf.put_i32(arr.len() as i32);
            for word in arr {
                buf.put_u32(word.high);
                buf.put_u32(word.low);
            }
        }
    }
}

fn write_compound(buf: &mut impl BufMut, map: &NbtCompound) {
    for (name, tag) in map.iter() {
        buf.put_u8(tag.tag_type_id());
        write_string(buf, name);
        encode_tag(buf, tag);
    }
    buf.put_u8(TAG_END);
}

fn write_string(buf: &mut impl BufMut, s: &NbtString) {
    buf.put_u16(s.len() as u16);
    buf.put_slice(s.as_bytes());
}
