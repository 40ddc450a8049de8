//! NBT tag types.

use std::borrow::Cow;
use std::fmt;

pub const TAG_END: u8 = 0;
pub const TAG_BYTE: u8 = 1;
pub const TAG_SHORT: u8 = 2;
pub const TAG_INT: u8 = 3;
pub const TAG_LONG: u8 = 4;
pub const TAG_FLOAT: u8 = 5;
pub const TAG_DOUBLE: u8 = 6;
pub const TAG_BYTE_ARRAY: u8 = 7;
pub const TAG_STRING: u8 = 8;
pub const TAG_LIST: u8 = 9;
pub const TAG_COMPOUND: u8 = 10;
pub const TAG_INT_ARRAY: u8 = 11;
pub const TAG_LONG_ARRAY: u8 = 12;

/// One 64-bit element of a long array, most-significant half first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackedWord {
    pub high: u32,
    pub low: u32,
}

impl PackedWord {
    pub fn new(high: u32, low: u32) -> Self {
        Self { high, low }
    }

    pub fn as_u64(self) -> u64 {
        (u64::from(self.high) << 32) | u64::from(self.low)
    }
}

impl From<u64> for PackedWord {
    fn from(value: u64) -> Self {
        Self {
            high: (value >> 32) as u32,
            low: value as u32,
        }
    }
}

impl From<PackedWord> for u64 {
    fn from(word: PackedWord) -> Self {
        word.as_u64()
    }
}

/// A string payload, kept as the raw bytes found in the file.
///
/// Java writers emit modified UTF-8 (NUL as `C0 80`, supplementary
/// characters as surrogate pairs), so the bytes are not guaranteed to be
/// valid UTF-8. Text views are lossy.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct NbtString(Vec<u8>);

impl NbtString {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The text, with invalid sequences replaced by U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<&str> for NbtString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for NbtString {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl PartialEq<str> for NbtString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for NbtString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl fmt::Debug for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// A compound tag: names mapped to tags, in file order.
///
/// Keys are unique. Inserting an existing key replaces its value and keeps
/// the original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NbtCompound {
    entries: Vec<(NbtString, NbtValue)>,
}

impl NbtCompound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, returning the previous value stored under `name`.
    pub fn insert(&mut self, name: impl Into<NbtString>, value: NbtValue) -> Option<NbtValue> {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&NbtValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_bytes() == name.as_bytes())
            .map(|(_, v)| v)
    }

    /// The first entry in file order.
    pub fn first(&self) -> Option<(&NbtString, &NbtValue)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &NbtString> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NbtString, &NbtValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Into<NbtString>> FromIterator<(K, NbtValue)> for NbtCompound {
    fn from_iter<I: IntoIterator<Item = (K, NbtValue)>>(iter: I) -> Self {
        let mut compound = NbtCompound::new();
        for (k, v) in iter {
            compound.insert(k, v);
        }
        compound
    }
}

/// A named root compound (the root always has a name, often empty string).
#[derive(Debug, Clone, PartialEq)]
pub struct NbtRoot {
    pub name: NbtString,
    pub compound: NbtCompound,
}

impl NbtRoot {
    pub fn new(name: impl Into<NbtString>, compound: NbtCompound) -> Self {
        Self {
            name: name.into(),
            compound,
        }
    }
}

/// Represents any NBT value.
///
/// `Long` keeps only the low 32 bits of the stored value; the high half is
/// read and dropped. `LongArray` keeps both halves.
#[derive(Debug, Clone, PartialEq)]
pub enum NbtValue {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i32),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(NbtString),
    List { kind: u8, items: Vec<NbtValue> },
    Compound(NbtCompound),
    IntArray(Vec<i32>),
    LongArray(Vec<PackedWord>),
}

impl NbtValue {
    /// Returns the numeric tag type ID (0-12).
    pub fn tag_type_id(&self) -> u8 {
        match self {
            NbtValue::End => TAG_END,
            NbtValue::Byte(_) => TAG_BYTE,
            NbtValue::Short(_) => TAG_SHORT,
            NbtValue::Int(_) => TAG_INT,
            NbtValue::Long(_) => TAG_LONG,
            NbtValue::Float(_) => TAG_FLOAT,
            NbtValue::Double(_) => TAG_DOUBLE,
            NbtValue::ByteArray(_) => TAG_BYTE_ARRAY,
            NbtValue::String(_) => TAG_STRING,
            NbtValue::List { .. } => TAG_LIST,
            NbtValue::Compound(_) => TAG_COMPOUND,
            NbtValue::IntArray(_) => TAG_INT_ARRAY,
            NbtValue::LongArray(_) => TAG_LONG_ARRAY,
        }
    }

    /// Human-readable tag kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NbtValue::End => "End",
            NbtValue::Byte(_) => "Byte",
            NbtValue::Short(_) => "Short",
            NbtValue::Int(_) => "Int",
            NbtValue::Long(_) => "Long",
            NbtValue::Float(_) => "Float",
            NbtValue::Double(_) => "Double",
            NbtValue::ByteArray(_) => "ByteArray",
            NbtValue::String(_) => "String",
            NbtValue::List { .. } => "List",
            NbtValue::Compound(_) => "Compound",
            NbtValue::IntArray(_) => "IntArray",
            NbtValue::LongArray(_) => "LongArray",
        }
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            NbtValue::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            NbtValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&NbtString> {
        match self {
            NbtValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&NbtCompound> {
        match self {
            NbtValue::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[NbtValue]> {
        match self {
            NbtValue::List { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[PackedWord]> {
        match self {
            NbtValue::LongArray(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_type_ids() {
        assert_eq!(NbtValue::End.tag_type_id(), 0);
        assert_eq!(NbtValue::Byte(0).tag_type_id(), 1);
        assert_eq!(NbtValue::Short(0).tag_type_id(), 2);
        assert_eq!(NbtValue::Int(0).tag_type_id(), 3);
        assert_eq!(NbtValue::Long(0).tag_type_id(), 4);
        assert_eq!(NbtValue::Float(0.0).tag_type_id(), 5);
        assert_eq!(NbtValue::Double(0.0).tag_type_id(), 6);
        assert_eq!(NbtValue::ByteArray(vec![]).tag_type_id(), 7);
        assert_eq!(NbtValue::String(NbtString::default()).tag_type_id(), 8);
        let list = NbtValue::List {
            kind: TAG_INT,
            items: vec![],
        };
        assert_eq!(list.tag_type_id(), 9);
        assert_eq!(NbtValue::Compound(NbtCompound::new()).tag_type_id(), 10);
        assert_eq!(NbtValue::IntArray(vec![]).tag_type_id(), 11);
        assert_eq!(NbtValue::LongArray(vec![]).tag_type_id(), 12);
    }

    #[test]
    fn accessors() {
        assert_eq!(NbtValue::Byte(42).as_byte(), Some(42));
        assert_eq!(NbtValue::Int(42).as_byte(), None);
        assert_eq!(
            NbtValue::String("hello".into()).as_string(),
            Some(&NbtString::from("hello"))
        );
        assert_eq!(NbtValue::Int(5).as_string(), None);
    }

    #[test]
    fn packed_word_halves() {
        let word = PackedWord::from(0x0123_4567_89AB_CDEF);
        assert_eq!(word.high, 0x0123_4567);
        assert_eq!(word.low, 0x89AB_CDEF);
        assert_eq!(u64::from(word), 0x0123_4567_89AB_CDEF);
    }

    #[test]
    fn compound_keeps_insertion_order() {
        let mut c = NbtCompound::new();
        c.insert("zeta", NbtValue::Int(1));
        c.insert("alpha", NbtValue::Int(2));
        c.insert("mid", NbtValue::Int(3));
        assert_eq!(c.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(c.first().map(|(k, _)| k.as_bytes()), Some(&b"zeta"[..]));
    }

    #[test]
    fn compound_replace_keeps_position() {
        let mut c = NbtCompound::new();
        c.insert("a", NbtValue::Int(1));
        c.insert("b", NbtValue::Int(2));
        assert_eq!(c.insert("a", NbtValue::Int(9)), Some(NbtValue::Int(1)));
        assert_eq!(c.len(), 2);
        assert_eq!(c.first(), Some((&NbtString::from("a"), &NbtValue::Int(9))));
    }

    #[test]
    fn string_keeps_raw_bytes() {
        // Modified UTF-8 NUL.
        let s = NbtString::from_bytes(vec![b'a', 0xC0, 0x80]);
        assert_eq!(s.as_bytes(), &[b'a', 0xC0, 0x80]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.to_string_lossy(), "a\u{FFFD}\u{FFFD}");
        assert_ne!(s, "a");
    }
}
