//! Builders for synthetic Litematica documents.

use bytes::BytesMut;
use schem_rs_nbt::tag::TAG_COMPOUND;
use schem_rs_nbt::write::encode_document;
use schem_rs_nbt::{NbtCompound, NbtRoot, NbtValue, PackedWord};

pub fn region_compound(
    size: (i32, i32, i32),
    palette: &[&str],
    words: &[PackedWord],
) -> NbtCompound {
    let mut dims = NbtCompound::new();
    dims.insert("x", NbtValue::Int(size.0));
    dims.insert("y", NbtValue::Int(size.1));
    dims.insert("z", NbtValue::Int(size.2));

    let states = palette
        .iter()
        .map(|name| {
            let mut state = NbtCompound::new();
            state.insert("Name", NbtValue::String((*name).into()));
            NbtValue::Compound(state)
        })
        .collect();

    let mut region = NbtCompound::new();
    region.insert("Size", NbtValue::Compound(dims));
    region.insert(
        "BlockStatePalette",
        NbtValue::List {
            kind: TAG_COMPOUND,
            items: states,
        },
    );
    region.insert("BlockStates", NbtValue::LongArray(words.to_vec()));
    region
}

pub fn litematic_root(regions: &[(&str, NbtCompound)]) -> NbtCompound {
    let regions = regions
        .iter()
        .map(|(name, region)| (*name, NbtValue::Compound(region.clone())))
        .collect();
    let mut root = NbtCompound::new();
    root.insert("Regions", NbtValue::Compound(regions));
    root
}

pub fn encode(root: NbtCompound) -> Vec<u8> {
    let mut buf = BytesMut::new();
    encode_document(&mut buf, &NbtRoot::new("", root));
    buf.to_vec()
}

/// Pack indices `bits` at a time, least-significant first, no word spanning.
pub fn pack(indices: &[u32], bits: u32) -> Vec<PackedWord> {
    let per_word = (64 / bits) as usize;
    indices
        .chunks(per_word)
        .map(|chunk| {
            let word = chunk
                .iter()
                .enumerate()
                .fold(0u64, |acc, (slot, &index)| {
                    acc | (u64::from(index) << (slot as u32 * bits))
                });
            PackedWord::from(word)
        })
        .collect()
}
