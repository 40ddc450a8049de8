//! Unpacking of palette indices from `BlockStates` long arrays.
//!
//! Each 64-bit word holds `64 / bits` entries, least-significant first.
//! Entries never continue into the next word; leftover high bits of a word
//! are padding.

use schem_rs_nbt::PackedWord;
use tracing::warn;

use crate::error::SchematicError;

/// Minimum bits per entry for a given palette size: `max(2, ceil(log2(n)))`.
pub fn bits_per_entry(palette_size: usize) -> u32 {
    let log2 = if palette_size <= 1 {
        0
    } else {
        usize::BITS - (palette_size - 1).leading_zeros()
    };
    log2.max(2)
}

/// Leniency events seen while unpacking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Entries that pointed past the palette and were replaced by 0.
    pub clamped: usize,
    /// Entries missing from the word stream, filled with 0.
    pub padded: usize,
}

/// Unpack exactly `volume` palette indices from `words`.
///
/// Up to one word's worth of missing entries is zero-filled. A larger
/// shortfall means the declared size does not match the block data and is
/// rejected before anything is allocated.
pub fn decode_indices(
    words: &[PackedWord],
    palette_size: usize,
    volume: usize,
) -> Result<(Vec<u32>, DecodeStats), SchematicError> {
    let bits = bits_per_entry(palette_size);
    let entries_per_word = (64 / bits) as usize;
    let mask = u64::MAX >> (64 - bits);

    let limit = words
        .len()
        .saturating_add(1)
        .saturating_mul(entries_per_word);
    if volume > limit {
        return Err(SchematicError::Format(format!(
            "region declares {volume} blocks but BlockStates holds at most {} \
             ({} words at {bits} bits per entry)",
            words.len().saturating_mul(entries_per_word),
            words.len()
        )));
    }

    let mut stats = DecodeStats::default();
    let mut indices = Vec::with_capacity(volume);

    'words: for word in words {
        let value = word.as_u64();
        for slot in 0..entries_per_word {
            if indices.len() == volume {
                break 'words;
            }
            let index = (value >> (slot as u32 * bits)) & mask;
            if index as usize >= palette_size {
                stats.clamped += 1;
                indices.push(0);
            } else {
                indices.push(index as u32);
            }
        }
    }

    if indices.len() < volume {
        stats.padded = volume - indices.len();
        warn!(
            "block data ends early: {} of {volume} entries present, padding with 0",
            indices.len()
        );
        indices.resize(volume, 0);
    }
    if stats.clamped > 0 {
        warn!(
            "{} palette indices out of range (palette size {palette_size}), replaced by 0",
            stats.clamped
        );
    }

    Ok((indices, stats))
}
