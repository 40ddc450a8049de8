//! Litematica schematic conversion: region extraction, block state
//! unpacking and voxel grid assembly.

pub mod bitset;
pub mod convert;
pub mod error;
pub mod grid;
pub mod region;
#[cfg(test)]
mod testutil;

pub use bitset::{bits_per_entry, decode_indices, DecodeStats};
pub use convert::{convert, Schematic};
pub use error::SchematicError;
pub use grid::{Dimensions, PaletteEntry, VoxelGrid};
pub use region::{first_region, Region, SchematicMetadata};
