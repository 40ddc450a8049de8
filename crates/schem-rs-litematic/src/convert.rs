//! End-to-end conversion of decompressed `.litematic` bytes.

use schem_rs_nbt::read_nbt;
use tracing::{debug, info};

use crate::bitset::{bits_per_entry, decode_indices, DecodeStats};
use crate::error::SchematicError;
use crate::grid::{Dimensions, VoxelGrid};
use crate::region::{first_region, SchematicMetadata};

/// A converted schematic, ready for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schematic {
    pub root_name: String,
    pub region_name: String,
    pub metadata: SchematicMetadata,
    pub grid: VoxelGrid,
    pub stats: DecodeStats,
}

/// Decode `data` and build the voxel grid of its first region.
///
/// Fails without partial output on any decode or structure error.
pub fn convert(data: &[u8]) -> Result<Schematic, SchematicError> {
    let root = read_nbt(data)?;
    debug!(
        "decoded NBT root '{}' with {} top-level tags",
        root.name,
        root.compound.len()
    );

    let metadata = SchematicMetadata::read(&root.compound);
    let region = first_region(&root.compound)?;
    let (x, y, z) = region.size;
    let dims = Dimensions::from_declared(x, y, z)?;
    info!(
        "region '{}': {}x{}x{} ({} blocks), palette of {}",
        region.name,
        dims.width,
        dims.height,
        dims.length,
        dims.volume(),
        region.palette.len()
    );

    debug!(
        "unpacking {} words at {} bits per entry",
        region.block_states.len(),
        bits_per_entry(region.palette.len())
    );
    let (indices, stats) =
        decode_indices(region.block_states, region.palette.len(), dims.volume())?;

    let region_name = region.name.into_owned();
    let grid = VoxelGrid::build(dims, region.palette, indices)?;

    Ok(Schematic {
        root_name: root.name.to_string_lossy().into_owned(),
        region_name,
        metadata,
        grid,
        stats,
    })
}
