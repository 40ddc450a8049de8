//! Voxel grid assembled from unpacked palette indices.
//!
//! Linear index of a voxel is `(y * length + z) * width + x`: Y outermost,
//! then Z, then X. The bit unpacker produces entries in the same order.

use crate::error::SchematicError;

/// A palette slot: index into the palette and its block identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub index: u32,
    pub name: String,
}

/// Normalized region dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
    pub length: usize,
}

impl Dimensions {
    /// Normalize a declared `Size` (x, y, z). Negative components are taken
    /// by absolute value; zero components are rejected.
    pub fn from_declared(x: i32, y: i32, z: i32) -> Result<Self, SchematicError> {
        let dims = Self {
            width: x.unsigned_abs() as usize,
            height: y.unsigned_abs() as usize,
            length: z.unsigned_abs() as usize,
        };
        if dims.width == 0 || dims.height == 0 || dims.length == 0 {
            return Err(SchematicError::Format(format!(
                "region size has a zero component: {x}x{y}x{z}"
            )));
        }
        dims.checked_volume().ok_or_else(|| {
            SchematicError::Format(format!("region volume overflows: {x}x{y}x{z}"))
        })?;
        Ok(dims)
    }

    fn checked_volume(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.length)
    }

    pub fn volume(&self) -> usize {
        self.width * self.height * self.length
    }

    pub fn index_of(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.length + z) * self.width + x
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    dims: Dimensions,
    indices: Vec<u32>,
    palette: Vec<PaletteEntry>,
}

impl VoxelGrid {
    pub fn build(
        dims: Dimensions,
        palette: Vec<PaletteEntry>,
        indices: Vec<u32>,
    ) -> Result<Self, SchematicError> {
        if indices.len() != dims.volume() {
            return Err(SchematicError::Format(format!(
                "expected {} voxels for {}x{}x{}, got {}",
                dims.volume(),
                dims.width,
                dims.height,
                dims.length,
                indices.len()
            )));
        }
        Ok(Self {
            dims,
            indices,
            palette,
        })
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn length(&self) -> usize {
        self.dims.length
    }

    pub fn palette(&self) -> &[PaletteEntry] {
        &self.palette
    }

    /// Flat indices in `(y * length + z) * width + x` order.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Palette index at the given coordinates, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<u32> {
        if x >= self.dims.width || y >= self.dims.height || z >= self.dims.length {
            return None;
        }
        Some(self.indices[self.dims.index_of(x, y, z)])
    }

    /// Nested `[y][z][x]` copy of the grid.
    pub fn layers(&self) -> Vec<Vec<Vec<u32>>> {
        let Dimensions {
            width,
            height,
            length,
        } = self.dims;
        (0..height)
            .map(|y| {
                (0..length)
                    .map(|z| {
                        let start = self.dims.index_of(0, y, z);
                        self.indices[start..start + width].to_vec()
                    })
                    .collect()
            })
            .collect()
    }

    /// Voxel count per palette index, most common first. Ties are ordered by
    /// palette index.
    pub fn material_counts(&self) -> Vec<(u32, usize)> {
        let mut counts = vec![0usize; self.palette.len().max(1)];
        for &index in &self.indices {
            let slot = index as usize;
            if slot >= counts.len() {
                counts.resize(slot + 1, 0);
            }
            counts[slot] += 1;
        }
        let mut counts: Vec<(u32, usize)> = counts
            .into_iter()
            .enumerate()
            .filter(|&(_, n)| n > 0)
            .map(|(i, n)| (i as u32, n))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts
    }
}
