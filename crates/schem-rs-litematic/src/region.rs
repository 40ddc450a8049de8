//! Field extraction from a decoded Litematica document.

use std::borrow::Cow;

use schem_rs_nbt::{NbtCompound, NbtValue, PackedWord};
use tracing::{debug, warn};

use crate::error::SchematicError;
use crate::grid::PaletteEntry;

/// The raw pieces of the first region, borrowed from the decoded tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Region<'a> {
    pub name: Cow<'a, str>,
    /// Declared `Size` as stored; components may be negative.
    pub size: (i32, i32, i32),
    pub palette: Vec<PaletteEntry>,
    pub block_states: &'a [PackedWord],
}

/// Optional descriptive fields. Anything missing or mistyped is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchematicMetadata {
    pub name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub region_count: Option<i32>,
    pub version: Option<i32>,
    pub data_version: Option<i32>,
}

impl SchematicMetadata {
    pub fn read(root: &NbtCompound) -> Self {
        let meta = root.get("Metadata").and_then(NbtValue::as_compound);
        let string = |key: &str| {
            meta.and_then(|m| m.get(key))
                .and_then(NbtValue::as_string)
                .map(|s| s.to_string_lossy().into_owned())
        };
        Self {
            name: string("Name"),
            author: string("Author"),
            description: string("Description"),
            region_count: meta
                .and_then(|m| m.get("RegionCount"))
                .and_then(NbtValue::as_int),
            version: root.get("Version").and_then(NbtValue::as_int),
            data_version: root.get("MinecraftDataVersion").and_then(NbtValue::as_int),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Locate the first region and pull out its size, palette and block states.
pub fn first_region(root: &NbtCompound) -> Result<Region<'_>, SchematicError> {
    let regions = require_compound(root, "Regions", "Regions")?;
    let (name, value) = regions
        .first()
        .ok_or_else(|| SchematicError::Format("Regions is empty".into()))?;
    let name = name.to_string_lossy();
    if regions.len() > 1 {
        let ignored: Vec<String> = regions.keys().skip(1).map(ToString::to_string).collect();
        warn!(
            "schematic has {} regions, using '{name}' and ignoring {}",
            regions.len(),
            ignored.join(", ")
        );
    }

    let path = format!("Regions.{name}");
    let region = value
        .as_compound()
        .ok_or_else(|| mistyped(&path, "Compound", value))?;

    let size_path = format!("{path}.Size");
    let size = require_compound(region, "Size", &size_path)?;
    let size = (
        require_int(size, "x", &size_path)?,
        require_int(size, "y", &size_path)?,
        require_int(size, "z", &size_path)?,
    );

    let palette = read_palette(region, &path)?;

    let states_path = format!("{path}.BlockStates");
    let states = require(region, "BlockStates", &states_path)?;
    let block_states = states
        .as_long_array()
        .ok_or_else(|| mistyped(&states_path, "LongArray", states))?;

    debug!(
        "region '{name}': size {size:?}, {} palette entries, {} block state words",
        palette.len(),
        block_states.len()
    );

    Ok(Region {
        name,
        size,
        palette,
        block_states,
    })
}

fn read_palette(
    region: &NbtCompound,
    region_path: &str,
) -> Result<Vec<PaletteEntry>, SchematicError> {
    let path = format!("{region_path}.BlockStatePalette");
    let value = require(region, "BlockStatePalette", &path)?;
    let items = value
        .as_list()
        .ok_or_else(|| mistyped(&path, "List", value))?;
    if items.is_empty() {
        return Err(SchematicError::Format(format!("{path} is empty")));
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let item_path = format!("{path}[{index}]");
            let state = item
                .as_compound()
                .ok_or_else(|| mistyped(&item_path, "Compound", item))?;
            let name_path = format!("{item_path}.Name");
            let name = require(state, "Name", &name_path)?;
            let name = name
                .as_string()
                .ok_or_else(|| mistyped(&name_path, "String", name))?;
            Ok(PaletteEntry {
                index: index as u32,
                name: name.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

fn require<'a>(
    compound: &'a NbtCompound,
    key: &str,
    path: &str,
) -> Result<&'a NbtValue, SchematicError> {
    compound
        .get(key)
        .ok_or_else(|| SchematicError::Format(format!("missing field {path}")))
}

fn require_compound<'a>(
    compound: &'a NbtCompound,
    key: &str,
    path: &str,
) -> Result<&'a NbtCompound, SchematicError> {
    let value = require(compound, key, path)?;
    value
        .as_compound()
        .ok_or_else(|| mistyped(path, "Compound", value))
}

fn require_int(compound: &NbtCompound, key: &str, parent: &str) -> Result<i32, SchematicError> {
    let path = format!("{parent}.{key}");
    let value = require(compound, key, &path)?;
    value.as_int().ok_or_else(|| mistyped(&path, "Int", value))
}

fn mistyped(path: &str, expected: &str, found: &NbtValue) -> SchematicError {
    SchematicError::Format(format!(
        "{path}: expected {expected}, found {}",
        found.kind_name()
    ))
}
