//! JSON export document and material summary.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use schem_rs_litematic::{PaletteEntry, Schematic};

#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub name: &'a str,
    pub source: &'static str,
    pub width: usize,
    pub height: usize,
    pub length: usize,
    pub palette: PaletteMap<'a>,
    /// Palette indices as `blocks[y][z][x]`.
    pub blocks: Vec<Vec<Vec<u32>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ExportMetadata<'a>>,
}

impl<'a> ExportDocument<'a> {
    pub fn new(name: &'a str, schematic: &'a Schematic) -> Self {
        let grid = &schematic.grid;
        let meta = &schematic.metadata;
        let metadata = (!meta.is_empty()).then(|| ExportMetadata {
            name: meta.name.as_deref(),
            author: meta.author.as_deref(),
            description: meta.description.as_deref(),
            region: &schematic.region_name,
            region_count: meta.region_count,
            version: meta.version,
            data_version: meta.data_version,
        });
        Self {
            name,
            source: "litematic",
            width: grid.width(),
            height: grid.height(),
            length: grid.length(),
            palette: PaletteMap(grid.palette()),
            blocks: grid.layers(),
            metadata,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Serializes as `{"0": "minecraft:air", "1": ...}` in palette order.
#[derive(Debug)]
pub struct PaletteMap<'a>(pub &'a [PaletteEntry]);

impl Serialize for PaletteMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.index.to_string(), &entry.name)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct ExportMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub region: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_version: Option<i32>,
}

/// Block counts by identifier, most common first, without skipped names.
pub fn material_summary(schematic: &Schematic, skip: &[String]) -> Vec<(String, usize)> {
    let palette = schematic.grid.palette();
    schematic
        .grid
        .material_counts()
        .into_iter()
        .map(|(index, count)| {
            let name = palette
                .get(index as usize)
                .map(|e| e.name.clone())
                .unwrap_or_else(|| format!("unknown:{index}"));
            (name, count)
        })
        .filter(|(name, _)| !skip.iter().any(|s| s == name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use schem_rs_litematic::{DecodeStats, Dimensions, SchematicMetadata, VoxelGrid};

    fn schematic(names: &[&str], indices: Vec<u32>, dims: (i32, i32, i32)) -> Schematic {
        let palette = names
            .iter()
            .enumerate()
            .map(|(i, n)| PaletteEntry {
                index: i as u32,
                name: n.to_string(),
            })
            .collect();
        let dims = Dimensions::from_declared(dims.0, dims.1, dims.2).unwrap();
        Schematic {
            root_name: String::new(),
            region_name: "main".into(),
            metadata: SchematicMetadata::default(),
            grid: VoxelGrid::build(dims, palette, indices).unwrap(),
            stats: DecodeStats::default(),
        }
    }

    #[test]
    fn document_shape() {
        let s = schematic(
            &["minecraft:air", "minecraft:stone"],
            vec![0, 1, 1, 0],
            (2, 2, 1),
        );
        let json = ExportDocument::new("house", &s).to_json(false).unwrap();
        assert_eq!(
            json,
            r#"{"name":"house","source":"litematic","width":2,"height":2,"length":1,"palette":{"0":"minecraft:air","1":"minecraft:stone"},"blocks":[[[0,1]],[[1,0]]]}"#
        );
    }

    #[test]
    fn palette_keys_keep_palette_order() {
        let names: Vec<String> = (0..12).map(|i| format!("minecraft:b{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let s = schematic(&refs, vec![0; 2], (2, 1, 1));
        let value: serde_json::Value =
            serde_json::from_str(&ExportDocument::new("x", &s).to_json(true).unwrap()).unwrap();
        assert_eq!(value["palette"]["11"], "minecraft:b11");

        let json = ExportDocument::new("x", &s).to_json(false).unwrap();
        let pos2 = json.find(r#""2":"#).unwrap();
        let pos10 = json.find(r#""10":"#).unwrap();
        assert!(pos2 < pos10);
    }

    #[test]
    fn metadata_included_when_present() {
        let mut s = schematic(&["minecraft:air"], vec![0], (1, 1, 1));
        s.metadata.author = Some("builder".into());
        let value: serde_json::Value =
            serde_json::from_str(&ExportDocument::new("x", &s).to_json(false).unwrap()).unwrap();
        assert_eq!(value["metadata"]["author"], "builder");
        assert_eq!(value["metadata"]["region"], "main");
        assert!(value["metadata"].get("name").is_none());
    }

    #[test]
    fn summary_skips_air() {
        let s = schematic(
            &["minecraft:air", "minecraft:stone", "minecraft:dirt"],
            vec![0, 0, 0, 1, 2, 2],
            (3, 2, 1),
        );
        let summary = material_summary(&s, &["minecraft:air".to_string()]);
        assert_eq!(
            summary,
            vec![
                ("minecraft:dirt".to_string(), 2),
                ("minecraft:stone".to_string(), 1),
            ]
        );
    }
}
