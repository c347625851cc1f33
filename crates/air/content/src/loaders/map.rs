//! Map data loader.
//!
//! Loads map size, playable bounds and terrain heights from TOML files.

use std::path::Path;

use air_core::{AirError, CPos, MapBounds, MapDimensions, OracleError, StaticMap};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for TOML files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataToml {
    width: u32,
    height: u32,
    #[serde(default)]
    base_height: i32,
    #[serde(default)]
    bounds: Option<MapBounds>,
    #[serde(default)]
    heights: Vec<HeightToml>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HeightToml {
    x: i32,
    y: i32,
    height: i32,
}

/// Loader for map data from TOML files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map from a TOML file.
    pub fn load(path: &Path) -> LoadResult<StaticMap> {
        let content = read_file(path)?;
        let map = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load map from {}: {}", path.display(), e))?;

        tracing::info!("Loaded map from {}", path.display());
        Ok(map)
    }

    /// Parse a map from TOML text.
    ///
    /// Missing bounds default to the whole map; cells without a height entry
    /// use `base_height`.
    pub fn parse(content: &str) -> LoadResult<StaticMap> {
        let data: MapDataToml = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map TOML: {}", e))?;

        let invalid = |e: OracleError| anyhow::anyhow!("Invalid map: {} [{}]", e, e.error_code());

        let dimensions = MapDimensions::new(data.width, data.height);
        let mut map = StaticMap::flat(dimensions, data.base_height).map_err(invalid)?;

        if let Some(bounds) = data.bounds {
            map = map.with_bounds(bounds).map_err(invalid)?;
        }

        for entry in data.heights {
            map = map
                .with_height(CPos::new(entry.x, entry.y), entry.height)
                .map_err(invalid)?;
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use air_core::MapOracle;

    #[test]
    fn parses_full_map() {
        let map = MapLoader::parse(
            r#"
            width = 16
            height = 12
            base_height = 100

            [bounds]
            left = 1
            top = 1
            right = 15
            bottom = 11

            [[heights]]
            x = 4
            y = 5
            height = 600
            "#,
        )
        .expect("valid map");

        assert_eq!(map.dimensions(), MapDimensions::new(16, 12));
        assert_eq!(map.bounds(), MapBounds::new(1, 1, 15, 11));
        assert_eq!(map.terrain_height(CPos::new(4, 5)), Some(600));
        assert_eq!(map.terrain_height(CPos::new(0, 0)), Some(100));
        assert!(!map.contains(CPos::new(0, 0)));
    }

    #[test]
    fn bounds_default_to_whole_map() {
        let map = MapLoader::parse("width = 4\nheight = 4\n").expect("valid map");
        assert!(map.contains(CPos::new(0, 0)));
        assert!(map.contains(CPos::new(3, 3)));
    }

    #[test]
    fn rejects_heights_outside_map() {
        let err = MapLoader::parse(
            r#"
            width = 4
            height = 4

            [[heights]]
            x = 9
            y = 0
            height = 10
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("ORACLE_CELL_OUTSIDE_MAP"), "{err}");
    }

    #[test]
    fn rejects_empty_map() {
        assert!(MapLoader::parse("width = 0\nheight = 4\n").is_err());
    }
}
