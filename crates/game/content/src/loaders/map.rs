//! Deck layout loader.
//!
//! A layout is a list of planes, each a list of equal-width text rows. Every
//! character is looked up in the legend to get its terrain. Entities are
//! listed separately as placements.
//!
//! ```ron
//! (
//!     legend: { '#': Wall, '.': Floor },
//!     planes: [[
//!         "#####",
//!         "#...#",
//!         "#####",
//!     ]],
//!     placements: [
//!         (position: (x: 1, y: 1, z: 0), archetype: Player),
//!         (position: (x: 3, y: 1, z: 0), archetype: Item(name: "wrench")),
//!     ],
//! )
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use game_core::{GeneratedWorld, GridDimensions, Placement, Position, TerrainKind, TileGrid};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Layout data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutRon {
    #[serde(default = "default_legend")]
    legend: BTreeMap<char, TerrainKind>,
    planes: Vec<Vec<String>>,
    #[serde(default)]
    placements: Vec<Placement>,
}

fn default_legend() -> BTreeMap<char, TerrainKind> {
    BTreeMap::from([
        ('.', TerrainKind::Floor),
        (' ', TerrainKind::Space),
        ('#', TerrainKind::Wall),
        ('=', TerrainKind::ReinforcedWall),
        ('X', TerrainKind::Hull),
    ])
}

/// Loader for deck layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<GeneratedWorld> {
        let content = read_file(path)?;
        let layout = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            placements = layout.placements.len(),
            "layout loaded"
        );
        Ok(layout)
    }

    /// Parse a layout from RON text.
    pub fn parse(content: &str) -> LoadResult<GeneratedWorld> {
        let data: LayoutRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let grid = build_grid(&data.legend, &data.planes)?;
        for placement in &data.placements {
            if !grid.contains(placement.position) {
                anyhow::bail!(
                    "Placement {} at {} lies outside the {}x{}x{} grid",
                    placement.archetype,
                    placement.position,
                    grid.dimensions().width,
                    grid.dimensions().height,
                    grid.dimensions().depth,
                );
            }
        }

        Ok(GeneratedWorld {
            grid,
            placements: data.placements,
        })
    }
}

fn build_grid(legend: &BTreeMap<char, TerrainKind>, planes: &[Vec<String>]) -> LoadResult<TileGrid> {
    let Some(first) = planes.first() else {
        anyhow::bail!("Layout has no planes");
    };
    let height = first.len();
    let width = first.first().map_or(0, |row| row.chars().count());
    if width == 0 || height == 0 {
        anyhow::bail!("Layout plane 0 is empty");
    }

    let dimensions = GridDimensions::new(width as u32, height as u32, planes.len() as u32);
    let mut grid = TileGrid::filled(dimensions, TerrainKind::Space);

    for (z, rows) in planes.iter().enumerate() {
        if rows.len() != height {
            anyhow::bail!(
                "Plane {} has {} rows, expected {}",
                z,
                rows.len(),
                height
            );
        }
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                anyhow::bail!(
                    "Row {} of plane {} has {} cells, expected {}",
                    y,
                    z,
                    row.chars().count(),
                    width
                );
            }
            for (x, glyph) in row.chars().enumerate() {
                let terrain = legend.get(&glyph).copied().ok_or_else(|| {
                    anyhow::anyhow!("Unknown terrain glyph {:?} at ({}, {}, {})", glyph, x, y, z)
                })?;
                grid.set(Position::new(x as i32, y as i32, z as i32), terrain);
            }
        }
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Archetype;

    const SMALL: &str = r######"(
        planes: [[
            "#####",
            "#...#",
            "#.=.#",
            "#####",
        ]],
        placements: [
            (position: (x: 1, y: 1, z: 0), archetype: Player),
            (position: (x: 3, y: 2, z: 0), archetype: Item(name: "spare drive core", drive_core: true)),
        ],
    )"######;

    #[test]
    fn parses_rows_with_default_legend() {
        let layout = MapLoader::parse(SMALL).unwrap();

        assert_eq!(layout.grid.dimensions(), GridDimensions::new(5, 4, 1));
        assert_eq!(
            layout.grid.terrain(Position::new(2, 2, 0)),
            Some(TerrainKind::ReinforcedWall)
        );
        assert!(layout.grid.is_walkable(Position::new(1, 1, 0)));
        assert_eq!(layout.placements.len(), 2);
        assert_eq!(layout.placements[0].archetype, Archetype::Player);
        assert_eq!(
            layout.placements[1].archetype,
            Archetype::Item {
                name: "spare drive core".into(),
                drive_core: true,
            }
        );
    }

    #[test]
    fn custom_legend_replaces_default() {
        let layout = MapLoader::parse(
            r#"(
                legend: { 'o': Floor, 'H': Hull },
                planes: [["HHH", "HoH", "HHH"], ["HHH", "HHH", "HHH"]],
            )"#,
        )
        .unwrap();

        assert_eq!(layout.grid.dimensions().depth, 2);
        assert!(layout.grid.is_walkable(Position::new(1, 1, 0)));
        assert!(!layout.grid.is_walkable(Position::new(1, 1, 1)));
        assert!(layout.placements.is_empty());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let error = MapLoader::parse(r######"(planes: [["###", "#."]])"######).unwrap_err();
        assert!(error.to_string().contains("Row 1 of plane 0"));
    }

    #[test]
    fn unknown_glyph_is_rejected() {
        let error = MapLoader::parse(r######"(planes: [["#?#"]])"######).unwrap_err();
        assert!(error.to_string().contains("Unknown terrain glyph"));
    }

    #[test]
    fn placements_must_lie_inside_the_grid() {
        let error = MapLoader::parse(
            r#"(
                planes: [["..."]],
                placements: [(position: (x: 7, y: 0, z: 0), archetype: Robot)],
            )"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("outside"));
    }
}
