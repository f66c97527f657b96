use super::Position;

/// Canonical terrain classes for grid cells.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TerrainKind {
    #[default]
    Floor,
    /// Open vacuum outside the hull. Walkable.
    Space,
    Wall,
    ReinforcedWall,
    Hull,
}

impl TerrainKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, TerrainKind::Floor | TerrainKind::Space)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.z >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
            && position.z < self.depth as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position).then(|| {
            let (w, h) = (self.width as usize, self.height as usize);
            position.z as usize * w * h + position.y as usize * w + position.x as usize
        })
    }
}

/// Static terrain produced by the world generator. Only walkability is read
/// by the turn engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    dimensions: GridDimensions,
    cells: Vec<TerrainKind>,
}

impl TileGrid {
    /// Creates a grid filled with `fill`.
    pub fn filled(dimensions: GridDimensions, fill: TerrainKind) -> Self {
        let len = dimensions.width as usize * dimensions.height as usize * dimensions.depth as usize;
        Self {
            dimensions,
            cells: vec![fill; len],
        }
    }

    /// Creates a walled room: walls on the outer ring of every plane, floor inside.
    pub fn walled(dimensions: GridDimensions) -> Self {
        let mut grid = Self::filled(dimensions, TerrainKind::Floor);
        for z in 0..dimensions.depth as i32 {
            for y in 0..dimensions.height as i32 {
                for x in 0..dimensions.width as i32 {
                    let edge = x == 0
                        || y == 0
                        || x == dimensions.width as i32 - 1
                        || y == dimensions.height as i32 - 1;
                    if edge {
                        grid.set(Position::new(x, y, z), TerrainKind::Wall);
                    }
                }
            }
        }
        grid
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.dimensions.index(position).map(|i| self.cells[i])
    }

    /// Overwrites a cell. Returns false if `position` is out of bounds.
    pub fn set(&mut self, position: Position, terrain: TerrainKind) -> bool {
        match self.dimensions.index(position) {
            Some(i) => {
                self.cells[i] = terrain;
                true
            }
            None => false,
        }
    }

    /// Out-of-bounds positions are never walkable.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.terrain(position).is_some_and(TerrainKind::is_walkable)
    }

    /// Row-major walkability mask of one plane, indexed `y * width + x`.
    pub fn plane_walkability(&self, z: i32) -> PlaneMask {
        let GridDimensions { width, height, .. } = self.dimensions;
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(self.is_walkable(Position::new(x, y, z)));
            }
        }
        PlaneMask {
            width,
            height,
            cells,
        }
    }
}

/// Snapshot of one plane's walkability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaneMask {
    pub width: u32,
    pub height: u32,
    cells: Vec<bool>,
}

impl PlaneMask {
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && x < self.width as i32
            && y < self.height as i32
            && self.cells[y as usize * self.width as usize + x as usize]
    }
}
