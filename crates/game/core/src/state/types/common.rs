use std::fmt;

/// Opaque identity of an entity tracked by the [`EntityStore`](super::EntityStore).
///
/// Identifiers are allocated monotonically and never reused, so a stale id
/// simply stops resolving once its entity is gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position. `z` selects the plane (deck) of the tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the neighbouring position one step in `direction` on the same plane.
    pub fn step(self, direction: Direction) -> Self {
        Self::new(self.x + direction.dx, self.y + direction.dy, self.z)
    }

    /// Returns true if `other` is at most one tile away on the same plane
    /// (Chebyshev distance ≤ 1). A position is adjacent to itself.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.z == other.z && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }

    /// Returns true if moving from `self` to `other` changes both planar axes.
    pub fn is_diagonal_to(self, other: Position) -> bool {
        self.x != other.x && self.y != other.y
    }

    pub fn with_xy(self, x: i32, y: i32) -> Self {
        Self::new(x, y, self.z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Planar step direction. Screen convention: `dy = -1` is up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const NORTH: Self = Self::new(0, -1);
    pub const SOUTH: Self = Self::new(0, 1);
    pub const EAST: Self = Self::new(1, 0);
    pub const WEST: Self = Self::new(-1, 0);
    pub const NORTH_EAST: Self = Self::new(1, -1);
    pub const NORTH_WEST: Self = Self::new(-1, -1);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    pub const SOUTH_WEST: Self = Self::new(-1, 1);

    pub const ALL: [Direction; 8] = [
        Self::NORTH,
        Self::SOUTH,
        Self::EAST,
        Self::WEST,
        Self::NORTH_EAST,
        Self::NORTH_WEST,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
    ];

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Unit step from `from` towards `to`, or `None` when they share x and y.
    pub fn towards(from: Position, to: Position) -> Option<Self> {
        let step = Self::new((to.x - from.x).signum(), (to.y - from.y).signum());
        (step.dx != 0 || step.dy != 0).then_some(step)
    }

    pub fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

/// Discrete unit of virtual time used only for turn ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

/// Saturates at `u64::MAX` instead of wrapping.
impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_chebyshev_on_one_plane() {
        let origin = Position::new(5, 5, 0);
        assert!(origin.is_adjacent(Position::new(6, 6, 0)));
        assert!(origin.is_adjacent(Position::new(4, 5, 0)));
        assert!(origin.is_adjacent(origin));
        assert!(!origin.is_adjacent(Position::new(7, 5, 0)));
        assert!(!origin.is_adjacent(Position::new(5, 5, 1)));
    }

    #[test]
    fn towards_uses_axis_signs() {
        let from = Position::new(2, 2, 0);
        assert_eq!(
            Direction::towards(from, Position::new(9, -4, 0)),
            Some(Direction::NORTH_EAST)
        );
        assert_eq!(
            Direction::towards(from, Position::new(2, 8, 0)),
            Some(Direction::SOUTH)
        );
        assert_eq!(Direction::towards(from, from), None);
    }

    #[test]
    fn tick_addition_saturates() {
        assert_eq!(Tick(40) + 60, Tick(100));
        assert_eq!(Tick(u64::MAX - 1) + 500, Tick(u64::MAX));
    }
}
