//! A* over a single plane's walkability mask.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::state::{Direction, PlaneMask};

const CARDINAL_COST: u32 = 2;
const DIAGONAL_COST: u32 = 3;

/// Eight-way grid pathfinder bound to a walkability snapshot.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    mask: PlaneMask,
}

impl Pathfinder {
    pub fn new(mask: PlaneMask) -> Self {
        Self { mask }
    }

    fn index(&self, (x, y): (i32, i32)) -> usize {
        y as usize * self.mask.width as usize + x as usize
    }

    fn in_bounds(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && y >= 0 && x < self.mask.width as i32 && y < self.mask.height as i32
    }

    fn heuristic(from: (i32, i32), to: (i32, i32)) -> u32 {
        let dx = from.0.abs_diff(to.0);
        let dy = from.1.abs_diff(to.1);
        CARDINAL_COST * dx.max(dy) + (DIAGONAL_COST - CARDINAL_COST) * dx.min(dy)
    }

    /// Steps from `start` to `goal`, excluding `start` and including `goal`.
    ///
    /// The goal cell is always enterable so that an occupied or unwalkable
    /// target tile can still be approached. Returns an empty path when `goal`
    /// is unreachable or equal to `start`.
    pub fn path(&self, start: (i32, i32), goal: (i32, i32)) -> Vec<(i32, i32)> {
        if start == goal || !self.in_bounds(start) || !self.in_bounds(goal) {
            return Vec::new();
        }

        let cells = self.mask.width as usize * self.mask.height as usize;
        let mut cost = vec![u32::MAX; cells];
        let mut came_from: Vec<Option<(i32, i32)>> = vec![None; cells];
        let mut open = BinaryHeap::new();
        let mut sequence = 0u32;

        cost[self.index(start)] = 0;
        open.push(Reverse((Self::heuristic(start, goal), sequence, start)));

        while let Some(Reverse((_, _, current))) = open.pop() {
            if current == goal {
                break;
            }
            let current_cost = cost[self.index(current)];

            for direction in Direction::ALL {
                let next = (current.0 + direction.dx, current.1 + direction.dy);
                if !self.in_bounds(next) {
                    continue;
                }
                if next != goal && !self.mask.is_walkable(next.0, next.1) {
                    continue;
                }

                let step = if direction.is_diagonal() {
                    DIAGONAL_COST
                } else {
                    CARDINAL_COST
                };
                let next_cost = current_cost + step;
                let slot = self.index(next);
                if next_cost < cost[slot] {
                    cost[slot] = next_cost;
                    came_from[slot] = Some(current);
                    sequence += 1;
                    open.push(Reverse((
                        next_cost + Self::heuristic(next, goal),
                        sequence,
                        next,
                    )));
                }
            }
        }

        let mut path = Vec::new();
        let mut cursor = goal;
        while cursor != start {
            let Some(previous) = came_from[self.index(cursor)] else {
                return Vec::new();
            };
            path.push(cursor);
            cursor = previous;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GridDimensions, Position, TerrainKind, TileGrid};

    fn pathfinder(grid: &TileGrid) -> Pathfinder {
        Pathfinder::new(grid.plane_walkability(0))
    }

    #[test]
    fn straight_line_excludes_start_and_includes_goal() {
        let grid = TileGrid::walled(GridDimensions::new(8, 3, 1));
        let path = pathfinder(&grid).path((1, 1), (4, 1));
        assert_eq!(path, vec![(2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn routes_around_walls() {
        let mut grid = TileGrid::walled(GridDimensions::new(7, 7, 1));
        for y in 1..5 {
            grid.set(Position::new(3, y, 0), TerrainKind::Wall);
        }
        let path = pathfinder(&grid).path((1, 1), (5, 1));
        assert_eq!(path.last(), Some(&(5, 1)));
        assert!(path.iter().all(|&(x, y)| grid.is_walkable(Position::new(x, y, 0))));
        assert!(path.iter().any(|&(_, y)| y == 5));
    }

    #[test]
    fn unreachable_goal_yields_empty_path() {
        let mut grid = TileGrid::walled(GridDimensions::new(7, 5, 1));
        for y in 0..5 {
            grid.set(Position::new(3, y, 0), TerrainKind::Hull);
        }
        assert!(pathfinder(&grid).path((1, 1), (5, 3)).is_empty());
    }

    #[test]
    fn adjacent_goal_is_single_step() {
        let grid = TileGrid::walled(GridDimensions::new(5, 5, 1));
        assert_eq!(pathfinder(&grid).path((1, 1), (2, 2)), vec![(2, 2)]);
    }
}
