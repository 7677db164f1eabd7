use crate::maze::Direction;

/// Wall flags for one cell, `true` meaning the wall is present.
/// Walls are shared: opening a passage clears the flag on both facing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Walls {
    pub const SOLID: Walls = Walls {
        north: true,
        east: true,
        south: true,
        west: true,
    };

    /// Whether the wall on the given side is present.
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::North => self.north = present,
            Direction::East => self.east = present,
            Direction::South => self.south = present,
            Direction::West => self.west = present,
        }
    }
}

/// A single grid cell. `visited` belongs to the backtracker and `points_to`
/// to origin shift; an engine reset clears both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub walls: Walls,
    /// Set once the backtracker has entered this cell.
    pub visited: bool,
    /// Direction toward the one neighbor this cell feeds into; `None` only
    /// for the origin cell.
    pub points_to: Option<Direction>,
}

impl Cell {
    /// The initial cell value: all walls up, unvisited, unrooted.
    pub const SEALED: Cell = Cell {
        walls: Walls::SOLID,
        visited: false,
        points_to: None,
    };
}
