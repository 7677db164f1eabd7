use rand::Rng;

use crate::generators::StepResult;
use crate::maze::{Direction, Grid, Walls};

/// Origin-shift engine. Every cell except one (the origin) points at a
/// neighbor, and the pointers always form a spanning in-tree of the grid, so
/// the derived walls are a valid perfect maze after every single step. Each
/// step re-roots the tree one cell over; there is no terminal state.
pub struct OriginShift {
    origin: (u16, u16),
}

impl OriginShift {
    pub fn new(grid: &mut Grid) -> Self {
        let mut engine = OriginShift { origin: (0, 0) };
        engine.reset(grid);
        engine
    }

    /// The current root of the tree.
    pub fn origin(&self) -> (u16, u16) {
        self.origin
    }

    /// Rebuilds the initial spanning path: a serpentine walk over the rows
    /// (even rows east, odd rows west, row ends south), every cell pointing
    /// at its successor and the final cell becoming the origin.
    pub fn reset(&mut self, grid: &mut Grid) {
        grid.reset();
        let (width, height) = (grid.width(), grid.height());
        for y in 0..height {
            let eastward = y % 2 == 0;
            for x in 0..width {
                let points_to = if eastward && x + 1 < width {
                    Some(Direction::East)
                } else if !eastward && x > 0 {
                    Some(Direction::West)
                } else if y + 1 < height {
                    Some(Direction::South)
                } else {
                    None
                };
                grid[(x, y)].points_to = points_to;
            }
        }
        self.origin = if (height - 1) % 2 == 0 {
            (width - 1, height - 1)
        } else {
            (0, height - 1)
        };
        Self::recompute_walls(grid);
    }

    /// One re-rooting step: draw directions until one stays in bounds, point
    /// the old origin at that neighbor, unroot the neighbor, re-derive the
    /// walls. Swapping which end of the edge is rootless keeps the pointers
    /// a spanning tree, so the maze is complete after every step.
    pub fn step<R: Rng>(&mut self, grid: &mut Grid, rng: &mut R) -> StepResult {
        let (next, direction) = loop {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            if let Some(next) = grid.neighbor(self.origin, direction) {
                break (next, direction);
            }
        };
        grid[self.origin].points_to = Some(direction);
        grid[next].points_to = None;
        self.origin = next;
        Self::recompute_walls(grid);
        StepResult::Advanced
    }

    /// Derives the full wall configuration from the tree: seal every cell,
    /// then open the shared wall along each points-to edge. One pass over
    /// the grid per step, which the frame-gated stepping rate absorbs.
    fn recompute_walls(grid: &mut Grid) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                grid[(x, y)].walls = Walls::SOLID;
            }
        }
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if let Some(direction) = grid[(x, y)].points_to {
                    grid.open_wall_between((x, y), direction);
                }
            }
        }
    }
}
