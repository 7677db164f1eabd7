use rand::Rng;

use crate::generators::StepResult;
use crate::maze::{Direction, Grid};

/// Recursive-backtracker (randomized DFS) engine. One call to [`step`]
/// performs one carve or one backtrack; an explicit stack stands in for the
/// recursion so generation can be paused between any two steps.
///
/// The stack records a cell only when it was left with more than one
/// unexplored neighbor: a single-choice corridor can never offer another
/// branch, so it is not worth returning to.
///
/// [`step`]: Backtracker::step
pub struct Backtracker {
    current: (u16, u16),
    stack: Vec<(u16, u16)>,
    complete: bool,
}

impl Backtracker {
    pub fn new(grid: &mut Grid) -> Self {
        let mut engine = Backtracker {
            current: (0, 0),
            stack: Vec::new(),
            complete: false,
        };
        engine.reset(grid);
        engine
    }

    /// The cell the generator is carving from.
    pub fn current(&self) -> (u16, u16) {
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Back to the initial state: all cells sealed and unvisited, cursor at
    /// the first cell, stack empty.
    pub fn reset(&mut self, grid: &mut Grid) {
        grid.reset();
        self.current = (0, 0);
        self.stack.clear();
        self.complete = false;
    }

    /// Advances the generator by one step: either carves into a random
    /// unvisited neighbor, or backtracks to the nearest recorded branch
    /// point. Once complete, further calls are no-ops.
    pub fn step<R: Rng>(&mut self, grid: &mut Grid, rng: &mut R) -> StepResult {
        if self.complete {
            return StepResult::Complete;
        }

        grid[self.current].visited = true;

        let candidates = Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let neighbor = grid.neighbor(self.current, direction)?;
                (!grid[neighbor].visited).then_some((neighbor, direction))
            })
            .collect::<Vec<_>>();

        match candidates.len() {
            0 => match self.stack.pop() {
                Some(cell) => {
                    self.current = cell;
                    StepResult::Backtracked
                }
                None => {
                    self.complete = true;
                    tracing::info!(current = ?self.current, "maze generation complete");
                    StepResult::Complete
                }
            },
            len => {
                // A lone candidate leaves nothing to come back for
                if len > 1 {
                    self.stack.push(self.current);
                }
                let (neighbor, direction) = candidates[rng.random_range(0..len)];
                grid.open_wall_between(self.current, direction);
                self.current = neighbor;
                StepResult::Advanced
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::maze::Walls;
    use rand::RngCore;

    /// Yields zeros forever, so every uniform draw lands on the first
    /// candidate.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    fn run_to_completion<R: Rng>(
        engine: &mut Backtracker,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Vec<(StepResult, (u16, u16))> {
        let cap = grid.cells().len() * 4 + 4;
        let mut trace = Vec::new();
        for _ in 0..cap {
            let result = engine.step(grid, rng);
            trace.push((result, engine.current()));
            if result == StepResult::Complete {
                return trace;
            }
        }
        panic!("generation did not complete within {} steps", cap);
    }

    fn open_edge_count(grid: &Grid) -> usize {
        let mut edges = 0;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if x + 1 < grid.width() && !grid[(x, y)].walls.east {
                    edges += 1;
                }
                if y + 1 < grid.height() && !grid[(x, y)].walls.south {
                    edges += 1;
                }
            }
        }
        edges
    }

    /// Number of cells reachable from (0, 0) through open walls.
    fn reachable_from_start(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.cells().len()];
        let mut queue = std::collections::VecDeque::from([(0u16, 0u16)]);
        seen[0] = true;
        let mut count = 0;
        while let Some(coord) = queue.pop_front() {
            count += 1;
            for direction in Direction::ALL {
                if grid[coord].walls.has(direction) {
                    continue;
                }
                let neighbor = grid
                    .neighbor(coord, direction)
                    .expect("open wall on the grid boundary");
                let index = neighbor.1 as usize * grid.width() as usize + neighbor.0 as usize;
                if !seen[index] {
                    seen[index] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        count
    }

    fn assert_wall_symmetry(grid: &Grid) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                for direction in Direction::ALL {
                    if let Some(neighbor) = grid.neighbor((x, y), direction) {
                        assert_eq!(
                            grid[(x, y)].walls.has(direction),
                            grid[neighbor].walls.has(direction.opposite()),
                            "asymmetric wall between {:?} and {:?}",
                            (x, y),
                            neighbor
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_generates_perfect_maze() {
        for (width, height) in [(3, 3), (5, 4), (1, 8), (2, 2)] {
            let mut grid = Grid::new(width, height);
            let mut engine = Backtracker::new(&mut grid);
            let mut rng = get_rng(Some(42));
            run_to_completion(&mut engine, &mut grid, &mut rng);

            let cells = grid.cells().len();
            assert!(grid.cells().iter().all(|cell| cell.visited));
            assert_eq!(open_edge_count(&grid), cells - 1);
            assert_eq!(reachable_from_start(&grid), cells);
            assert_wall_symmetry(&grid);
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = || {
            let mut grid = Grid::new(6, 5);
            let mut engine = Backtracker::new(&mut grid);
            let mut rng = get_rng(Some(7));
            let trace = run_to_completion(&mut engine, &mut grid, &mut rng);
            (trace, grid.cells().to_vec())
        };
        let (trace_a, cells_a) = run();
        let (trace_b, cells_b) = run();
        assert_eq!(trace_a, trace_b);
        assert_eq!(cells_a, cells_b);
    }

    #[test]
    fn test_first_candidate_walk_on_3x3() {
        // With a zero RNG the cursor snakes east then down then back west,
        // carving into the 8 remaining cells before unwinding the stack.
        let mut grid = Grid::new(3, 3);
        let mut engine = Backtracker::new(&mut grid);
        let trace = run_to_completion(&mut engine, &mut grid, &mut ZeroRng);

        let advances = trace
            .iter()
            .filter(|(result, _)| *result == StepResult::Advanced)
            .count();
        let backtracks = trace
            .iter()
            .filter(|(result, _)| *result == StepResult::Backtracked)
            .count();
        assert_eq!(advances, 8); // 9 cells, the first is never carved into
        assert_eq!(backtracks, 4);

        assert!(grid[(2, 2)].visited);
        assert_eq!(open_edge_count(&grid), 8);
        assert_eq!(reachable_from_start(&grid), 9);
    }

    #[test]
    fn test_step_after_complete_is_noop() {
        let mut grid = Grid::new(3, 3);
        let mut engine = Backtracker::new(&mut grid);
        let mut rng = get_rng(Some(1));
        run_to_completion(&mut engine, &mut grid, &mut rng);

        let snapshot = grid.cells().to_vec();
        assert_eq!(engine.step(&mut grid, &mut rng), StepResult::Complete);
        assert_eq!(grid.cells(), &snapshot[..]);
    }

    #[test]
    fn test_single_choice_corridor_never_backtracks() {
        // A 1-wide grid only ever offers one candidate, so nothing is pushed
        // and the run ends without a single backtrack step.
        let mut grid = Grid::new(1, 8);
        let mut engine = Backtracker::new(&mut grid);
        let mut rng = get_rng(Some(3));
        let trace = run_to_completion(&mut engine, &mut grid, &mut rng);
        assert!(
            trace
                .iter()
                .all(|(result, _)| *result != StepResult::Backtracked)
        );
    }

    #[test]
    fn test_unvisited_cells_stay_sealed() {
        let mut grid = Grid::new(5, 5);
        let mut engine = Backtracker::new(&mut grid);
        let mut rng = get_rng(Some(9));
        for _ in 0..7 {
            engine.step(&mut grid, &mut rng);
        }
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let cell = grid[(x, y)];
                // the cursor's cell is carved open before it is marked visited
                if !cell.visited && (x, y) != engine.current() {
                    assert_eq!(cell.walls, Walls::SOLID);
                }
            }
        }
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut grid = Grid::new(4, 4);
        let mut engine = Backtracker::new(&mut grid);
        let mut rng = get_rng(Some(2));
        for _ in 0..5 {
            engine.step(&mut grid, &mut rng);
        }
        engine.reset(&mut grid);
        assert_eq!(engine.current(), (0, 0));
        assert!(!engine.is_complete());
        assert!(grid.cells().iter().all(|cell| !cell.visited));
        assert!(grid.cells().iter().all(|cell| cell.walls == Walls::SOLID));
    }
}
