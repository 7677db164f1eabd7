use rand::{Rng, SeedableRng, rngs::StdRng};

mod backtracker;
mod origin_shift;

pub use backtracker::Backtracker;
pub use origin_shift::OriginShift;

use crate::maze::Grid;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Backtracker,
    OriginShift,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Backtracker => write!(f, "Recursive Backtracker (randomized DFS)"),
            Algorithm::OriginShift => write!(f, "Origin Shift"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backtracker" => Ok(Algorithm::Backtracker),
            "origin-shift" => Ok(Algorithm::OriginShift),
            other => Err(format!(
                "unknown algorithm {:?}, expected \"backtracker\" or \"origin-shift\"",
                other
            )),
        }
    }
}

/// What a single engine step did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Carved into, or re-rooted toward, a new current cell.
    Advanced,
    /// Popped a backtrack point; no new cell was visited.
    Backtracked,
    /// Generation is finished; the step was a no-op.
    Complete,
}

/// The active generation engine. Both variants advance one step per call and
/// can be reset to their initial state on the same grid.
pub enum MazeEngine {
    Backtracker(Backtracker),
    OriginShift(OriginShift),
}

impl MazeEngine {
    /// Builds the engine for `algorithm` and initializes `grid` for it.
    pub fn new(algorithm: Algorithm, grid: &mut Grid) -> Self {
        match algorithm {
            Algorithm::Backtracker => MazeEngine::Backtracker(Backtracker::new(grid)),
            Algorithm::OriginShift => MazeEngine::OriginShift(OriginShift::new(grid)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            MazeEngine::Backtracker(_) => Algorithm::Backtracker,
            MazeEngine::OriginShift(_) => Algorithm::OriginShift,
        }
    }

    /// Advances the generator by exactly one step.
    pub fn step<R: Rng>(&mut self, grid: &mut Grid, rng: &mut R) -> StepResult {
        match self {
            MazeEngine::Backtracker(engine) => engine.step(grid, rng),
            MazeEngine::OriginShift(engine) => engine.step(grid, rng),
        }
    }

    /// Reinitializes the engine and the grid to their initial state.
    pub fn reset(&mut self, grid: &mut Grid) {
        match self {
            MazeEngine::Backtracker(engine) => engine.reset(grid),
            MazeEngine::OriginShift(engine) => engine.reset(grid),
        }
    }

    /// The backtracker's cursor, or the origin-shift root.
    pub fn current(&self) -> (u16, u16) {
        match self {
            MazeEngine::Backtracker(engine) => engine.current(),
            MazeEngine::OriginShift(engine) => engine.origin(),
        }
    }

    /// Whether the engine reached a terminal state. Origin shift never does.
    pub fn is_complete(&self) -> bool {
        match self {
            MazeEngine::Backtracker(engine) => engine.is_complete(),
            MazeEngine::OriginShift(_) => false,
        }
    }
}
