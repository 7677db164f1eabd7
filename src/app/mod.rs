mod controller;

pub use controller::{RunController, RunState};

use std::time::Duration;

use rand::rngs::StdRng;

use crate::{
    config::Config,
    generators::{Algorithm, MazeEngine, StepResult, get_rng},
    maze::Grid,
};

/// External commands accepted from the display/UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Start,
    Stop,
    StepOnce,
    Reset,
    SetSpeed(f32),
    SelectAlgorithm(Algorithm),
}

/// One generation run: the grid, the active engine, its RNG and the stepper,
/// advanced cooperatively from the collaborator's frame loop.
pub struct Simulation {
    grid: Grid,
    engine: MazeEngine,
    rng: StdRng,
    controller: RunController,
    seed: Option<u64>,
}

impl Simulation {
    pub fn new(config: &Config) -> Self {
        let mut grid = Grid::new(config.width, config.height);
        let engine = MazeEngine::new(config.algorithm, &mut grid);
        Simulation {
            grid,
            engine,
            rng: get_rng(config.seed),
            controller: RunController::new(config.speed),
            seed: config.seed,
        }
    }

    /// Applies one external command. `Reset` re-derives the RNG from the
    /// configured seed so a seeded run replays identically; switching the
    /// algorithm rebuilds grid and engine state from scratch, since the two
    /// engines keep incompatible per-cell state.
    pub fn apply(&mut self, command: Command) {
        tracing::debug!(?command, "applying command");
        match command {
            Command::Start => self.controller.start(),
            Command::Stop => self.controller.stop(),
            Command::StepOnce => self.controller.step_once(),
            Command::SetSpeed(speed) => self.controller.set_speed(speed),
            Command::Reset => {
                self.engine.reset(&mut self.grid);
                self.rng = get_rng(self.seed);
            }
            Command::SelectAlgorithm(algorithm) => {
                if algorithm != self.engine.algorithm() {
                    self.engine = MazeEngine::new(algorithm, &mut self.grid);
                    self.rng = get_rng(self.seed);
                }
            }
        }
    }

    /// Per-frame entry point: feeds the elapsed time to the stepper and runs
    /// at most one engine step. Returns what the step did, or `None` if the
    /// timer held the engine back.
    pub fn advance(&mut self, dt: Duration) -> Option<StepResult> {
        if !self.controller.tick(dt) {
            return None;
        }
        Some(self.engine.step(&mut self.grid, &mut self.rng))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The backtracker's cursor or the origin cell.
    pub fn current(&self) -> (u16, u16) {
        self.engine.current()
    }

    pub fn is_complete(&self) -> bool {
        self.engine.is_complete()
    }

    pub fn state(&self) -> RunState {
        self.controller.state()
    }

    pub fn speed(&self) -> f32 {
        self.controller.speed()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.engine.algorithm()
    }
}
