use std::time::Duration;

/// Whether the engine advances on a timer, sits still, or advances exactly
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Playing,
    Paused,
    SingleStep,
}

/// Time gate in front of the active engine: at most one step per tick, and
/// while playing only once enough frame time has accumulated for the
/// configured speed.
#[derive(Debug)]
pub struct RunController {
    state: RunState,
    speed: f32,
    accumulator: Duration,
}

impl RunController {
    /// Slowest supported stepping rate, in steps per second.
    pub const MIN_SPEED: f32 = 1.0;
    /// Fastest supported stepping rate, in steps per second.
    pub const MAX_SPEED: f32 = 60.0;

    pub fn new(speed: f32) -> Self {
        RunController {
            state: RunState::Paused,
            speed: speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED),
            accumulator: Duration::ZERO,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn start(&mut self) {
        self.state = RunState::Playing;
    }

    /// Pauses stepping; stale frame time is dropped so resuming does not
    /// fire instantly.
    pub fn stop(&mut self) {
        self.state = RunState::Paused;
        self.accumulator = Duration::ZERO;
    }

    /// Requests exactly one step regardless of the timer.
    pub fn step_once(&mut self) {
        self.state = RunState::SingleStep;
    }

    /// Stepping rate in steps per second, clamped to the supported range.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED);
    }

    fn step_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.speed)
    }

    /// Feeds one frame's elapsed time; returns whether the engine should
    /// step this tick. A single-step request fires immediately and reverts
    /// to paused.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.state {
            RunState::Playing => {
                self.accumulator += dt;
                if self.accumulator >= self.step_interval() {
                    self.accumulator = Duration::ZERO;
                    true
                } else {
                    false
                }
            }
            RunState::SingleStep => {
                self.state = RunState::Paused;
                true
            }
            RunState::Paused => false,
        }
    }
}
