use std::time::{Duration, Instant};

use mazeshift::{
    app::{Command, Simulation},
    config::Config,
};
use tracing_subscriber::EnvFilter;

/// Frame interval for the driver loop. Sleeping here stands in for the
/// renderer's frame pacing; the engine itself never sleeps.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> std::io::Result<()> {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!(
                "usage: mazeshift [--width N] [--height N] \
[--algorithm backtracker|origin-shift] [--speed STEPS_PER_SEC] [--seed N] [--steps N]"
            );
            return Ok(());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        width = config.width,
        height = config.height,
        algorithm = %config.algorithm,
        speed = config.speed,
        seed = config.seed,
        "starting generation"
    );

    let max_steps = config.max_steps;
    let mut simulation = Simulation::new(&config);
    simulation.apply(Command::Start);

    let mut steps: u64 = 0;
    let mut last = Instant::now();
    loop {
        std::thread::sleep(FRAME);
        let now = Instant::now();
        let dt = now - last;
        last = now;

        let Some(result) = simulation.advance(dt) else {
            continue;
        };
        steps += 1;
        tracing::debug!(?result, current = ?simulation.current(), steps, "engine step");

        if simulation.is_complete() {
            tracing::info!(steps, "generation finished");
            break;
        }
        if max_steps.is_some_and(|limit| steps >= limit) {
            tracing::info!(steps, "step limit reached");
            break;
        }
    }
    Ok(())
}
