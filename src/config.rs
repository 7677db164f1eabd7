use crate::generators::Algorithm;

/// Construction-time configuration for a generation run. The defaults mirror
/// the 10x10 grid the display collaborator shows out of the box.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub algorithm: Algorithm,
    /// Engine steps per second while playing.
    pub speed: f32,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Stop the headless driver after this many steps. Origin shift never
    /// completes on its own, so bounding the run is the caller's choice.
    pub max_steps: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 10,
            height: 10,
            algorithm: Algorithm::Backtracker,
            speed: 10.0,
            seed: None,
            max_steps: None,
        }
    }
}

impl Config {
    /// Parses `--flag value` pairs. Unknown flags and malformed values are
    /// reported as messages for the caller to print.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--width" => config.width = parse_value(&mut args, &flag)?,
                "--height" => config.height = parse_value(&mut args, &flag)?,
                "--algorithm" => config.algorithm = parse_value(&mut args, &flag)?,
                "--speed" => config.speed = parse_value(&mut args, &flag)?,
                "--seed" => config.seed = Some(parse_value(&mut args, &flag)?),
                "--steps" => config.max_steps = Some(parse_value(&mut args, &flag)?),
                other => return Err(format!("unrecognized argument: {}", other)),
            }
        }

        if config.width == 0 || config.height == 0 {
            return Err("width and height must be at least 1".to_string());
        }
        if config.width == 1 && config.height == 1 {
            return Err("a 1x1 grid has nothing to carve; give it at least two cells".to_string());
        }
        if !config.speed.is_finite() || config.speed <= 0.0 {
            return Err(format!("speed must be a positive number, got {}", config.speed));
        }
        Ok(config)
    }
}

fn parse_value<I, T>(args: &mut I, flag: &str) -> Result<T, String>
where
    I: Iterator<Item = String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = args
        .next()
        .ok_or_else(|| format!("{} expects a value", flag))?;
    value
        .parse()
        .map_err(|e| format!("invalid value {:?} for {}: {}", value, flag, e))
}
