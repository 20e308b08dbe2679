use std::{ops::RangeInclusive, path::PathBuf, time::Duration};

use clap::Parser;
use rand::Rng;

use crate::{
    error::{MazeError, Result},
    generators::get_rng,
};

/// Smallest accepted width or height.
pub const MIN_DIMENSION: u8 = 3;
/// Widths drawn when none is given on the command line.
pub const RANDOM_WIDTH_RANGE: RangeInclusive<u8> = 3..=60;
/// Heights drawn when none is given on the command line.
pub const RANDOM_HEIGHT_RANGE: RangeInclusive<u8> = 3..=100;

/// Navigate a Kruskal-generated maze and watch BFS/DFS solve it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze width in cells. Random between 3 and 60 when omitted
    #[arg(long)]
    pub width: Option<u8>,

    /// Maze height in cells. Random between 3 and 100 when omitted
    #[arg(long)]
    pub height: Option<u8>,

    /// Random seed for dimensions and maze generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between animation ticks
    #[arg(long, default_value_t = 15)]
    pub tick_ms: u64,

    /// File that receives tracing output
    #[arg(long, default_value = "kruskal-maze.log")]
    pub log_file: PathBuf,
}

/// Settings fixed for the lifetime of one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub seed: Option<u64>,
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            seed: None,
            tick_interval: Duration::from_millis(15),
        }
    }
}

impl GameConfig {
    /// Resolves command line arguments, drawing any missing dimension at random.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut rng = get_rng(args.seed);
        let config = GameConfig {
            width: args
                .width
                .unwrap_or_else(|| rng.random_range(RANDOM_WIDTH_RANGE)),
            height: args
                .height
                .unwrap_or_else(|| rng.random_range(RANDOM_HEIGHT_RANGE)),
            seed: args.seed,
            tick_interval: Duration::from_millis(args.tick_ms),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
                min: MIN_DIMENSION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("kruskal-maze").chain(args.iter().copied()))
    }

    #[test]
    fn test_explicit_dimensions() {
        let config = GameConfig::from_args(&parse(&["--width", "12", "--height", "7"])).unwrap();
        assert_eq!((config.width, config.height), (12, 7));
        assert_eq!(config.tick_interval, Duration::from_millis(15));
    }

    #[test]
    fn test_random_dimensions_stay_in_range() {
        for seed in 0..50 {
            let seed = seed.to_string();
            let config = GameConfig::from_args(&parse(&["--seed", &seed])).unwrap();
            assert!(RANDOM_WIDTH_RANGE.contains(&config.width));
            assert!(RANDOM_HEIGHT_RANGE.contains(&config.height));
        }
    }

    #[test]
    fn test_seeded_dimensions_repeat() {
        let a = GameConfig::from_args(&parse(&["--seed", "99"])).unwrap();
        let b = GameConfig::from_args(&parse(&["--seed", "99"])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_small_dimensions() {
        let result = GameConfig::from_args(&parse(&["--width", "2", "--height", "9"]));
        assert_eq!(
            result,
            Err(MazeError::InvalidDimensions {
                width: 2,
                height: 9,
                min: MIN_DIMENSION
            })
        );
    }
}
