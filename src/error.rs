use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A `GameConfig` the entities cannot run with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("playfield must have positive dimensions, got {width}x{height}")]
    EmptyField { width: f64, height: f64 },
    #[error("frame rate must be at least 1")]
    ZeroFps,
    #[error("player size must be positive, got {width}x{height}")]
    EmptyPlayer { width: f64, height: f64 },
    #[error("obstacle width must be positive, got {0}")]
    EmptyObstacle(f64),
    #[error("gap of {gap} with margin {margin} does not fit a playfield {height} high")]
    GapDoesNotFit { gap: i32, margin: i32, height: f64 },
}

/// An optional image that could not be loaded.
#[derive(Error, Debug)]
#[error("failed to load asset {}", path.display())]
pub struct AssetError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("terminal I/O error")]
    Io {
        #[from]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
