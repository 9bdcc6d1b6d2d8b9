//! A one-button arcade game for the terminal.
//!
//! Hold the ascend key to climb, let go to fall, and slip through the gap in
//! the scrolling obstacle. Each obstacle passed scores a point; touching an
//! obstacle or the edge of the field ends the run.
//!
//! The game logic ([`Session`], [`Player`], [`Obstacle`], [`judge`]) is
//! independent of the terminal. [`Platform`] bundles the terminal, assets,
//! audio and the frame clock, and [`app::run`] drives both.

pub mod app;
pub mod assets;
pub mod config;
pub mod error;
pub mod font;
pub mod geom;
pub mod input;
pub mod judge;
pub mod menu;
pub mod obstacle;
pub mod pixels;
pub mod platform;
pub mod player;
pub mod scene;
pub mod session;
pub mod sound;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use judge::{Verdict, judge};
pub use menu::{Menu, MenuAction};
pub use obstacle::Obstacle;
pub use platform::Platform;
pub use player::Player;
pub use session::{Control, Phase, Session, TickReport};
