//! Game tunables.
//!
//! Everything the entities need is a constant of the game. `GameConfig`
//! gathers those constants in one place so tests can build odd-sized fields
//! without touching globals.

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub fps: u32,

    // Player
    pub gravity: f64,
    /// Velocity set on an ascend frame (negative = upward).
    pub thrust: f64,
    pub player_spawn: (f64, f64),
    pub player_width: f64,
    pub player_height: f64,

    // Obstacle
    pub obstacle_width: f64,
    pub gap_height: i32,
    /// Minimum distance between the gap and the top/bottom edges.
    pub gap_margin: i32,
    pub obstacle_speed: f64,
    /// Added to the speed every frame once the score reaches `ramp_score`.
    pub speed_ramp: f64,
    pub ramp_score: u32,
    /// Added to the speed every time the obstacle recycles.
    pub recycle_bump: f64,
    /// The obstacle recycles once its x is at or below this.
    pub recycle_x: f64,

    // Assets
    pub background_path: PathBuf,
    pub sprite_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        let field_height = 400.0;
        Self {
            field_width: 600.0,
            field_height,
            fps: 60,
            gravity: 0.5,
            thrust: -5.0,
            player_spawn: (50.0, (field_height / 2.0).floor()),
            player_width: 35.0,
            player_height: 35.0,
            obstacle_width: 20.0,
            gap_height: 120,
            gap_margin: 80,
            obstacle_speed: 5.0,
            speed_ramp: 0.01,
            ramp_score: 4,
            recycle_bump: 0.1,
            recycle_x: -20.0,
            background_path: PathBuf::from("background.png"),
            sprite_path: PathBuf::from("player.png"),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if !(self.player_width > 0.0 && self.player_height > 0.0) {
            return Err(ConfigError::EmptyPlayer {
                width: self.player_width,
                height: self.player_height,
            });
        }
        if !(self.obstacle_width > 0.0) {
            return Err(ConfigError::EmptyObstacle(self.obstacle_width));
        }
        let range = self.gap_range();
        if self.gap_height <= 0 || self.gap_margin < 0 || range.is_empty() {
            return Err(ConfigError::GapDoesNotFit {
                gap: self.gap_height,
                margin: self.gap_margin,
                height: self.field_height,
            });
        }
        Ok(())
    }

    /// Valid values for an obstacle's gap start offset.
    pub fn gap_range(&self) -> RangeInclusive<i32> {
        let top = self.gap_margin;
        let bottom = self.field_height as i32 - self.gap_height - self.gap_margin;
        top..=bottom
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_gap_range() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.gap_range(), 80..=200);
        assert_eq!(cfg.player_spawn, (50.0, 200.0));
    }

    #[test]
    fn gap_that_cannot_fit_is_rejected() {
        let cfg = GameConfig {
            field_height: 250.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::GapDoesNotFit { gap: 120, .. })
        ));
    }

    #[test]
    fn zero_fps_is_rejected() {
        let cfg = GameConfig {
            fps: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroFps));
    }

    #[test]
    fn frame_duration_at_sixty() {
        let d = GameConfig::default().frame_duration();
        assert_eq!(d.as_micros(), 16_666);
    }
}
