use rand::Rng;
use std::ops::RangeInclusive;

use crate::config::GameConfig;
use crate::geom::Rect;

/// The single scrolling obstacle: a solid column with one gap in it.
///
/// Only one obstacle is ever on screen, so instead of spawning new ones the
/// same instance is recycled back to the right edge once it leaves the field.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f64,
    /// Top of the gap.
    pub gap_y: i32,
    pub speed: f64,
    /// Whether the player was already scored for this cycle.
    pub passed: bool,

    width: f64,
    gap_height: i32,
    gap_range: RangeInclusive<i32>,
    field_width: f64,
    field_height: f64,
    speed_ramp: f64,
    ramp_score: u32,
    recycle_bump: f64,
    recycle_x: f64,
}

impl Obstacle {
    /// A fresh obstacle at the right edge. `cfg` must have passed
    /// `GameConfig::validate`, otherwise the gap draw panics on an empty range.
    pub fn new<R: Rng>(cfg: &GameConfig, rng: &mut R) -> Self {
        let gap_range = cfg.gap_range();
        Self {
            x: cfg.field_width,
            gap_y: rng.gen_range(gap_range.clone()),
            speed: cfg.obstacle_speed,
            passed: false,
            width: cfg.obstacle_width,
            gap_height: cfg.gap_height,
            gap_range,
            field_width: cfg.field_width,
            field_height: cfg.field_height,
            speed_ramp: cfg.speed_ramp,
            ramp_score: cfg.ramp_score,
            recycle_bump: cfg.recycle_bump,
            recycle_x: cfg.recycle_x,
        }
    }

    /// Scroll one frame. Returns true if the obstacle was recycled.
    pub fn advance<R: Rng>(&mut self, player_score: u32, rng: &mut R) -> bool {
        self.x -= self.speed;

        if player_score >= self.ramp_score {
            self.speed += self.speed_ramp;
        }

        if self.x <= self.recycle_x {
            self.recycle(rng);
            return true;
        }
        false
    }

    fn recycle<R: Rng>(&mut self, rng: &mut R) {
        self.x = self.field_width;
        self.gap_y = rng.gen_range(self.gap_range.clone());
        self.speed += self.recycle_bump;
        self.passed = false;
    }

    /// The solid parts above and below the gap.
    pub fn bounding_rects(&self) -> (Rect, Rect) {
        let gap_top = self.gap_y as f64;
        let gap_bottom = (self.gap_y + self.gap_height) as f64;
        let top = Rect::new(self.x, 0.0, self.width, gap_top);
        let bottom = Rect::new(self.x, gap_bottom, self.width, self.field_height - gap_bottom);
        (top, bottom)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (Obstacle, StdRng) {
        let mut rng = StdRng::seed_from_u64(7);
        let o = Obstacle::new(&GameConfig::default(), &mut rng);
        (o, rng)
    }

    #[test]
    fn starts_at_right_edge() {
        let (o, _) = setup();
        assert_eq!(o.x, 600.0);
        assert_eq!(o.speed, 5.0);
        assert!(!o.passed);
        assert!((80..=200).contains(&o.gap_y));
    }

    #[test]
    fn scrolls_by_speed() {
        let (mut o, mut rng) = setup();
        assert!(!o.advance(0, &mut rng));
        assert_eq!(o.x, 595.0);
        assert_eq!(o.speed, 5.0);
    }

    #[test]
    fn no_ramp_below_threshold() {
        let (mut o, mut rng) = setup();
        for _ in 0..50 {
            o.advance(3, &mut rng);
        }
        assert_eq!(o.speed, 5.0);
    }

    #[test]
    fn ramp_applies_every_frame_at_threshold() {
        let (mut o, mut rng) = setup();
        for _ in 0..10 {
            o.advance(4, &mut rng);
        }
        assert!((o.speed - 5.1).abs() < 1e-9);
    }

    #[test]
    fn recycles_exactly_at_threshold() {
        let (mut o, mut rng) = setup();
        o.x = -15.0;
        o.passed = true;
        // -15 - 5 = -20 is on the threshold
        assert!(o.advance(0, &mut rng));
        assert_eq!(o.x, 600.0);
        assert!(!o.passed);
        assert!((o.speed - 5.1).abs() < 1e-9);
    }

    #[test]
    fn does_not_recycle_just_above_threshold() {
        let (mut o, mut rng) = setup();
        o.x = -14.5;
        o.passed = true;
        assert!(!o.advance(0, &mut rng));
        assert_eq!(o.x, -19.5);
        assert!(o.passed);
    }

    #[test]
    fn recycled_gap_always_fits() {
        let (mut o, mut rng) = setup();
        for _ in 0..500 {
            o.x = -20.0;
            o.advance(0, &mut rng);
            assert!(o.gap_y >= 80 && o.gap_y <= 400 - 120 - 80, "gap {}", o.gap_y);
        }
    }

    #[test]
    fn bounding_rects_surround_gap() {
        let (mut o, _) = setup();
        o.x = 300.0;
        o.gap_y = 100;
        let (top, bottom) = o.bounding_rects();
        assert_eq!(top, Rect::new(300.0, 0.0, 20.0, 100.0));
        assert_eq!(bottom, Rect::new(300.0, 220.0, 20.0, 180.0));
    }
}
