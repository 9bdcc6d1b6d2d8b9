use crate::config::GameConfig;
use crate::geom::Rect;

/// The player-controlled sprite. Only `y` moves; `x` is fixed at spawn.
#[derive(Debug, Clone)]
pub struct Player {
    x: f64,
    y: f64,
    vel_y: f64,
    width: f64,
    height: f64,
    rect: Rect,
    pub score: u32,

    gravity: f64,
    thrust: f64,
    field_height: f64,
}

impl Player {
    pub fn new(cfg: &GameConfig) -> Self {
        let (x, y) = cfg.player_spawn;
        Self {
            x,
            y,
            vel_y: 0.0,
            width: cfg.player_width,
            height: cfg.player_height,
            rect: Rect::new(x, y, cfg.player_width, cfg.player_height),
            score: 0,
            gravity: cfg.gravity,
            thrust: cfg.thrust,
            field_height: cfg.field_height,
        }
    }

    /// One frame of physics. Returns true if the player now touches or
    /// crosses the top or bottom edge of the playfield.
    pub fn update(&mut self, ascend: bool) -> bool {
        if ascend {
            self.vel_y = self.thrust;
        } else {
            self.vel_y += self.gravity;
        }
        self.y += self.vel_y;
        self.rect = Rect::new(self.x, self.y, self.width, self.height);

        self.y <= 0.0 || self.y + self.height >= self.field_height
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn velocity(&self) -> f64 {
        self.vel_y
    }

    pub fn bounding_box(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_at_rest() {
        let p = Player::new(&GameConfig::default());
        assert_eq!((p.x(), p.y()), (50.0, 200.0));
        assert_eq!(p.velocity(), 0.0);
        assert_eq!(p.score, 0);
        assert_eq!(p.bounding_box(), Rect::new(50.0, 200.0, 35.0, 35.0));
    }

    #[test]
    fn ascend_overwrites_fall_speed() {
        let mut p = Player::new(&GameConfig::default());
        for _ in 0..6 {
            p.update(false);
        }
        assert!(p.velocity() > 0.0);
        p.update(true);
        assert_eq!(p.velocity(), -5.0);
        p.update(true);
        assert_eq!(p.velocity(), -5.0);
    }

    #[test]
    fn gravity_accumulates_without_cap() {
        let mut p = Player::new(&GameConfig {
            field_height: 1.0e9,
            ..GameConfig::default()
        });
        let mut prev = p.velocity();
        for _ in 0..200 {
            p.update(false);
            assert!((p.velocity() - prev - 0.5).abs() < 1e-9);
            prev = p.velocity();
        }
        assert!((p.velocity() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn bounding_box_follows_position() {
        let mut p = Player::new(&GameConfig::default());
        p.update(true);
        assert_eq!(p.bounding_box().y, p.y());
        p.update(false);
        assert_eq!(p.bounding_box().y, p.y());
        assert_eq!(p.bounding_box().x, 50.0);
    }

    #[test]
    fn top_edge_is_a_collision() {
        let mut p = Player::new(&GameConfig {
            player_spawn: (50.0, 5.0),
            ..GameConfig::default()
        });
        // 5 - 5 = 0 lands exactly on the edge
        assert!(p.update(true));
    }

    #[test]
    fn bottom_edge_is_a_collision() {
        let mut p = Player::new(&GameConfig {
            player_spawn: (50.0, 364.5),
            ..GameConfig::default()
        });
        // 364.5 + 0.5 + 35 = 400
        assert!(p.update(false));
    }

    #[test]
    fn mid_field_is_not_a_collision() {
        let mut p = Player::new(&GameConfig::default());
        assert!(!p.update(false));
        assert!(!p.update(true));
    }
}
