//! The running/game-over state machine.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::judge::{Verdict, judge};
use crate::menu::{Menu, MenuAction};
use crate::obstacle::Obstacle;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver { final_score: u32 },
}

/// Whether the loop should keep going after a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Events of one tick, for sound cues and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub verdict: Verdict,
    pub recycled: bool,
    /// The run ended on this tick.
    pub ended: bool,
}

pub struct Session<R: Rng = StdRng> {
    cfg: GameConfig,
    player: Player,
    obstacle: Obstacle,
    phase: Phase,
    menu: Menu,
    rng: R,
    run: u32,
}

impl<R: Rng> Session<R> {
    pub fn new(cfg: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let player = Player::new(&cfg);
        let obstacle = Obstacle::new(&cfg, &mut rng);
        let menu = Menu::game_over(&cfg);
        info!(gap_y = obstacle.gap_y, "session started");
        Ok(Self {
            cfg,
            player,
            obstacle,
            phase: Phase::Running,
            menu,
            rng,
            run: 1,
        })
    }

    /// Advances one frame. Nothing moves once the run is over.
    pub fn tick(&mut self, ascend: bool) -> TickReport {
        if self.phase != Phase::Running {
            return TickReport::default();
        }

        let hit_boundary = self.player.update(ascend);
        let recycled = self.obstacle.advance(self.player.score, &mut self.rng);
        if recycled {
            debug!(
                gap_y = self.obstacle.gap_y,
                speed = self.obstacle.speed,
                "obstacle recycled"
            );
        }

        let verdict = judge(&mut self.player, &mut self.obstacle, hit_boundary);
        if verdict.scored {
            debug!(score = self.player.score, "obstacle passed");
        }

        let ended = verdict.collided;
        if ended {
            let final_score = self.player.score;
            self.phase = Phase::GameOver { final_score };
            info!(run = self.run, final_score, hit_boundary, "game over");
        }

        TickReport {
            verdict,
            recycled,
            ended,
        }
    }

    /// Applies a menu action. Restart only means something once the run is
    /// over; Quit always ends the loop.
    pub fn apply(&mut self, action: MenuAction) -> Control {
        match action {
            MenuAction::Quit => Control::Quit,
            MenuAction::Restart => {
                if self.is_over() {
                    self.restart();
                }
                Control::Continue
            }
        }
    }

    /// Pointer handling for the game-over screen. `hover` is the button the
    /// scene found under the pointer this frame.
    pub fn on_pointer(&mut self, hover: Option<MenuAction>, pressed: bool) -> Control {
        match (self.phase, hover, pressed) {
            (Phase::GameOver { .. }, Some(action), true) => self.apply(action),
            _ => Control::Continue,
        }
    }

    fn restart(&mut self) {
        self.player = Player::new(&self.cfg);
        self.obstacle = Obstacle::new(&self.cfg, &mut self.rng);
        self.phase = Phase::Running;
        self.run += 1;
        info!(run = self.run, gap_y = self.obstacle.gap_y, "session restarted");
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn run(&self) -> u32 {
        self.run
    }

    #[cfg(test)]
    pub(crate) fn obstacle_mut(&mut self) -> &mut Obstacle {
        &mut self.obstacle
    }
}
