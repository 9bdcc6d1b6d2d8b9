//! The game-over buttons.
//!
//! Buttons are plain data. The scene draws them and reports which one the
//! pointer is over; the session decides what a press does.

use crate::config::GameConfig;
use crate::geom::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Restart,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub action: MenuAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub buttons: Vec<Button>,
}

impl Menu {
    /// Restart and Quit side by side just below the middle of the field.
    pub fn game_over(cfg: &GameConfig) -> Self {
        let cx = (cfg.field_width / 2.0).floor();
        let cy = (cfg.field_height / 2.0).floor();
        Self {
            buttons: vec![
                Button {
                    label: "RESTART",
                    rect: Rect::new(cx - 90.0, cy, 100.0, 40.0),
                    action: MenuAction::Restart,
                },
                Button {
                    label: "QUIT",
                    rect: Rect::new(cx + 10.0, cy, 100.0, 40.0),
                    action: MenuAction::Quit,
                },
            ],
        }
    }

    /// The button under the pointer. The first match wins, so two
    /// overlapping buttons still yield a single action.
    pub fn hit(&self, px: f64, py: f64) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(px, py))
            .map(|b| b.action)
    }
}
