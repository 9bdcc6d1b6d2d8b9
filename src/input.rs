//! Terminal events turned into game input.
//!
//! Most terminals only report key presses. When release events are not
//! available a press holds "ascend" for a few frames, and the key repeat of a
//! held key keeps extending it.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Frames a single press keeps ascend held when releases are not reported.
pub const LATCH_FRAMES: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
}

/// Pointer position in playfield units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub pressed: bool,
}

/// Maps terminal cells onto the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub field_width: f64,
    pub field_height: f64,
}

impl Viewport {
    /// Center of the cell, in playfield units.
    pub fn to_field(&self, column: u16, row: u16) -> (f64, f64) {
        let cols = self.cols.max(1) as f64;
        let rows = self.rows.max(1) as f64;
        (
            (column as f64 + 0.5) * self.field_width / cols,
            (row as f64 + 0.5) * self.field_height / rows,
        )
    }
}

#[derive(Debug, Clone)]
pub struct InputState {
    reports_release: bool,
    held: bool,
    latch: u32,
    pointer: Pointer,
}

impl InputState {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            held: false,
            latch: 0,
            pointer: Pointer::default(),
        }
    }

    pub fn handle(&mut self, event: &Event, view: &Viewport) -> Option<Command> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse, view);
                None
            }
            Event::FocusLost => {
                // Releases that happen while unfocused are never reported.
                self.held = false;
                self.latch = 0;
                self.pointer.pressed = false;
                None
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<Command> {
        let down = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);
        match key.code {
            KeyCode::Char(' ') | KeyCode::Up => {
                if !down {
                    self.held = false;
                } else if self.reports_release {
                    self.held = true;
                } else {
                    self.latch = LATCH_FRAMES;
                }
                None
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc if key.kind == KeyEventKind::Press => {
                Some(Command::Quit)
            }
            KeyCode::Char('r') | KeyCode::Enter if key.kind == KeyEventKind::Press => {
                Some(Command::Restart)
            }
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, view: &Viewport) {
        let (x, y) = view.to_field(mouse.column, mouse.row);
        self.pointer.x = x;
        self.pointer.y = y;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.pointer.pressed = true,
            MouseEventKind::Up(MouseButton::Left) => self.pointer.pressed = false,
            _ => {}
        }
    }

    pub fn ascend(&self) -> bool {
        self.held || self.latch > 0
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Called once per tick after the frame consumed the input.
    pub fn end_frame(&mut self) {
        self.latch = self.latch.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        cols: 60,
        rows: 20,
        field_width: 600.0,
        field_height: 400.0,
    };

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Press,
        ))
    }

    fn release(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn held_until_release() {
        let mut input = InputState::new(true);
        input.handle(&press(KeyCode::Char(' ')), &VIEW);
        for _ in 0..100 {
            assert!(input.ascend());
            input.end_frame();
        }
        input.handle(&release(KeyCode::Char(' ')), &VIEW);
        assert!(!input.ascend());
    }

    #[test]
    fn press_latches_without_release_events() {
        let mut input = InputState::new(false);
        input.handle(&press(KeyCode::Up), &VIEW);
        for _ in 0..LATCH_FRAMES {
            assert!(input.ascend());
            input.end_frame();
        }
        assert!(!input.ascend());
    }

    #[test]
    fn repeat_extends_latch() {
        let mut input = InputState::new(false);
        input.handle(&press(KeyCode::Char(' ')), &VIEW);
        input.end_frame();
        input.end_frame();
        let repeat = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        ));
        input.handle(&repeat, &VIEW);
        for _ in 0..LATCH_FRAMES {
            assert!(input.ascend());
            input.end_frame();
        }
        assert!(!input.ascend());
    }

    #[test]
    fn commands() {
        let mut input = InputState::new(false);
        assert_eq!(input.handle(&press(KeyCode::Char('q')), &VIEW), Some(Command::Quit));
        assert_eq!(input.handle(&press(KeyCode::Esc), &VIEW), Some(Command::Quit));
        assert_eq!(input.handle(&press(KeyCode::Char('r')), &VIEW), Some(Command::Restart));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(input.handle(&ctrl_c, &VIEW), Some(Command::Quit));
        assert_eq!(input.handle(&press(KeyCode::Char('c')), &VIEW), None);
        assert_eq!(input.handle(&release(KeyCode::Char('q')), &VIEW), None);
    }

    #[test]
    fn pointer_maps_cells_to_field() {
        let mut input = InputState::new(false);
        input.handle(&mouse(MouseEventKind::Moved, 25, 10), &VIEW);
        let p = input.pointer();
        assert_eq!((p.x, p.y), (255.0, 210.0));
        assert!(!p.pressed);

        input.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 35, 10), &VIEW);
        let p = input.pointer();
        assert_eq!((p.x, p.y, p.pressed), (355.0, 210.0, true));

        input.handle(&mouse(MouseEventKind::Up(MouseButton::Left), 35, 10), &VIEW);
        assert!(!input.pointer().pressed);
    }

    #[test]
    fn focus_loss_drops_held_input() {
        let mut input = InputState::new(true);
        input.handle(&press(KeyCode::Char(' ')), &VIEW);
        input.handle(&mouse(MouseEventKind::Down(MouseButton::Left), 25, 10), &VIEW);
        assert!(input.ascend() && input.pointer().pressed);

        input.handle(&Event::FocusLost, &VIEW);
        assert!(!input.ascend());
        assert!(!input.pointer().pressed);
    }

    #[test]
    fn right_button_does_not_press() {
        let mut input = InputState::new(false);
        input.handle(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), &VIEW);
        assert!(!input.pointer().pressed);
    }
}
