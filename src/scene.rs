//! Draws a session into a `PixelBuf`.
//!
//! The playfield is scaled independently on each axis to fill the buffer.

use rand::Rng;

use crate::assets::Assets;
use crate::font::{draw_centered, draw_text, text_width};
use crate::geom::Rect;
use crate::input::Pointer;
use crate::menu::{Menu, MenuAction};
use crate::obstacle::Obstacle;
use crate::pixels::{PixelBuf, Rgb};
use crate::player::Player;
use crate::session::{Phase, Session};

const SKY: Rgb = Rgb(190, 232, 245);
const PIPE_L: Rgb = Rgb(74, 122, 26);
const PIPE_M: Rgb = Rgb(100, 170, 40);
const PIPE_R: Rgb = Rgb(115, 191, 46);
const PIPE_HI: Rgb = Rgb(145, 215, 62);
const CAP_DARK: Rgb = Rgb(60, 100, 20);
const BODY: Rgb = Rgb(245, 200, 66);
const BODY_HI: Rgb = Rgb(255, 225, 100);
const WING: Rgb = Rgb(215, 165, 35);
const EYE: Rgb = Rgb(255, 255, 255);
const PUPIL: Rgb = Rgb(20, 20, 20);
const BEAK: Rgb = Rgb(225, 75, 35);
const WHITE: Rgb = Rgb(255, 255, 255);
const SHADOW: Rgb = Rgb(30, 30, 30);
const PANEL: Rgb = Rgb(210, 185, 110);
const PANEL_FACE: Rgb = Rgb(220, 195, 120);
const TITLE: Rgb = Rgb(255, 0, 0);
const RESTART: Rgb = Rgb(0, 200, 0);
const RESTART_HOVER: Rgb = Rgb(0, 255, 0);
const QUIT: Rgb = Rgb(200, 0, 0);
const QUIT_HOVER: Rgb = Rgb(255, 0, 0);

/// Playfield-to-pixel transform for one frame.
#[derive(Debug, Clone, Copy)]
struct Scale {
    sx: f64,
    sy: f64,
}

impl Scale {
    fn new(buf: &PixelBuf, field_width: f64, field_height: f64) -> Self {
        Self {
            sx: buf.width() as f64 / field_width,
            sy: buf.height() as f64 / field_height,
        }
    }

    /// Pixel rectangle covering `r`, at least one pixel in each direction.
    fn rect(&self, r: &Rect) -> (i32, i32, i32, i32) {
        let x0 = (r.x * self.sx).floor() as i32;
        let y0 = (r.y * self.sy).floor() as i32;
        let x1 = (r.right() * self.sx).ceil() as i32;
        let y1 = (r.bottom() * self.sy).ceil() as i32;
        (x0, y0, (x1 - x0).max(1), (y1 - y0).max(1))
    }

    fn point(&self, x: f64, y: f64) -> (i32, i32) {
        ((x * self.sx) as i32, (y * self.sy) as i32)
    }
}

/// Glyph scale that stays legible on small terminals.
fn text_scale(buf: &PixelBuf) -> i32 {
    (buf.height() as i32 / 60).max(1)
}

/// Renders one frame. In the game-over phase this also returns the button
/// under the pointer, with nothing acted on.
pub fn draw<R: Rng>(
    session: &Session<R>,
    assets: &mut Assets,
    buf: &mut PixelBuf,
    pointer: Pointer,
) -> Option<MenuAction> {
    let cfg = session.config();
    let scale = Scale::new(buf, cfg.field_width, cfg.field_height);

    draw_background(buf, assets);
    draw_obstacle(buf, &scale, session.obstacle());
    draw_player(buf, &scale, assets, session.player());

    match session.phase() {
        Phase::Running => {
            draw_score(buf, &scale, session.player().score);
            None
        }
        Phase::GameOver { final_score } => {
            draw_game_over(buf, &scale, session.menu(), final_score, pointer)
        }
    }
}

fn draw_background(buf: &mut PixelBuf, assets: &mut Assets) {
    match assets.background(buf.width(), buf.height()) {
        Some(bg) => bg.draw(buf, 0, 0),
        None => buf.fill(SKY),
    }
}

fn draw_obstacle(buf: &mut PixelBuf, scale: &Scale, obstacle: &Obstacle) {
    let (top, bottom) = obstacle.bounding_rects();
    let cap_h = (3.0 * scale.sy).max(1.0) as i32;

    for (rect, cap_at_bottom) in [(top, true), (bottom, false)] {
        if rect.is_empty() {
            continue;
        }
        let (x, y, w, h) = scale.rect(&rect);
        for dx in 0..w {
            let c = pipe_shade(dx, w);
            for dy in 0..h {
                buf.set(x + dx, y + dy, c);
            }
        }
        let cap_y = if cap_at_bottom { y + h - cap_h } else { y };
        buf.fill_rect(x, cap_y, w, cap_h, CAP_DARK);
    }
}

fn draw_player(buf: &mut PixelBuf, scale: &Scale, assets: &mut Assets, player: &Player) {
    let (x, y, w, h) = scale.rect(&player.bounding_box());
    match assets.sprite(w as usize, h as usize) {
        Some(sprite) => sprite.draw(buf, x, y),
        None => draw_fallback_player(buf, (x, y, w, h), player.velocity()),
    }
}

/// A blocky bird filling the player's box.
fn draw_fallback_player(buf: &mut PixelBuf, (x, y, w, h): (i32, i32, i32, i32), vel_y: f64) {
    buf.fill_rect(x, y, w, h, BODY);
    buf.fill_rect(x + 1, y, (w - 2).max(1), (h / 6).max(1), BODY_HI);

    // Wing flips up while ascending
    let wing_y = if vel_y < 0.0 { y + h / 4 } else { y + h / 2 };
    buf.fill_rect(x, wing_y, (w / 3).max(1), (h / 4).max(1), WING);

    let eye = (w / 4).max(1);
    let ex = x + w - eye - (w / 6);
    let ey = y + h / 5;
    buf.fill_rect(ex, ey, eye, eye, EYE);
    buf.set(ex + eye - 1, ey + eye - 1, PUPIL);

    let beak_h = (h / 5).max(1);
    buf.fill_rect(x + w, y + h / 2 - beak_h / 2, (w / 4).max(1), beak_h, BEAK);
}

fn draw_score(buf: &mut PixelBuf, scale: &Scale, score: u32) {
    let (x, y) = scale.point(10.0, 10.0);
    let text = format!("SCORE {score}");
    let ts = text_scale(buf);
    draw_text(buf, x, y, &text, WHITE, ts);
}

fn draw_game_over(
    buf: &mut PixelBuf,
    scale: &Scale,
    menu: &Menu,
    final_score: u32,
    pointer: Pointer,
) -> Option<MenuAction> {
    buf.darken();
    let ts = text_scale(buf);

    let panel = match (menu.buttons.first(), menu.buttons.last()) {
        (Some(first), Some(last)) => Rect::new(
            first.rect.x - 20.0,
            first.rect.y - 90.0,
            last.rect.right() - first.rect.x + 40.0,
            last.rect.bottom() - first.rect.y + 110.0,
        ),
        _ => Rect::new(0.0, 0.0, 0.0, 0.0),
    };
    let (px, py, pw, ph) = scale.rect(&panel);
    buf.fill_rect(px - 1, py - 1, pw + 2, ph + 2, SHADOW);
    buf.fill_rect(px, py, pw, ph, PANEL);
    buf.fill_rect(px + 1, py + 1, pw - 2, ph - 2, PANEL_FACE);

    let cx = px + pw / 2;
    let (_, title_y) = scale.point(0.0, panel.y + 12.0);
    draw_centered(buf, cx, title_y, "GAME OVER", TITLE, fit_scale(ts, pw, "GAME OVER"));
    let score_y = title_y + 7 * ts;
    let score = format!("FINAL SCORE {final_score}");
    draw_centered(buf, cx, score_y, &score, WHITE, fit_scale(ts, pw, &score));

    let hover = menu.hit(pointer.x, pointer.y);
    for button in &menu.buttons {
        let hovered = hover == Some(button.action);
        let color = match (button.action, hovered) {
            (MenuAction::Restart, false) => RESTART,
            (MenuAction::Restart, true) => RESTART_HOVER,
            (MenuAction::Quit, false) => QUIT,
            (MenuAction::Quit, true) => QUIT_HOVER,
        };
        let (bx, by, bw, bh) = scale.rect(&button.rect);
        buf.fill_rect(bx, by, bw, bh, color);
        let label_ts = fit_scale(ts, bw, button.label);
        let label_y = by + bh / 2 - 5 * label_ts / 2;
        draw_centered(buf, bx + bw / 2, label_y, button.label, WHITE, label_ts);
    }
    hover
}

/// The largest scale up to `ts` at which `text` fits in `width` pixels with
/// a pixel to spare on each side.
fn fit_scale(ts: i32, width: i32, text: &str) -> i32 {
    ts.min(width / (text_width(text, 1) + 2)).max(1)
}

fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}
