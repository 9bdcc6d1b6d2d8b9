//! Optional images: a background and a player sprite.
//!
//! Images are decoded once and rescaled to whatever pixel size the current
//! terminal needs. A missing or broken file is logged and the scene falls
//! back to drawn shapes.

use image::{RgbaImage, imageops::FilterType};
use std::path::Path;
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::error::AssetError;
use crate::pixels::{PixelBuf, Rgb};

/// Pixels below this alpha are not drawn.
const ALPHA_CUTOFF: u8 = 128;

/// An image already scaled to pixel-buffer resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    w: usize,
    h: usize,
    px: Vec<Option<Rgb>>,
}

impl Sprite {
    fn from_rgba(img: &RgbaImage) -> Self {
        let px = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                (a >= ALPHA_CUTOFF).then_some(Rgb(r, g, b))
            })
            .collect();
        Self {
            w: img.width() as usize,
            h: img.height() as usize,
            px,
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    pub fn draw(&self, buf: &mut PixelBuf, x: i32, y: i32) {
        for sy in 0..self.h {
            for sx in 0..self.w {
                if let Some(c) = self.px[sy * self.w + sx] {
                    buf.set(x + sx as i32, y + sy as i32, c);
                }
            }
        }
    }
}

struct Scaled {
    source: RgbaImage,
    cache: Option<Sprite>,
}

impl Scaled {
    fn new(source: RgbaImage) -> Self {
        Self {
            source,
            cache: None,
        }
    }

    fn at(&mut self, w: usize, h: usize) -> Option<&Sprite> {
        if w == 0 || h == 0 {
            return None;
        }
        let stale = self.cache.as_ref().is_none_or(|s| s.size() != (w, h));
        if stale {
            let resized =
                image::imageops::resize(&self.source, w as u32, h as u32, FilterType::Triangle);
            self.cache = Some(Sprite::from_rgba(&resized));
        }
        self.cache.as_ref()
    }
}

#[derive(Default)]
pub struct Assets {
    background: Option<Scaled>,
    sprite: Option<Scaled>,
}

impl Assets {
    /// Loads both images, keeping whichever succeeded.
    pub fn load(cfg: &GameConfig) -> Self {
        Self {
            background: load_optional(&cfg.background_path, "background"),
            sprite: load_optional(&cfg.sprite_path, "sprite"),
        }
    }

    /// No images at all; everything is drawn.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_images(background: Option<RgbaImage>, sprite: Option<RgbaImage>) -> Self {
        Self {
            background: background.map(Scaled::new),
            sprite: sprite.map(Scaled::new),
        }
    }

    pub fn background(&mut self, w: usize, h: usize) -> Option<&Sprite> {
        self.background.as_mut()?.at(w, h)
    }

    pub fn sprite(&mut self, w: usize, h: usize) -> Option<&Sprite> {
        self.sprite.as_mut()?.at(w, h)
    }
}

pub fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| AssetError {
            path: path.to_path_buf(),
            source,
        })
}

fn load_optional(path: &Path, what: &str) -> Option<Scaled> {
    match load_image(path) {
        Ok(img) => {
            info!(path = %path.display(), width = img.width(), height = img.height(), "loaded {what}");
            Some(Scaled::new(img))
        }
        Err(e) => {
            warn!(error = %e, cause = %e.source, "{what} unavailable, using fallback");
            None
        }
    }
}
