//! Everything the game needs from the outside world, owned in one place:
//! the terminal, its events, the framebuffer, assets, audio and the frame
//! clock.

use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute, terminal,
};
use std::collections::VecDeque;
use std::io::{self, Write, stdout};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::assets::Assets;
use crate::config::GameConfig;
use crate::input::{InputState, Viewport};
use crate::pixels::PixelBuf;
use crate::sound::{Audio, Cue};

/// Raw mode and the alternate screen for as long as the guard lives.
pub struct TerminalGuard {
    enhanced: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            EnableMouseCapture,
            EnableFocusChange,
        )?;

        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        info!(key_release_events = enhanced, "terminal ready");
        Ok(Self { enhanced })
    }

    /// Whether key releases are reported.
    pub fn reports_release(&self) -> bool {
        self.enhanced
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.enhanced {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            DisableFocusChange,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// A source of input events, drained once per frame.
pub trait Events {
    /// The next pending event, or `None` once this frame has nothing more.
    fn next(&mut self) -> io::Result<Option<Event>>;
}

/// Non-blocking crossterm events.
pub struct TerminalEvents;

impl Events for TerminalEvents {
    fn next(&mut self) -> io::Result<Option<Event>> {
        if event::poll(Duration::ZERO)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Pre-recorded events. `None` entries end a frame.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    script: VecDeque<Option<Event>>,
}

impl ScriptedEvents {
    pub fn new(script: impl IntoIterator<Item = Option<Event>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl Events for ScriptedEvents {
    fn next(&mut self) -> io::Result<Option<Event>> {
        Ok(self.script.pop_front().flatten())
    }
}

pub struct Platform<W: Write, E: Events> {
    pub out: W,
    pub events: E,
    pub buf: PixelBuf,
    pub assets: Assets,
    pub audio: Option<Audio>,
    pub input: InputState,
    pub viewport: Viewport,
    frame: Duration,
    frame_start: Instant,
}

impl<W: Write, E: Events> Platform<W, E> {
    /// A platform presenting to `out` at `cols` x `rows` terminal cells.
    pub fn new(
        cfg: &GameConfig,
        out: W,
        events: E,
        (cols, rows): (u16, u16),
        reports_release: bool,
    ) -> Self {
        let (pw, ph) = (cols as usize, rows as usize * 2);
        Self {
            out,
            events,
            buf: PixelBuf::new(pw, ph),
            assets: Assets::none(),
            audio: None,
            input: InputState::new(reports_release),
            viewport: Viewport {
                cols,
                rows,
                field_width: cfg.field_width,
                field_height: cfg.field_height,
            },
            frame: cfg.frame_duration(),
            frame_start: Instant::now(),
        }
    }

    pub fn with_assets(mut self, assets: Assets) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_audio(mut self, audio: Option<Audio>) -> Self {
        self.audio = audio;
        self
    }

    /// Overrides the frame length; zero disables pacing.
    pub fn with_frame(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        debug!(cols, rows, "resize");
        self.buf.resize(cols as usize, rows as usize * 2);
        self.viewport.cols = cols;
        self.viewport.rows = rows;
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Sleeps away whatever is left of the current frame.
    pub fn pace(&self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
    }

    pub fn present(&mut self) -> io::Result<()> {
        self.buf.present(&mut self.out)
    }

    pub fn play(&self, cue: Cue) {
        if let Some(audio) = &self.audio {
            audio.play(cue);
        }
    }
}

impl Platform<io::Stdout, TerminalEvents> {
    /// The real terminal. Assets and audio are optional and degrade quietly.
    pub fn terminal(cfg: &GameConfig, guard: &TerminalGuard) -> io::Result<Self> {
        let size = terminal::size()?;
        Ok(
            Self::new(cfg, stdout(), TerminalEvents, size, guard.reports_release())
                .with_assets(Assets::load(cfg))
                .with_audio(Audio::open()),
        )
    }
}
