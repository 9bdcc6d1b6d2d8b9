//! The fixed-timestep game loop.

use crossterm::event::Event;
use rand::Rng;
use std::io::Write;
use tracing::info;

use crate::error::Result;
use crate::input::Command;
use crate::menu::MenuAction;
use crate::platform::{Events, Platform};
use crate::scene;
use crate::session::{Control, Session};
use crate::sound::Cue;

/// Runs frames until the player quits.
pub fn run<W, E, R>(platform: &mut Platform<W, E>, session: &mut Session<R>) -> Result<()>
where
    W: Write,
    E: Events,
    R: Rng,
{
    let mut frames: u64 = 0;
    loop {
        platform.begin_frame();
        frames += 1;
        if frame(platform, session)? == Control::Quit {
            info!(frames, runs = session.run(), "quit");
            return Ok(());
        }
        platform.pace();
    }
}

/// One frame: input, update, draw, present, then the game-over buttons.
pub fn frame<W, E, R>(platform: &mut Platform<W, E>, session: &mut Session<R>) -> Result<Control>
where
    W: Write,
    E: Events,
    R: Rng,
{
    while let Some(event) = platform.events.next()? {
        if let Event::Resize(cols, rows) = event {
            platform.resize(cols, rows);
            continue;
        }
        match platform.input.handle(&event, &platform.viewport) {
            Some(Command::Quit) => return Ok(Control::Quit),
            Some(Command::Restart) => {
                session.apply(MenuAction::Restart);
            }
            None => {}
        }
    }

    let report = session.tick(platform.input.ascend());
    platform.input.end_frame();
    if report.verdict.scored {
        platform.play(Cue::Point);
    }
    if report.ended {
        platform.play(Cue::Crash);
    }

    let pointer = platform.input.pointer();
    let hover = scene::draw(session, &mut platform.assets, &mut platform.buf, pointer);
    platform.present()?;

    Ok(session.on_pointer(hover, pointer.pressed))
}
