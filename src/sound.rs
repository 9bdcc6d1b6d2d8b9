//! Synthesized sound cues.

use fundsp::prelude::*;
use rodio::{OutputStream, OutputStreamBuilder, Sink, buffer::SamplesBuffer};
use tracing::warn;

const SAMPLE_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// An obstacle was passed.
    Point,
    /// The run ended.
    Crash,
}

impl Cue {
    fn duration_secs(self) -> f64 {
        match self {
            Cue::Point => 0.12,
            Cue::Crash => 0.5,
        }
    }
}

/// Renders a cue to mono samples at `SAMPLE_RATE`.
pub fn render(cue: Cue) -> Vec<f32> {
    let n = (SAMPLE_RATE as f64 * cue.duration_secs()).round() as usize;
    match cue {
        Cue::Point => {
            // Rising blip, 880Hz to 1320Hz, fading out
            let freq = lfo(|t: f32| lerp(880.0, 1320.0, (t / 0.06).min(1.0)));
            let gain = lfo(|t: f32| lerp(0.12, 0.0, (t / 0.12).min(1.0)));
            let mut sound = (freq >> sine::<f32>()) * gain;
            (0..n).map(|_| sound.get_mono() as f32).collect()
        }
        Cue::Crash => {
            // Falling saw, 400Hz to 80Hz over 0.4s, fading out over 0.5s
            let freq = lfo(|t: f32| lerp(400.0, 80.0, (t / 0.4).min(1.0)));
            let gain = lfo(|t: f32| lerp(0.15, 0.0, (t / 0.5).min(1.0)));
            let mut sound = (freq >> saw()) * gain;
            (0..n).map(|_| sound.get_mono() as f32).collect()
        }
    }
}

/// The default output device, if there is one.
pub struct Audio {
    stream: OutputStream,
}

impl Audio {
    pub fn open() -> Option<Self> {
        match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // The game owns the terminal, nothing may print on exit.
                stream.log_on_drop(false);
                Some(Self { stream })
            }
            Err(e) => {
                warn!(error = %e, "no audio output, playing silently");
                None
            }
        }
    }

    pub fn play(&self, cue: Cue) {
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, render(cue)));
        sink.detach(); // Play in background
    }
}
