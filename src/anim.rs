// Animation drivers: repeatedly redraw the surface over time.
// Visual outcomes:
// - StaticComposite: the image appears once and stays.
// - SequenceLoop: a GIF plays forever, each frame held for its own delay.
// - BounceLoop: the image bounces around the screen as fast as it can be redrawn
//   (or at a fixed frame interval when one is configured).

use std::time::Duration;

use crate::bounce::BounceBody;
use crate::draw::CompositeOptions;
use crate::error::Result;
use crate::snapshot::{Snapshot, Stage};
use crate::surface::PixelSurface;
use crate::types::{FrameSequence, Origin, Raster};

/// What to play, selected once at startup and matched explicitly by [`Player::run`].
#[derive(Clone, Debug)]
pub enum Program {
    StaticComposite { raster: Raster, origin: Origin },
    BounceLoop { raster: Raster, body: BounceBody },
    SequenceLoop(FrameSequence),
}

/// Where the driver suspends between frames.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the calling thread with `std::thread::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Called after every finished frame so a display can pick it up.
pub trait Present {
    fn present(&mut self, frame: &[u8]) -> Result<()>;
}

/// For a memory-mapped device the surface *is* the display: nothing to do.
#[derive(Clone, Copy, Debug, Default)]
pub struct Direct;

impl Present for Direct {
    fn present(&mut self, _frame: &[u8]) -> Result<()> {
        Ok(())
    }
}

/// Drives compositing over a surface. Single-threaded; the surface is only
/// ever written from here.
pub struct Player<'a, P, D> {
    surface: PixelSurface<'a>,
    stage: Stage,
    options: CompositeOptions,
    frame_interval: Duration,
    pacer: P,
    display: D,
}

impl<'a, P: Pacer, D: Present> Player<'a, P, D> {
    /// Captures the snapshot from `surface` before anything is drawn.
    pub fn new(surface: PixelSurface<'a>, options: CompositeOptions, pacer: P, display: D) -> Self {
        let stage = Stage::new(Snapshot::capture(&surface));
        Self {
            surface,
            stage,
            options,
            frame_interval: Duration::ZERO,
            pacer,
            display,
        }
    }

    /// Pause between bounce ticks. Zero (the default) runs unthrottled.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn surface(&self) -> &PixelSurface<'a> {
        &self.surface
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.stage.snapshot()
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Play `program`. Loops stop after `max_frames` frames when given, otherwise never.
    pub fn run(&mut self, program: &Program, max_frames: Option<u64>) -> Result<()> {
        match program {
            Program::StaticComposite { raster, origin } => self.draw_static(raster, *origin),
            Program::BounceLoop { raster, body } => {
                let mut body = *body;
                self.play_bounce(raster, &mut body, max_frames)
            }
            Program::SequenceLoop(sequence) => self.play_sequence(sequence, max_frames),
        }
    }

    /// Single composite at `origin`.
    pub fn draw_static(&mut self, raster: &Raster, origin: Origin) -> Result<()> {
        self.frame(raster, origin)
    }

    /// Cycle through `sequence` at (0, 0), holding each frame for its delay.
    pub fn play_sequence(&mut self, sequence: &FrameSequence, max_frames: Option<u64>) -> Result<()> {
        if sequence.is_empty() {
            tracing::warn!("empty frame sequence, nothing to play");
            return Ok(());
        }
        tracing::debug!(frames = sequence.len(), "sequence playback");

        for (shown, frame) in sequence.cycle().enumerate() {
            if limit_reached(shown as u64, max_frames) {
                break;
            }
            self.frame(&frame.raster, Origin::ZERO)?;
            self.pacer.pause(frame.delay());
        }
        Ok(())
    }

    /// Tick `body`, then redraw `raster` at its position, over and over.
    pub fn play_bounce(
        &mut self,
        raster: &Raster,
        body: &mut BounceBody,
        max_frames: Option<u64>,
    ) -> Result<()> {
        tracing::debug!(interval = ?self.frame_interval, "bounce playback");

        let mut shown = 0u64;
        while !limit_reached(shown, max_frames) {
            body.tick();
            self.frame(raster, body.position())?;
            if !self.frame_interval.is_zero() {
                self.pacer.pause(self.frame_interval);
            }
            shown += 1;
        }
        Ok(())
    }

    /// Hand the current surface to the display again without redrawing.
    pub fn refresh(&mut self) -> Result<()> {
        self.display.present(self.surface.bytes())
    }

    fn frame(&mut self, raster: &Raster, origin: Origin) -> Result<()> {
        self.stage.redraw(raster, &mut self.surface, origin, self.options)?;
        self.display.present(self.surface.bytes())
    }
}

fn limit_reached(shown: u64, max_frames: Option<u64>) -> bool {
    max_frames.is_some_and(|max| shown >= max)
}
