// Command-line options, folded into one `Config` value that is passed to the
// engine explicitly. Nothing downstream reads process-wide state.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::anim::Program;
use crate::bounce::{BounceBody, Velocity};
use crate::device::DEFAULT_DEVICE;
use crate::draw::{CompositeOptions, DEFAULT_ALPHA_THRESHOLD};
use crate::error::{Error, Result};
use crate::source::Source;
use crate::types::Origin;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Draw the image once.
    #[default]
    Draw,
    /// Bounce the image around the screen forever.
    Bounce,
}

/// Draw an image straight onto the Linux framebuffer.
#[derive(Parser, Debug)]
#[command(name = "fbsprite", version)]
pub struct Cli {
    /// Image to draw (.png, .jpg, .jpeg or .gif).
    pub path: Option<PathBuf>,

    /// The width of your framebuffer.
    #[arg(long, default_value_t = 1920)]
    pub width: usize,

    /// The height of your framebuffer.
    #[arg(long, default_value_t = 1080)]
    pub height: usize,

    /// The start x position to draw at.
    #[arg(short, default_value_t = 0)]
    pub x: usize,

    /// The start y position to draw at.
    #[arg(short, default_value_t = 0)]
    pub y: usize,

    /// How to draw still images. GIFs always play as an animation.
    #[arg(long, value_enum, default_value_t = RunMode::Draw)]
    pub run: RunMode,

    /// Draw the image on top of text instead of only over the background.
    #[arg(long)]
    pub drawtop: bool,

    /// Framebuffer device to map.
    #[arg(long, default_value = DEFAULT_DEVICE)]
    pub device: PathBuf,

    /// Pause between bounce frames in milliseconds (0 = as fast as possible).
    #[arg(long, default_value_t = 0)]
    pub frame_interval_ms: u64,

    /// Bounce velocity as VX,VY pixels per frame.
    #[arg(long, default_value = "1,2", value_parser = parse_velocity, allow_hyphen_values = true)]
    pub velocity: Velocity,

    /// Show the result in a desktop window instead of the framebuffer.
    #[cfg(feature = "window")]
    #[arg(long)]
    pub window: bool,

    /// Log debug output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything the engine needs, resolved once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
    pub start: Origin,
    pub mode: RunMode,
    pub draw_over: bool,
    pub alpha_threshold: u8,
    pub device: PathBuf,
    pub frame_interval: Duration,
    pub velocity: Velocity,
    pub window: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let path = cli
            .path
            .ok_or_else(|| Error::ConfigurationMissing("no image path given".into()))?;

        #[cfg(feature = "window")]
        let window = cli.window;
        #[cfg(not(feature = "window"))]
        let window = false;

        Ok(Self {
            path,
            width: cli.width,
            height: cli.height,
            start: Origin::new(cli.x, cli.y),
            mode: cli.run,
            draw_over: cli.drawtop,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            device: cli.device,
            frame_interval: Duration::from_millis(cli.frame_interval_ms),
            velocity: cli.velocity,
            window,
        })
    }

    pub fn composite_options(&self) -> CompositeOptions {
        CompositeOptions {
            alpha_threshold: self.alpha_threshold,
            preserve_background: self.draw_over,
        }
    }

    /// Pick the driver for `source`. Animated sources ignore the run mode.
    pub fn program(&self, source: Source) -> Program {
        match (source, self.mode) {
            (Source::Animated(sequence), _) => Program::SequenceLoop(sequence),
            (Source::Still(raster), RunMode::Draw) => {
                Program::StaticComposite { raster, origin: self.start }
            }
            (Source::Still(raster), RunMode::Bounce) => {
                let body = BounceBody::for_raster(
                    &raster,
                    self.start,
                    self.velocity,
                    (self.width, self.height),
                );
                Program::BounceLoop { raster, body }
            }
        }
    }
}

// Anything faster crosses any real screen in one tick.
const MAX_SPEED: u64 = i32::MAX as u64;

fn parse_velocity(s: &str) -> std::result::Result<Velocity, String> {
    let (vx, vy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected VX,VY, got '{s}'"))?;
    let parse = |v: &str| {
        let n = v.trim().parse::<i64>().map_err(|e| format!("'{v}': {e}"))?;
        if n.unsigned_abs() > MAX_SPEED {
            return Err(format!("'{v}': speed must be within ±{MAX_SPEED}"));
        }
        Ok(n)
    };
    Ok(Velocity { x: parse(vx)?, y: parse(vy)? })
}
