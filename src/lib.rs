// fbsprite: draw images straight onto a raw framebuffer.
// Pieces, leaf-first:
// • surface  — the raw BGRx byte buffer that the display scans out
// • draw     — compositor (alpha cutoff, clipping, background preservation)
// • snapshot — pristine copy of the screen, used to erase old frames
// • bounce   — bouncing-box physics
// • anim     — drivers for still, bouncing and GIF playback

pub mod anim;
pub mod bounce;
pub mod config;
pub mod device;
pub mod draw;
pub mod error;
pub mod logging;
pub mod snapshot;
pub mod source;
pub mod surface;
pub mod types;
#[cfg(feature = "window")]
pub mod window;

pub use anim::{Direct, Pacer, Player, Present, Program, SleepPacer};
pub use bounce::{BounceBody, Velocity};
pub use config::{Cli, Config, RunMode};
pub use draw::{
    composite, composite_with, BackgroundPolicy, CompositeOptions, Overwrite, SentinelBackground,
    DEFAULT_ALPHA_THRESHOLD,
};
pub use error::{Error, Result};
pub use snapshot::{Snapshot, Stage};
pub use source::{Source, SourceKind};
pub use surface::PixelSurface;
pub use types::{Frame, FrameSequence, Origin, Raster, DELAY_UNIT};
