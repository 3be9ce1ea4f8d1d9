// Core types shared by the compositor and the animation drivers.
// Visual expectation: a `Raster` is the sprite you see on screen; a
// `FrameSequence` is a flip-book of them, each held for its own delay.

use image::RgbaImage;
use std::time::Duration;

/// One delay unit of a frame sequence (GIF centiseconds).
pub const DELAY_UNIT: Duration = Duration::from_millis(10);

/// Top-left placement of a raster on the surface, in pixels.
/// Unsigned on purpose: the per-pixel index math has no negative clipping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Origin {
    pub x: usize,
    pub y: usize,
}

impl Origin {
    pub const ZERO: Origin = Origin { x: 0, y: 0 };

    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Decoded, immutable RGBA image (8 bits per channel, straight alpha).
#[derive(Clone, Debug)]
pub struct Raster {
    image: RgbaImage,
}

impl Raster {
    /// Wrap an already decoded RGBA buffer.
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Build a raster from raw RGBA bytes; `None` if the length is not `width*height*4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, pixels).map(Self::new)
    }

    /// A raster where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    /// (red, green, blue, alpha) at local (col, row).
    #[inline]
    pub fn pixel(&self, col: usize, row: usize) -> [u8; 4] {
        self.image.get_pixel(col as u32, row as u32).0
    }

    /// One row of RGBA bytes, `width*4` long.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let stride = self.width() * 4;
        &self.image.as_raw()[row * stride..(row + 1) * stride]
    }
}

/// A raster plus how many `DELAY_UNIT`s it stays on screen.
#[derive(Clone, Debug)]
pub struct Frame {
    pub raster: Raster,
    pub delay_units: u32,
}

impl Frame {
    pub fn delay(&self) -> Duration {
        DELAY_UNIT * self.delay_units
    }
}

/// Ordered frames, replayed cyclically in insertion order.
#[derive(Clone, Debug, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn push(&mut self, raster: Raster, delay_units: u32) {
        self.frames.push(Frame { raster, delay_units });
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Endless playback order: frame0, frame1, ..., frameN, frame0, ...
    /// Yields nothing for an empty sequence.
    pub fn cycle(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().cycle()
    }
}
