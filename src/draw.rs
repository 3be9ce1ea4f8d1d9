// Compositor: blit one raster onto the pixel surface at an offset.
// Visual effects provided here:
// 1) The sprite's opaque pixels appear at (origin.x, origin.y).
// 2) Pixels at or under the alpha cutoff leave whatever was there.
// 3) With background preservation on, terminal text and other non-background
//    pixels stay on top of the sprite.

use crate::surface::PixelSurface;
use crate::types::{Origin, Raster};

/// Alpha cutoff used by the command-line tool.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 0xF0;

/// Per-call compositing knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeOptions {
    /// Pixels with alpha <= this value are never written.
    pub alpha_threshold: u8,
    /// `true` overwrites anything; `false` only paints over the sampled background colour.
    pub preserve_background: bool,
}

impl Default for CompositeOptions {
    fn default() -> Self {
        Self { alpha_threshold: DEFAULT_ALPHA_THRESHOLD, preserve_background: false }
    }
}

/// Decides whether a destination pixel may be painted.
pub trait BackgroundPolicy {
    fn may_paint(&self, current: [u8; 4]) -> bool;
}

/// Paint everywhere the alpha rule allows.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overwrite;

impl BackgroundPolicy for Overwrite {
    #[inline]
    fn may_paint(&self, _current: [u8; 4]) -> bool {
        true
    }
}

/// Only paint pixels that still show the background colour.
///
/// The background is approximated by a single sentinel: the last pixel of the
/// buffer (bottom-right corner), which assumes a uniform desktop or console
/// background. A per-pixel background capture can be swapped in through
/// [`BackgroundPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentinelBackground {
    pub color: [u8; 4],
}

impl SentinelBackground {
    /// Sample the sentinel once from the buffer's current contents.
    pub fn sample(surface: &PixelSurface<'_>) -> Self {
        Self { color: surface.last_pixel() }
    }
}

impl BackgroundPolicy for SentinelBackground {
    #[inline]
    fn may_paint(&self, current: [u8; 4]) -> bool {
        current == self.color
    }
}

/// Composite `raster` onto `surface` with its top-left at `origin`.
///
/// Rows at or below the surface height end the blit; columns at or past the
/// surface width end the current row. Nothing is ever written outside the buffer.
pub fn composite(
    raster: &Raster,
    surface: &mut PixelSurface<'_>,
    origin: Origin,
    options: CompositeOptions,
) {
    if options.preserve_background {
        composite_with(raster, surface, origin, options.alpha_threshold, &Overwrite);
    } else {
        let policy = SentinelBackground::sample(surface);
        composite_with(raster, surface, origin, options.alpha_threshold, &policy);
    }
}

/// Same as [`composite`] with an explicit background policy.
pub fn composite_with<P: BackgroundPolicy + ?Sized>(
    raster: &Raster,
    surface: &mut PixelSurface<'_>,
    origin: Origin,
    alpha_threshold: u8,
    policy: &P,
) {
    let (surface_w, surface_h) = (surface.width(), surface.height());

    for row in 0..raster.height() {
        let dest_y = origin.y + row;
        if dest_y >= surface_h {
            return;
        }

        for (col, rgba) in raster.row(row).chunks_exact(4).enumerate() {
            let dest_x = origin.x + col;
            if dest_x >= surface_w {
                break;
            }

            let [r, g, b, a] = [rgba[0], rgba[1], rgba[2], rgba[3]];
            if a <= alpha_threshold {
                continue;
            }

            let index = surface.index(dest_x, dest_y);
            if !policy.may_paint(surface.pixel_at(index)) {
                continue;
            }

            surface.put_rgb(index, r, g, b);
        }
    }

    tracing::trace!(x = origin.x, y = origin.y, w = raster.width(), h = raster.height(), "composited");
}
