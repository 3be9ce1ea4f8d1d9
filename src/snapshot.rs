// Snapshot of the surface as it looked before any sprite was drawn.
// Visual: every redraw starts from this pristine picture, so a moving sprite
// never leaves a trail behind it.

use crate::draw::{composite, CompositeOptions};
use crate::error::{Error, Result};
use crate::surface::PixelSurface;
use crate::types::{Origin, Raster};

/// Owned copy of the surface bytes, captured once and read-only afterwards.
#[derive(Clone, Debug)]
pub struct Snapshot {
    bytes: Box<[u8]>,
    width: usize,
    height: usize,
}

impl Snapshot {
    pub fn capture(surface: &PixelSurface<'_>) -> Self {
        Self {
            bytes: surface.bytes().into(),
            width: surface.width(),
            height: surface.height(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// One-shot restore + composite that allocates its own scratch buffer.
    /// Animation loops use [`Stage`] to reuse the scratch instead.
    pub fn restore_and_composite(
        &self,
        raster: &Raster,
        surface: &mut PixelSurface<'_>,
        origin: Origin,
        options: CompositeOptions,
    ) -> Result<()> {
        let mut scratch = Vec::new();
        redraw(self, &mut scratch, raster, surface, origin, options)
    }
}

/// A snapshot plus a reusable scratch buffer for erase-and-redraw cycles.
pub struct Stage {
    snapshot: Snapshot,
    scratch: Vec<u8>,
}

impl Stage {
    pub fn new(snapshot: Snapshot) -> Self {
        let scratch = Vec::with_capacity(snapshot.bytes.len());
        Self { snapshot, scratch }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Restore the pristine picture, draw `raster` on it, then publish the result.
    pub fn redraw(
        &mut self,
        raster: &Raster,
        surface: &mut PixelSurface<'_>,
        origin: Origin,
        options: CompositeOptions,
    ) -> Result<()> {
        redraw(&self.snapshot, &mut self.scratch, raster, surface, origin, options)
    }
}

// The live surface only sees the finished frame, in one copy.
fn redraw(
    snapshot: &Snapshot,
    scratch: &mut Vec<u8>,
    raster: &Raster,
    surface: &mut PixelSurface<'_>,
    origin: Origin,
    options: CompositeOptions,
) -> Result<()> {
    if surface.bytes().len() != snapshot.bytes.len() {
        return Err(Error::SurfaceSize {
            expected: snapshot.bytes.len(),
            actual: surface.bytes().len(),
        });
    }

    scratch.clear();
    scratch.extend_from_slice(&snapshot.bytes);

    let mut work = PixelSurface::new(scratch, snapshot.width, snapshot.height)?;
    composite(raster, &mut work, origin, options);

    surface.bytes_mut().copy_from_slice(work.bytes());
    Ok(())
}
