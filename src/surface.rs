// The raw destination buffer: what the display actually scans out.
// Layout per pixel is 4 bytes (blue, green, red, unused), row-major, no stride padding.

use crate::error::{Error, Result};

pub const BYTES_PER_PIXEL: usize = 4;

/// Byte length of a `width x height` surface, or an error if it does not fit in memory.
pub fn byte_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
        .ok_or(Error::SurfaceTooLarge { width, height })
}

/// Mutable view over a display-sized byte region.
pub struct PixelSurface<'a> {
    bytes: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> PixelSurface<'a> {
    /// Wrap `bytes`, which must be exactly `width * height * 4` long.
    pub fn new(bytes: &'a mut [u8], width: usize, height: usize) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if bytes.len() != expected {
            return Err(Error::SurfaceSize { expected, actual: bytes.len() });
        }
        Ok(Self { bytes, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bytes(&self) -> &[u8] {
        &*self.bytes
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }

    /// Byte offset of pixel (x, y). Caller keeps x < width and y < height.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * BYTES_PER_PIXEL
    }

    /// Current 4 bytes at a pixel offset.
    #[inline]
    pub fn pixel_at(&self, index: usize) -> [u8; 4] {
        let p = &self.bytes[index..index + BYTES_PER_PIXEL];
        [p[0], p[1], p[2], p[3]]
    }

    /// Write an RGB colour at a pixel offset, swapping into BGR order.
    /// The unused fourth byte is left alone.
    #[inline]
    pub fn put_rgb(&mut self, index: usize, r: u8, g: u8, b: u8) {
        debug_assert!(index + 3 < self.bytes.len());
        self.bytes[index] = b;
        self.bytes[index + 1] = g;
        self.bytes[index + 2] = r;
    }

    /// The last pixel of the buffer (bottom-right corner); empty surfaces read as zero.
    pub fn last_pixel(&self) -> [u8; 4] {
        match self.bytes.len().checked_sub(BYTES_PER_PIXEL) {
            Some(index) => self.pixel_at(index),
            None => [0; 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        let mut bytes = vec![0u8; 15];
        let err = PixelSurface::new(&mut bytes, 2, 2).err().unwrap();
        assert!(matches!(err, Error::SurfaceSize { expected: 16, actual: 15 }));
    }

    #[test]
    fn oversized_dimensions_are_an_error() {
        assert!(matches!(
            byte_len(usize::MAX / 2, 3),
            Err(Error::SurfaceTooLarge { height: 3, .. })
        ));
        assert_eq!(byte_len(1920, 1080).unwrap(), 1920 * 1080 * 4);

        let mut bytes = vec![0u8; 4];
        let err = PixelSurface::new(&mut bytes, usize::MAX, 2).err().unwrap();
        assert!(matches!(err, Error::SurfaceTooLarge { .. }));
    }

    #[test]
    fn put_rgb_writes_bgr_order() {
        let mut bytes = vec![0u8; 16];
        let mut surface = PixelSurface::new(&mut bytes, 2, 2).unwrap();
        let index = surface.index(1, 1);
        surface.put_rgb(index, 10, 20, 30);
        assert_eq!(surface.pixel_at(12), [30, 20, 10, 0]);
        assert_eq!(surface.last_pixel(), [30, 20, 10, 0]);
    }
}
