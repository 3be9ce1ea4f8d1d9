// Opens a Linux framebuffer device and maps it into memory.
// Visual: once mapped, every byte written to the surface shows up on the
// console immediately. Dropping the `Framebuffer` unmaps it.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use memmap2::{MmapMut, MmapOptions};

use crate::error::{Error, Result};
use crate::surface::{byte_len, PixelSurface};

pub const DEFAULT_DEVICE: &str = "/dev/fb0";

/// A shared, writable mapping of `width * height * 4` bytes of a device.
pub struct Framebuffer {
    map: MmapMut,
    width: usize,
    height: usize,
    path: PathBuf,
}

impl Framebuffer {
    pub fn open(path: &Path, width: usize, height: usize) -> Result<Self> {
        let len = byte_len(width, height)?;
        let what = || format!("framebuffer '{}'", path.display());
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| Error::unavailable(what(), e))?;

        // SAFETY: the mapping is shared with the display driver only; nothing
        // in this process truncates or remaps the device while it is alive.
        let map = unsafe { MmapOptions::new().len(len).map_mut(&file) }
            .map_err(|e| Error::unavailable(format!("mmap {}", what()), e))?;

        tracing::info!(device = %path.display(), width, height, "framebuffer mapped");
        Ok(Self { map, width, height, path: path.to_path_buf() })
    }

    /// Borrow the mapping as a pixel surface for the session.
    pub fn surface(&mut self) -> Result<PixelSurface<'_>> {
        PixelSurface::new(&mut self.map[..], self.width, self.height)
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        tracing::debug!(device = %self.path.display(), "framebuffer unmapped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fake_device(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn writes_through_the_surface_reach_the_device() {
        let device = fake_device(&[7u8; 4 * 4 * 4]);

        let mut fb = Framebuffer::open(device.path(), 4, 4).unwrap();
        {
            let mut surface = fb.surface().unwrap();
            assert_eq!(surface.bytes().len(), 64);
            assert_eq!(surface.bytes()[0], 7);
            let index = surface.index(3, 3);
            surface.put_rgb(index, 1, 2, 3);
        }
        drop(fb);

        let on_disk = std::fs::read(device.path()).unwrap();
        assert_eq!(&on_disk[60..64], &[3u8, 2, 1, 7]);
        assert!(on_disk[..60].iter().all(|&b| b == 7));
    }

    #[test]
    fn missing_device_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Framebuffer::open(&dir.path().join("fb9"), 4, 4).err().unwrap();
        assert!(matches!(err, Error::ResourceUnavailable { .. }));
    }

    #[test]
    fn oversized_geometry_is_reported_not_a_panic() {
        let device = fake_device(&[0u8; 16]);
        let err = Framebuffer::open(device.path(), usize::MAX / 2, 3).err().unwrap();
        assert!(matches!(err, Error::SurfaceTooLarge { .. }));
    }
}
