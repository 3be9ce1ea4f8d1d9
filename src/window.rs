// Desktop preview: mirrors the pixel surface into a minifb window.
// Visual: a window the size of the configured surface shows exactly what
// would land on the framebuffer. Closing it (or pressing ESC) ends playback.

use minifb::{Key, Window, WindowOptions};

use crate::anim::Present;
use crate::error::{Error, Result};
use crate::surface::BYTES_PER_PIXEL;

pub struct PreviewWindow {
    window: Window,      // the on-screen window you see
    pixels: Vec<u32>,    // each entry is 0x00RRGGBB for minifb
    width: usize,
    height: usize,
}

impl PreviewWindow {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::unavailable("preview window", std::io::Error::other(e.to_string())))?;
        Ok(Self { window, pixels: vec![0u32; width * height], width, height })
    }

    /// Returns false once the user closes the window or holds ESC.
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }
}

impl Present for PreviewWindow {
    fn present(&mut self, frame: &[u8]) -> Result<()> {
        if !self.is_open() {
            return Err(Error::DisplayClosed);
        }

        // Surface bytes are (b, g, r, unused).
        for (dst, px) in self.pixels.iter_mut().zip(frame.chunks_exact(BYTES_PER_PIXEL)) {
            *dst = (px[2] as u32) << 16 | (px[1] as u32) << 8 | px[0] as u32;
        }

        self.window
            .update_with_buffer(&self.pixels, self.width, self.height)
            .map_err(|e| Error::unavailable("window update", std::io::Error::other(e.to_string())))
    }
}
