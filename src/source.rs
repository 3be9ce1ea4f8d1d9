// Turns an image file into something the drivers can play.
// Visual expectation: a PNG/JPEG becomes one still sprite; a GIF becomes a
// frame sequence whose timing matches what a browser would show.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageFormat, ImageReader};

use crate::error::{Error, Result};
use crate::types::{Frame, FrameSequence, Raster, DELAY_UNIT};

/// How a file is decoded, picked from its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Still(ImageFormat),
    Animated,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| Error::unsupported(path, "missing file extension"))?;

        match ext.as_str() {
            "png" => Ok(Self::Still(ImageFormat::Png)),
            "jpg" | "jpeg" => Ok(Self::Still(ImageFormat::Jpeg)),
            "gif" => Ok(Self::Animated),
            other => Err(Error::unsupported(path, format!("unknown extension '.{other}'"))),
        }
    }
}

/// A decoded input.
#[derive(Clone, Debug)]
pub enum Source {
    Still(Raster),
    Animated(FrameSequence),
}

/// Open and decode `path`.
#[tracing::instrument]
pub fn load(path: &Path) -> Result<Source> {
    let kind = SourceKind::from_path(path)?;
    let file = File::open(path)
        .map_err(|e| Error::unavailable(format!("open image '{}'", path.display()), e))?;
    let source = decode(BufReader::new(file), kind, path)?;

    match &source {
        Source::Still(raster) => {
            tracing::debug!(w = raster.width(), h = raster.height(), "decoded still image")
        }
        Source::Animated(seq) => tracing::debug!(frames = seq.len(), "decoded animation"),
    }
    Ok(source)
}

/// Decode from any reader. `path` is only used in error messages.
pub fn decode<R: BufRead + Seek>(reader: R, kind: SourceKind, path: &Path) -> Result<Source> {
    match kind {
        SourceKind::Still(format) => {
            let image = ImageReader::with_format(reader, format)
                .decode()
                .map_err(|e| Error::unsupported(path, e))?;
            Ok(Source::Still(Raster::new(image.into_rgba8())))
        }
        SourceKind::Animated => decode_gif(reader, path).map(Source::Animated),
    }
}

fn decode_gif<R: BufRead + Seek>(reader: R, path: &Path) -> Result<FrameSequence> {
    let decoder = GifDecoder::new(reader).map_err(|e| Error::unsupported(path, e))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| Error::unsupported(path, e))?;

    if frames.is_empty() {
        return Err(Error::unsupported(path, "animation has no frames"));
    }

    let frames = frames
        .into_iter()
        .map(|frame| {
            let delay_units = delay_units(frame.delay());
            Frame { raster: Raster::new(frame.into_buffer()), delay_units }
        })
        .collect();
    Ok(FrameSequence::new(frames))
}

// GIF delays are stored in centiseconds; round back to whole units.
fn delay_units(delay: image::Delay) -> u32 {
    let (numer, denom) = delay.numer_denom_ms();
    if denom == 0 {
        return 0;
    }
    let unit_ms = DELAY_UNIT.as_millis() as u64;
    let ms = u64::from(numer) / u64::from(denom);
    ((ms + unit_ms / 2) / unit_ms) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_rounds_to_centiseconds() {
        assert_eq!(delay_units(image::Delay::from_numer_denom_ms(20, 1)), 2);
        assert_eq!(delay_units(image::Delay::from_numer_denom_ms(0, 1)), 0);
        assert_eq!(delay_units(image::Delay::from_numer_denom_ms(104, 1)), 10);
    }

    #[test]
    fn extension_dispatch_is_case_insensitive() {
        assert_eq!(
            SourceKind::from_path(Path::new("cat.PNG")).unwrap(),
            SourceKind::Still(ImageFormat::Png)
        );
        assert_eq!(SourceKind::from_path(Path::new("a/b.gif")).unwrap(), SourceKind::Animated);
        assert!(SourceKind::from_path(Path::new("notes.txt")).is_err());
        assert!(SourceKind::from_path(Path::new("no_ext")).is_err());
    }
}
