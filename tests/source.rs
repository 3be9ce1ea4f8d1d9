use std::fs::File;
use std::path::Path;

use fbsprite::{source, Error, Source};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

fn write_png(path: &Path) {
    let mut img = RgbaImage::new(3, 2);
    img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
    img.put_pixel(2, 1, image::Rgba([0, 0, 255, 0]));
    img.save(path).unwrap();
}

fn write_gif(path: &Path, delays_ms: &[u32]) {
    let mut encoder = GifEncoder::new(File::create(path).unwrap());
    encoder.set_repeat(Repeat::Infinite).unwrap();
    let frames = delays_ms.iter().enumerate().map(|(i, &ms)| {
        let shade = (i as u8).wrapping_mul(80);
        let buffer = RgbaImage::from_pixel(4, 4, image::Rgba([shade, shade, shade, 255]));
        Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(ms, 1))
    });
    encoder.encode_frames(frames).unwrap();
}

#[test]
fn png_decodes_to_a_still_raster() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sprite.png");
    write_png(&path);

    let Source::Still(raster) = source::load(&path).unwrap() else {
        panic!("expected a still image");
    };
    assert_eq!((raster.width(), raster.height()), (3, 2));
    assert_eq!(raster.pixel(0, 0), [255, 0, 0, 255]);
    assert_eq!(raster.pixel(2, 1)[3], 0);
}

#[test]
fn gif_decodes_to_a_timed_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dance.gif");
    write_gif(&path, &[100, 200, 50]);

    let Source::Animated(sequence) = source::load(&path).unwrap() else {
        panic!("expected an animation");
    };
    let delays: Vec<u32> = sequence.frames().iter().map(|f| f.delay_units).collect();
    assert_eq!(delays, vec![10, 20, 5]);
    assert!(sequence.frames().iter().all(|f| f.raster.width() == 4 && f.raster.height() == 4));
}

#[test]
fn unknown_extension_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"hello").unwrap();

    let err = source::load(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedSource { .. }));
}

#[test]
fn garbage_png_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let err = source::load(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedSource { .. }));
}

#[test]
fn missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = source::load(&dir.path().join("gone.png")).unwrap_err();
    assert!(matches!(err, Error::ResourceUnavailable { .. }));
}
