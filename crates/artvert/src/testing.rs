//! Fixtures shared by tests.

use std::cell::Cell;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use termcolor::Buffer;

use crate::out::{Colors, Out};

/// MPEG-1 Layer III, 128kbps, 44.1kHz, joint stereo.
const FRAME_HEADER: [u8; 4] = [0xff, 0xfb, 0x90, 0x64];
const FRAME_LEN: usize = 417;
const FRAMES: usize = 32;

/// Raw MPEG audio without any tags.
pub(crate) fn mp3() -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_LEN * FRAMES);

    for _ in 0..FRAMES {
        out.extend_from_slice(&FRAME_HEADER);
        out.resize(out.len() + FRAME_LEN - FRAME_HEADER.len(), 0);
    }

    out
}

/// Write an untagged audio file.
pub(crate) fn write_mp3(path: &Path) {
    std::fs::write(path, mp3()).unwrap();
}

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 16) as u8, (y * 16) as u8, 128])
    });

    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).unwrap();
    out.into_inner()
}

/// A PNG encoded gradient.
pub(crate) fn png(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Png)
}

/// A JPEG encoded gradient.
pub(crate) fn jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Jpeg)
}

/// Run a closure with an uncolored output which is captured to a string.
pub(crate) fn capture<T>(verbose: bool, f: impl FnOnce(&mut Out<'_>) -> T) -> (T, String) {
    let indent = Cell::new(0);
    let colors = Colors::new();
    let mut buf = Buffer::no_color();

    let value = {
        let mut o = Out::new(verbose, &indent, &colors, &mut buf);
        f(&mut o)
    };

    let output = String::from_utf8(buf.into_inner()).unwrap();
    (value, output)
}
