#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use regionseek_core::selection::{ImageFile, LoadState, RegionSelector};

/// Deterministic test bitmap: red = x, green = y, blue = 128.
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    })
}

/// Encode `gradient(width, height)` as PNG bytes.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    gradient(width, height)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

pub fn png_file(name: &str, width: u32, height: u32) -> ImageFile {
    ImageFile::from_bytes(name, png_bytes(width, height))
}

/// Selector with a decoded `width`x`height` gradient.
pub fn loaded_selector(width: u32, height: u32) -> RegionSelector {
    let mut selector = RegionSelector::new();
    selector.load_file(Some(png_file("query.png", width, height)));
    assert_eq!(selector.wait_decode(), LoadState::Ready);
    selector
}

/// True if the canvas shows exactly the loaded bitmap, with no overlay.
pub fn canvas_shows_bitmap(selector: &RegionSelector) -> bool {
    match selector.surface().bitmap() {
        Some(bitmap) => selector.canvas().pixels() == bitmap,
        None => false,
    }
}
