use std::path::Path;

use image::{imageops, Pixel, Rgba, RgbaImage};

use crate::config::SelectorConfig;
use crate::consts::{DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH};
use crate::error::Result;

use super::rect::CropRect;

/// An image file picked by the user, held as an opaque byte blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        Ok(Self { name, bytes })
    }
}

/// Where the displayed bitmap came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ImageSource {
    /// No image loaded.
    #[default]
    None,
    File(String),
}

/// A decoded bitmap and its origin. Replaced wholesale on every load.
#[derive(Clone, Debug, Default)]
pub struct ImageSurface {
    pub source: ImageSource,
    pub natural_width: u32,
    pub natural_height: u32,
    bitmap: Option<RgbaImage>,
}

impl ImageSurface {
    pub fn new(source: ImageSource, bitmap: RgbaImage) -> Self {
        Self {
            source,
            natural_width: bitmap.width(),
            natural_height: bitmap.height(),
            bitmap: Some(bitmap),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.bitmap.is_some()
    }

    pub fn bitmap(&self) -> Option<&RgbaImage> {
        self.bitmap.as_ref()
    }
}

/// Outline used for the selection rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeStyle {
    pub width: u32,
    pub color: Rgba<u8>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_STROKE_WIDTH,
            color: Rgba(DEFAULT_STROKE_COLOR),
        }
    }
}

impl From<&SelectorConfig> for StrokeStyle {
    fn from(config: &SelectorConfig) -> Self {
        Self {
            width: config.stroke_width,
            color: Rgba(config.stroke_color),
        }
    }
}

/// RGBA backing store the selection is drawn on.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Reallocate the backing store. Contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::new(width, height);
    }

    /// Clear, paint `bitmap` at the origin without scaling, then outline `rect`.
    pub fn draw(&mut self, bitmap: &RgbaImage, rect: Option<CropRect>, style: &StrokeStyle) {
        self.clear();
        imageops::replace(&mut self.pixels, bitmap, 0, 0);
        if let Some(rect) = rect {
            self.stroke_rect(rect, style);
        }
    }

    fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
    }

    /// Stroke centred on the rectangle edges, like a 2D canvas `strokeRect`.
    fn stroke_rect(&mut self, rect: CropRect, style: &StrokeStyle) {
        // A zero-sized path has no segments to stroke.
        if (rect.w == 0 && rect.h == 0) || style.width == 0 {
            return;
        }

        let outer_pad = i64::from(style.width / 2);
        let inner_pad = i64::from(style.width) - outer_pad;

        let (x0, y0) = (i64::from(rect.x), i64::from(rect.y));
        let (x1, y1) = (x0 + i64::from(rect.w), y0 + i64::from(rect.h));

        let outer = (x0 - outer_pad, y0 - outer_pad, x1 + outer_pad, y1 + outer_pad);
        let inner = (x0 + inner_pad, y0 + inner_pad, x1 - inner_pad, y1 - inner_pad);

        let max_x = i64::from(self.width());
        let max_y = i64::from(self.height());

        for y in outer.1.max(0)..outer.3.min(max_y) {
            for x in outer.0.max(0)..outer.2.min(max_x) {
                let in_hole = x >= inner.0 && x < inner.2 && y >= inner.1 && y < inner.3;
                if !in_hole {
                    self.pixels
                        .get_pixel_mut(x as u32, y as u32)
                        .blend(&style.color);
                }
            }
        }
    }
}
