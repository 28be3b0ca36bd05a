use serde::{Deserialize, Serialize};

use crate::error::{RegionSeekError, Result};

/// Pointer position in canvas-local coordinates (origin top-left, one unit per
/// backing-store pixel). Translating page coordinates is the host's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned selection in canvas pixel space. `w`/`h` may be zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Normalized rectangle spanned by two corners, in either drag direction.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: a.x.abs_diff(b.x),
            h: a.y.abs_diff(b.y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }

    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.w)
    }

    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.h)
    }

    /// Check that the rect is non-empty and lies inside a `width`x`height` image.
    pub fn validated(&self, width: u32, height: u32) -> Result<CropRect> {
        if self.is_empty() {
            return Err(RegionSeekError::InvalidCrop(
                "Crop width and height must be > 0".into(),
            ));
        }

        if self.right() > u64::from(width) || self.bottom() > u64::from(height) {
            return Err(RegionSeekError::InvalidCrop(format!(
                "Crop region ({},{} {}x{}) exceeds image dimensions ({width}x{height})",
                self.x, self.y, self.w, self.h
            )));
        }

        Ok(*self)
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.w, self.h, self.x, self.y)
    }
}
