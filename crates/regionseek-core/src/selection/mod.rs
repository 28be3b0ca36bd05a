mod gesture;
mod loader;
mod rect;
mod selector;
mod surface;

pub use gesture::Gesture;
pub use loader::decode_bitmap;
pub use rect::{CropRect, Point};
pub use selector::{LoadState, RegionSelector};
pub use surface::{Canvas, ImageFile, ImageSource, ImageSurface, StrokeStyle};
