use image::{imageops, RgbaImage};
use tracing::{debug, warn};

use crate::config::SelectorConfig;
use crate::error::{RegionSeekError, Result};

use super::gesture::Gesture;
use super::loader::{DecodePoll, PendingDecode};
use super::rect::{CropRect, Point};
use super::surface::{Canvas, ImageFile, ImageSurface, StrokeStyle};

/// Where the selector is in its image lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Empty,
    Decoding,
    Ready,
    /// The last file could not be decoded; the preview was left as it was.
    Failed,
}

/// Canvas region-selection tool.
///
/// Owns the displayed image, its drawing surface, the live drag gesture and the
/// last committed crop. Pointer coordinates arrive already in canvas-local space.
pub struct RegionSelector {
    surface: ImageSurface,
    canvas: Canvas,
    gesture: Gesture,
    committed: Option<CropRect>,
    style: StrokeStyle,
    pending: Option<PendingDecode>,
    load_state: LoadState,
}

impl Default for RegionSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionSelector {
    pub fn new() -> Self {
        Self::with_style(StrokeStyle::default())
    }

    pub fn with_style(style: StrokeStyle) -> Self {
        Self {
            surface: ImageSurface::default(),
            canvas: Canvas::default(),
            gesture: Gesture::Idle,
            committed: None,
            style,
            pending: None,
            load_state: LoadState::Empty,
        }
    }

    pub fn from_config(config: &SelectorConfig) -> Self {
        Self::with_style(StrokeStyle::from(config))
    }

    /// Start decoding `file` in the background. `None` is ignored.
    ///
    /// Any live gesture and the committed crop are dropped immediately since
    /// their coordinates belong to the previous image. The previous bitmap stays
    /// on screen until the decode lands (see [`poll_decode`](Self::poll_decode)
    /// and [`wait_decode`](Self::wait_decode)); a selection made in the meantime
    /// is dropped when the new image is installed.
    pub fn load_file(&mut self, file: Option<ImageFile>) {
        let Some(file) = file else {
            return;
        };

        if self.gesture.is_active() {
            debug!("gesture abandoned by image reload");
        }
        self.gesture.cancel();
        self.committed = None;
        self.render(None);

        if let Some(superseded) = self.pending.take() {
            warn!(file = %superseded.name(), "discarding superseded decode");
        }

        match PendingDecode::spawn(file) {
            Ok(pending) => {
                self.pending = Some(pending);
                self.load_state = LoadState::Decoding;
            }
            Err(e) => {
                warn!("could not start image decode: {e}");
                self.pending = None;
                self.decode_failed();
            }
        }
    }

    /// Install the decoded image if it is ready. Returns the current state.
    pub fn poll_decode(&mut self) -> LoadState {
        let outcome = match &self.pending {
            Some(pending) => pending.poll(),
            None => return self.load_state,
        };

        if let DecodePoll::Done(result) = outcome {
            self.pending = None;
            self.finish_decode(result);
        }
        self.load_state
    }

    /// Block until the current decode finishes, then install it.
    pub fn wait_decode(&mut self) -> LoadState {
        if let Some(pending) = self.pending.take() {
            self.finish_decode(pending.wait());
        }
        self.load_state
    }

    fn finish_decode(&mut self, result: Result<ImageSurface>) {
        match result {
            Ok(surface) => {
                debug!(
                    width = surface.natural_width,
                    height = surface.natural_height,
                    "image decoded"
                );
                // Input taken while decoding is in the old image's space.
                if self.gesture.is_active() || self.committed.is_some() {
                    debug!("selection made during decode discarded");
                }
                self.gesture.cancel();
                self.committed = None;
                self.canvas
                    .resize(surface.natural_width, surface.natural_height);
                self.surface = surface;
                self.load_state = LoadState::Ready;
                self.render(None);
            }
            Err(e) => {
                warn!("image decode failed: {e}");
                self.decode_failed();
            }
        }
    }

    fn decode_failed(&mut self) {
        self.surface = ImageSurface::default();
        self.load_state = LoadState::Failed;
    }

    /// Redraw the bitmap and, optionally, a rectangle outline on top.
    ///
    /// Always clears first, so repeated calls with the same arguments leave the
    /// same pixels. Does nothing while no image is loaded.
    pub fn render(&mut self, preview: Option<CropRect>) {
        if let Some(bitmap) = self.surface.bitmap() {
            self.canvas.draw(bitmap, preview, &self.style);
        }
    }

    pub fn on_pointer_down(&mut self, x: u32, y: u32) {
        if let Some(rect) = self.gesture.press(Point::new(x, y)) {
            debug!(%rect, "press during live gesture; releasing it first");
            self.commit(rect);
        }
        debug!(x, y, "gesture started");
    }

    pub fn on_pointer_move(&mut self, x: u32, y: u32) {
        if let Some(rect) = self.gesture.drag_to(Point::new(x, y)) {
            self.render(Some(rect));
        }
    }

    pub fn on_pointer_up(&mut self, x: u32, y: u32) {
        if let Some(rect) = self.gesture.release(Point::new(x, y)) {
            debug!(%rect, "gesture committed");
            self.commit(rect);
        }
    }

    fn commit(&mut self, rect: CropRect) {
        self.committed = Some(rect);
        self.render(Some(rect));
    }

    /// Last committed selection, or a zero rect if none.
    pub fn get_crop(&self) -> CropRect {
        self.committed.unwrap_or_default()
    }

    /// Selection of the gesture in progress.
    pub fn preview(&self) -> Option<CropRect> {
        self.gesture.rect()
    }

    pub fn has_committed_crop(&self) -> bool {
        self.committed.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Pixels of the committed crop, cut from the loaded bitmap.
    pub fn extract_crop(&self) -> Result<RgbaImage> {
        let bitmap = self.surface.bitmap().ok_or(RegionSeekError::NoImage)?;
        let rect = self
            .get_crop()
            .validated(bitmap.width(), bitmap.height())?;
        Ok(imageops::crop_imm(bitmap, rect.x, rect.y, rect.w, rect.h).to_image())
    }
}
