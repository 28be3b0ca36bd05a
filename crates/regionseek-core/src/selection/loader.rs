use std::sync::mpsc::{self, Receiver, TryRecvError};

use image::RgbaImage;
use tracing::debug;

use crate::error::{RegionSeekError, Result};

use super::surface::{ImageFile, ImageSource, ImageSurface};

/// State of the decode started by the last `load_file`.
pub(super) enum DecodePoll {
    Pending,
    Done(Result<ImageSurface>),
}

/// A decode running on a worker thread. Dropping it abandons the result.
pub(super) struct PendingDecode {
    name: String,
    rx: Receiver<Result<RgbaImage>>,
}

impl PendingDecode {
    pub(super) fn spawn(file: ImageFile) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let name = file.name.clone();

        std::thread::Builder::new()
            .name("regionseek-decode".into())
            .spawn(move || {
                let _ = tx.send(decode_bitmap(&file.bytes));
            })?;

        debug!(file = %name, "decode started");
        Ok(Self { name, rx })
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn poll(&self) -> DecodePoll {
        match self.rx.try_recv() {
            Ok(result) => DecodePoll::Done(self.finish(result)),
            Err(TryRecvError::Empty) => DecodePoll::Pending,
            Err(TryRecvError::Disconnected) => DecodePoll::Done(Err(RegionSeekError::WorkerGone)),
        }
    }

    pub(super) fn wait(self) -> Result<ImageSurface> {
        let result = self.rx.recv().map_err(|_| RegionSeekError::WorkerGone)?;
        self.finish(result)
    }

    fn finish(&self, result: Result<RgbaImage>) -> Result<ImageSurface> {
        let bitmap = result?;
        Ok(ImageSurface::new(ImageSource::File(self.name.clone()), bitmap))
    }
}

/// Decode an encoded image (format guessed from its bytes) into RGBA.
pub fn decode_bitmap(bytes: &[u8]) -> Result<RgbaImage> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}
