use crate::consts::DEFAULT_TOP_K;
use crate::error::{RegionSeekError, Result};
use crate::selection::{CropRect, ImageFile};

/// A file part of a multipart body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilePart<'a> {
    pub field: &'static str,
    pub filename: &'a str,
    pub bytes: &'a [u8],
}

/// Multipart body of `POST /search`: the query image plus the crop selected on it.
#[derive(Clone, Debug)]
pub struct SearchForm<'a> {
    query: &'a ImageFile,
    crop: CropRect,
    dataset_names: Vec<String>,
    top_k: u32,
}

impl<'a> SearchForm<'a> {
    pub fn new(query: &'a ImageFile, crop: CropRect) -> Self {
        Self {
            query,
            crop,
            dataset_names: Vec::new(),
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn dataset(mut self, name: impl Into<String>) -> Self {
        self.dataset_names.push(name.into());
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn crop(&self) -> CropRect {
        self.crop
    }

    /// Reject forms the backend would answer with 400.
    pub fn validate(&self) -> Result<()> {
        if !self.dataset_names.iter().any(|n| !n.trim().is_empty()) {
            return Err(RegionSeekError::InvalidRequest(
                "at least one dataset name is required".into(),
            ));
        }
        if self.query.name.is_empty() || self.query.bytes.is_empty() {
            return Err(RegionSeekError::InvalidRequest(
                "query image is missing".into(),
            ));
        }
        Ok(())
    }

    /// Text fields in send order. Blank dataset names are skipped.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<(&'static str, String)> = self
            .dataset_names
            .iter()
            .filter(|n| !n.trim().is_empty())
            .map(|n| ("dataset_names[]", n.trim().to_string()))
            .collect();

        fields.push(("top_k", self.top_k.to_string()));
        fields.push(("crop_x", self.crop.x.to_string()));
        fields.push(("crop_y", self.crop.y.to_string()));
        fields.push(("crop_w", self.crop.w.to_string()));
        fields.push(("crop_h", self.crop.h.to_string()));
        fields
    }

    pub fn file_part(&self) -> FilePart<'a> {
        FilePart {
            field: "query_img",
            filename: &self.query.name,
            bytes: &self.query.bytes,
        }
    }
}

/// Multipart body of `POST /upload_images`.
#[derive(Clone, Debug)]
pub struct UploadImagesForm<'a> {
    dataset: String,
    images: Vec<&'a ImageFile>,
}

impl<'a> UploadImagesForm<'a> {
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            images: Vec::new(),
        }
    }

    pub fn image(mut self, file: &'a ImageFile) -> Self {
        self.images.push(file);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.dataset.trim().is_empty() {
            return Err(RegionSeekError::InvalidRequest("dataset is required".into()));
        }
        if self.images.is_empty() {
            return Err(RegionSeekError::InvalidRequest("no images selected".into()));
        }
        Ok(())
    }

    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![("dataset", self.dataset.clone())]
    }

    pub fn file_parts(&self) -> Vec<FilePart<'a>> {
        self.images
            .iter()
            .map(|&f| FilePart {
                field: "images",
                filename: &f.name,
                bytes: &f.bytes,
            })
            .collect()
    }
}
