use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionSeekError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),

    #[error("No image loaded")]
    NoImage,

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Progress source error: {0}")]
    Source(String),

    #[error("Worker thread exited before sending a result")]
    WorkerGone,
}

pub type Result<T> = std::result::Result<T, RegionSeekError>;
