use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// REST endpoints of the indexing/search service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    BuildIndex,
    /// Server-provided progress URL returned by `BuildIndex`.
    Progress(String),
    Search,
    GetDatasetId,
    Datasets,
    UploadImages,
    RepeatedSearch,
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::Progress(_) | Self::Datasets => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::BuildIndex => "/build_index",
            Self::Progress(url) => url,
            Self::Search => "/search",
            Self::GetDatasetId => "/get_dataset_id",
            Self::Datasets => "/datasets",
            Self::UploadImages => "/upload_images",
            Self::RepeatedSearch => "/repeated_search",
        }
    }

    /// Whether the body is multipart form data rather than JSON.
    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Search | Self::UploadImages)
    }

    /// Full URL under `base_url`. Progress URLs come from the server already
    /// complete and are returned untouched.
    pub fn url(&self, base_url: &str) -> String {
        match self {
            Self::Progress(url) => url.clone(),
            _ => format!("{}{}", base_url.trim_end_matches('/'), self.path()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
