use serde::{Deserialize, Serialize};

/// Body of `POST /build_index`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildIndexRequest {
    pub dataset_names: Vec<String>,
    #[serde(default)]
    pub distributed: bool,
}

impl BuildIndexRequest {
    pub fn new(dataset_names: Vec<String>, distributed: bool) -> Self {
        Self {
            dataset_names,
            distributed,
        }
    }
}

/// Per-dataset outcome of a build request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildIndexResult {
    pub dataset: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildIndexResponse {
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub results: Vec<BuildIndexResult>,
}

impl BuildIndexResponse {
    /// `(dataset, progress_url)` for every build that was accepted.
    pub fn progress_urls(&self) -> impl Iterator<Item = (&str, &str)> {
        self.results.iter().filter(|r| r.success).filter_map(|r| {
            r.progress_url
                .as_deref()
                .map(|url| (r.dataset.as_str(), url))
        })
    }
}

/// Body of `POST /get_dataset_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDatasetIdRequest {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetIdResponse {
    pub id: i64,
}

/// Entry of `GET /datasets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: String,
    pub name: String,
    pub folder: String,
    pub image_count: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub first_image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetsResponse {
    #[serde(default)]
    pub datasets: Vec<DatasetSummary>,
}

/// Body of `POST /repeated_search`. `threshold` is a similarity percentage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepeatedSearchRequest {
    pub index_id: String,
    pub threshold: f64,
    #[serde(default)]
    pub deduplicate: bool,
}

/// Groups of image ids that are near-duplicates of each other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedSearchResponse {
    #[serde(default)]
    pub groups: Vec<Vec<i64>>,
}

/// Ranked hits of `POST /search`. The hit layout is backend-defined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadImagesResponse {
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub saved: Vec<String>,
    #[serde(default)]
    pub dataset: String,
}

/// Error body. Some routes use `msg`, others `error`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn message(&self) -> &str {
        self.error
            .as_deref()
            .or(self.msg.as_deref())
            .unwrap_or("unknown error")
    }
}
