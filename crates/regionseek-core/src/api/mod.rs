//! Request shaping for the indexing/search REST service.
//!
//! Transport is left to the host; these types only describe what goes over the
//! wire.

mod endpoint;
mod form;
mod types;

pub use endpoint::{Endpoint, HttpMethod};
pub use form::{FilePart, SearchForm, UploadImagesForm};
pub use types::{
    ApiErrorBody, BuildIndexRequest, BuildIndexResponse, BuildIndexResult, DatasetIdResponse,
    DatasetSummary, DatasetsResponse, GetDatasetIdRequest, RepeatedSearchRequest,
    RepeatedSearchResponse, SearchResponse, UploadImagesResponse,
};
