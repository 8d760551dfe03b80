//! Backend API access: wire models and the demo/live data providers.

pub mod demo;
pub mod live;
pub mod models;
pub mod provider;

pub use demo::DemoProvider;
pub use live::LiveProvider;
pub use models::{
    ChurnRisk, MetricsSnapshot, Review, ReviewsPage, SentimentLabel, SentimentScores,
    UploadDestination,
};
pub use provider::{DataProvider, provider_for};

use thiserror::Error;

/// Failures from a single API call.
///
/// Fetch calls never surface these to callers (they substitute fallback data
/// instead); only the upload-destination path returns them, where the widget
/// maps any variant to a generic error status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or non-success HTTP status.
    #[error("Request to {url} failed: {detail}")]
    Request { url: String, detail: String },
    /// The response body could not be read within the size bound.
    #[error("Failed to read response from {url}: {source}")]
    Read {
        url: String,
        source: std::io::Error,
    },
    /// The response body was not valid JSON for the expected shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
    /// The configured base URL could not be parsed.
    #[error("Invalid API base URL {url:?}: {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },
}
