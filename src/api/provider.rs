//! The data-provider seam between the dashboard and its backend.

use std::sync::Arc;

use crate::config::AppConfig;

use super::demo::DemoProvider;
use super::live::LiveProvider;
use super::models::{MetricsSnapshot, ReviewsPage, SentimentLabel, UploadDestination};
use super::ApiError;

/// Source of dashboard data, selected once at startup.
///
/// Calls block and are made from worker threads, never from the UI thread.
/// The two fetch methods are infallible by contract: a live provider that
/// cannot reach the backend substitutes the demo payloads instead of failing.
pub trait DataProvider: Send + Sync {
    /// Aggregate metrics for the cards and charts.
    fn fetch_metrics(&self) -> MetricsSnapshot;

    /// One page of reviews, optionally server-filtered by sentiment.
    fn fetch_reviews(&self, sentiment: Option<SentimentLabel>, limit: usize) -> ReviewsPage;

    /// Pre-signed destination for one CSV upload.
    ///
    /// An empty `upload_url` in the result tells the widget to simulate.
    fn upload_destination(&self, filename: &str) -> Result<UploadDestination, ApiError>;
}

/// Build the provider selected by the configuration.
///
/// No base URL selects demo mode. An unparseable base URL also falls back to
/// demo mode with a warning rather than refusing to start.
pub fn provider_for(config: &AppConfig) -> Arc<dyn DataProvider> {
    match &config.api_base_url {
        None => {
            tracing::info!("No API base URL configured; running in demo mode");
            Arc::new(DemoProvider)
        }
        Some(base) => match LiveProvider::new(base) {
            Ok(provider) => {
                tracing::info!(base_url = %base, "Using live API provider");
                Arc::new(provider)
            }
            Err(err) => {
                tracing::warn!("Falling back to demo mode: {err}");
                Arc::new(DemoProvider)
            }
        },
    }
}
