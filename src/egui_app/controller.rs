//! Maintains dashboard state and bridges the data provider to the egui UI.

use std::sync::Arc;

use crate::api::{DataProvider, MetricsSnapshot, Review};
use crate::egui_app::state::{SentimentFilter, StatusBarState, UiState, UploadStatus};
use crate::egui_app::ui::style::StatusTone;

mod jobs;
mod table;
mod upload;


pub use jobs::{
    SIMULATED_UPLOAD_DELAY, SIMULATED_UPLOAD_MESSAGE, UPLOAD_FAILED_MESSAGE,
    UPLOAD_SUCCESS_MESSAGE,
};

/// Owns the two top-level snapshots and all UI-local state.
///
/// Snapshots are replaced wholesale when a load settles, never merged or
/// mutated in place.
pub struct DashboardController {
    pub ui: UiState,
    provider: Arc<dyn DataProvider>,
    review_limit: usize,
    metrics: Option<MetricsSnapshot>,
    reviews: Vec<Review>,
    jobs: jobs::Jobs,
}

impl DashboardController {
    pub fn new(provider: Arc<dyn DataProvider>, review_limit: usize) -> Self {
        Self {
            ui: UiState::default(),
            provider,
            review_limit,
            metrics: None,
            reviews: Vec::new(),
            jobs: jobs::Jobs::new(),
        }
    }

    /// Kick off the two initial fetches concurrently and enter the loading state.
    pub fn begin_initial_load(&mut self) {
        self.ui.loading = true;
        self.set_status("Loading dashboard data", StatusTone::Busy);
        self.jobs
            .begin_initial_load(Arc::clone(&self.provider), self.review_limit);
    }

    /// Drain finished background work into UI state. Called once per frame.
    pub fn poll_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                jobs::JobMessage::MetricsLoaded(snapshot) => {
                    self.metrics = Some(snapshot);
                    self.jobs.clear_metrics_pending();
                }
                jobs::JobMessage::ReviewsLoaded(page) => {
                    self.reviews = page.reviews;
                    self.jobs.clear_reviews_pending();
                }
                jobs::JobMessage::UploadFinished(result) => self.finish_upload(result),
            }
        }
        if self.ui.loading && !self.jobs.initial_load_pending() {
            self.ui.loading = false;
            self.set_status(
                format!("Showing {} reviews", self.reviews.len()),
                StatusTone::Info,
            );
        }
    }

    /// Latest aggregate metrics, if the initial load has delivered them.
    pub fn metrics(&self) -> Option<&MetricsSnapshot> {
        self.metrics.as_ref()
    }

    /// The full in-memory review list, unfiltered.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// True while the initial fetches are still outstanding.
    pub fn loading(&self) -> bool {
        self.ui.loading
    }

    /// True while any background work is outstanding and the UI should keep
    /// repainting to pick up its results.
    pub fn busy(&self) -> bool {
        self.jobs.initial_load_pending() || self.jobs.upload_in_progress()
    }

    /// Update the footer badge and text.
    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState {
            text: text.into(),
            badge_label: tone.label().to_string(),
            badge_color: crate::egui_app::ui::style::status_badge_color(tone),
        };
    }

    fn finish_upload(&mut self, result: Result<String, String>) {
        self.ui.upload.uploading = false;
        self.jobs.clear_upload_in_progress();
        match result {
            Ok(message) => {
                self.ui.upload.status = UploadStatus::Success(message);
                self.set_status("Upload finished", StatusTone::Success);
            }
            Err(detail) => {
                tracing::error!("Upload failed: {detail}");
                self.ui.upload.status = UploadStatus::Error(UPLOAD_FAILED_MESSAGE.to_string());
                self.set_status("Upload failed", StatusTone::Error);
            }
        }
    }

    /// Reviews passing the current filter, in original order.
    pub fn filtered_reviews(&self) -> Vec<&Review> {
        table::filter_reviews(&self.reviews, self.ui.table.filter)
    }

    /// Change the table filter. The expanded row id is kept even while the
    /// filter hides that row, so it re-expands when the filter brings it back.
    pub fn set_filter(&mut self, filter: SentimentFilter) {
        self.ui.table.filter = filter;
    }

    /// Expand the given row, or collapse it if it is already expanded.
    pub fn toggle_row(&mut self, review_id: &str) {
        table::toggle_expanded(&mut self.ui.table.expanded, review_id);
    }
}
