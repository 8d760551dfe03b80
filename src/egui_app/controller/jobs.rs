//! Background work for the controller: the two initial fetches and the
//! single outbound upload, each on its own worker thread with results
//! returned over one mpsc channel polled every frame.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;
use std::time::Duration;

use crate::api::{DataProvider, MetricsSnapshot, ReviewsPage};
use crate::http_client;

/// Delay applied before reporting a simulated demo-mode upload.
pub const SIMULATED_UPLOAD_DELAY: Duration = Duration::from_millis(1500);

/// Success message for the simulated demo-mode upload.
pub const SIMULATED_UPLOAD_MESSAGE: &str = "Upload simulated (no API configured). \
     Set api_base_url in config.toml or INSIGHTFORGE_API_URL for real uploads.";

/// Success message once a real PUT completes.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded! Processing will begin shortly.";

/// Generic failure message; the detail only goes to the log.
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Please try again.";

pub(super) enum JobMessage {
    MetricsLoaded(MetricsSnapshot),
    ReviewsLoaded(ReviewsPage),
    UploadFinished(Result<String, String>),
}

pub(super) struct Jobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    metrics_pending: bool,
    reviews_pending: bool,
    upload_in_progress: bool,
}

impl Jobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = channel();
        Self {
            message_tx,
            message_rx,
            metrics_pending: false,
            reviews_pending: false,
            upload_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    /// Spawn the metrics and reviews fetches concurrently.
    pub(super) fn begin_initial_load(&mut self, provider: Arc<dyn DataProvider>, limit: usize) {
        self.metrics_pending = true;
        self.reviews_pending = true;

        let tx = self.message_tx.clone();
        let metrics_provider = Arc::clone(&provider);
        thread::spawn(move || {
            let snapshot = metrics_provider.fetch_metrics();
            let _ = tx.send(JobMessage::MetricsLoaded(snapshot));
        });

        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let page = provider.fetch_reviews(None, limit);
            let _ = tx.send(JobMessage::ReviewsLoaded(page));
        });
    }

    /// Spawn the upload: destination lookup, then either the simulated delay
    /// or one PUT of the file bytes.
    pub(super) fn begin_upload(&mut self, provider: Arc<dyn DataProvider>, path: PathBuf) {
        self.upload_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = run_upload(provider.as_ref(), &path);
            let _ = tx.send(JobMessage::UploadFinished(result));
        });
    }

    pub(super) fn initial_load_pending(&self) -> bool {
        self.metrics_pending || self.reviews_pending
    }

    pub(super) fn upload_in_progress(&self) -> bool {
        self.upload_in_progress
    }

    pub(super) fn clear_metrics_pending(&mut self) {
        self.metrics_pending = false;
    }

    pub(super) fn clear_reviews_pending(&mut self) {
        self.reviews_pending = false;
    }

    pub(super) fn clear_upload_in_progress(&mut self) {
        self.upload_in_progress = false;
    }
}

fn run_upload(provider: &dyn DataProvider, path: &std::path::Path) -> Result<String, String> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("Upload path has no usable file name: {}", path.display()))?;
    let destination = provider
        .upload_destination(filename)
        .map_err(|err| err.to_string())?;

    if destination.upload_url.is_empty() {
        thread::sleep(SIMULATED_UPLOAD_DELAY);
        tracing::info!(key = %destination.key, "Simulated upload of {filename}");
        return Ok(SIMULATED_UPLOAD_MESSAGE.to_string());
    }

    let bytes =
        std::fs::read(path).map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    http_client::put_csv(&destination.upload_url, &bytes)
        .map_err(|err| format!("PUT to {} failed: {err}", destination.upload_url))?;
    tracing::info!(key = %destination.key, "Uploaded {filename} ({} bytes)", bytes.len());
    Ok(UPLOAD_SUCCESS_MESSAGE.to_string())
}
