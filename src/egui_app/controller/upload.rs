//! Upload widget transitions: file selection, CSV gating, and submission.

use std::path::PathBuf;
use std::sync::Arc;

use crate::egui_app::state::{SelectedFile, UploadStatus};
use crate::egui_app::ui::style::StatusTone;

use super::DashboardController;

impl DashboardController {
    /// Accept a file chosen via the dialog; a new selection resets any prior
    /// success or error status.
    pub fn select_file(&mut self, path: PathBuf) {
        let selected = SelectedFile::from_path(path);
        self.set_status(format!("Selected {}", selected.name), StatusTone::Info);
        self.ui.upload.selected = Some(selected);
        self.ui.upload.status = UploadStatus::Idle;
    }

    /// Accept a dropped file if it is a CSV; otherwise set an error status
    /// and keep any previously selected file.
    pub fn handle_dropped_file(&mut self, path: PathBuf) {
        let is_csv = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.to_ascii_lowercase().ends_with(".csv"));
        if is_csv {
            self.select_file(path);
        } else {
            self.ui.upload.status =
                UploadStatus::Error("Only CSV files are accepted.".to_string());
            self.set_status("Rejected non-CSV drop", StatusTone::Warning);
        }
    }

    /// Open the OS file dialog filtered to CSV files.
    pub fn browse_for_file(&mut self) {
        if self.ui.upload.uploading {
            return;
        }
        let picked = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .pick_file();
        if let Some(path) = picked {
            self.select_file(path);
        }
    }

    /// Submit the selected file. The widget stays suspended (submit disabled)
    /// until the single outbound request settles.
    pub fn begin_upload(&mut self) {
        if self.ui.upload.uploading {
            return;
        }
        let Some(selected) = self.ui.upload.selected.clone() else {
            return;
        };
        self.ui.upload.uploading = true;
        self.ui.upload.status = UploadStatus::Idle;
        self.set_status(format!("Uploading {}", selected.name), StatusTone::Busy);
        self.jobs
            .begin_upload(Arc::clone(&self.provider), selected.path);
    }

    /// True while the outbound transfer (or its simulation) is in flight.
    pub fn uploading(&self) -> bool {
        self.ui.upload.uploading
    }
}
