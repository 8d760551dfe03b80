//! Shared state types for the egui UI.
//!
//! Everything here is UI-local: the review filter, the single expanded row,
//! and the upload widget's machine state. None of it persists beyond the
//! session.

use std::path::PathBuf;

use egui::Color32;

use crate::api::SentimentLabel;
use crate::egui_app::ui::style;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// True until both initial fetches have settled.
    pub loading: bool,
    pub table: ReviewTableState,
    pub upload: UploadPanelState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            loading: false,
            table: ReviewTableState::default(),
            upload: UploadPanelState::default(),
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Dashboard ready".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}

/// Sentiment filter applied to the review table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SentimentFilter {
    #[default]
    All,
    Only(SentimentLabel),
}

impl SentimentFilter {
    /// Every filter button, in display order.
    pub const ALL: [SentimentFilter; 5] = [
        SentimentFilter::All,
        SentimentFilter::Only(SentimentLabel::Positive),
        SentimentFilter::Only(SentimentLabel::Negative),
        SentimentFilter::Only(SentimentLabel::Neutral),
        SentimentFilter::Only(SentimentLabel::Mixed),
    ];

    /// Button caption, e.g. `All` or `Positive`.
    pub fn label(self) -> &'static str {
        match self {
            SentimentFilter::All => "All",
            SentimentFilter::Only(label) => label.display_name(),
        }
    }

    /// Whether a review with the given sentiment passes this filter.
    pub fn matches(self, sentiment: SentimentLabel) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Only(label) => sentiment == label,
        }
    }
}

/// Client-side filter and expansion state for the review table.
#[derive(Clone, Debug, Default)]
pub struct ReviewTableState {
    pub filter: SentimentFilter,
    /// Review id of the single expanded row, if any.
    pub expanded: Option<String>,
}

/// File chosen for upload, by drop or dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: Option<u64>,
}

impl SelectedFile {
    /// Build from a path, reading the on-disk size when available.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let size_bytes = std::fs::metadata(&path).ok().map(|meta| meta.len());
        Self {
            name,
            path,
            size_bytes,
        }
    }
}

/// Outcome banner under the upload button.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

/// Upload widget machine state. A new selection resets any prior success or
/// error status.
#[derive(Clone, Debug, Default)]
pub struct UploadPanelState {
    pub selected: Option<SelectedFile>,
    pub uploading: bool,
    pub status: UploadStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_matching() {
        assert!(SentimentFilter::All.matches(SentimentLabel::Mixed));
        let negative = SentimentFilter::Only(SentimentLabel::Negative);
        assert!(negative.matches(SentimentLabel::Negative));
        assert!(!negative.matches(SentimentLabel::Positive));
    }

    #[test]
    fn filter_labels_read_like_buttons() {
        let labels: Vec<&str> = SentimentFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Positive", "Negative", "Neutral", "Mixed"]);
    }
}
