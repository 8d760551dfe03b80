//! Pure filter and expansion logic for the review table.

use crate::api::Review;
use crate::egui_app::state::SentimentFilter;

/// Select the reviews passing the filter, preserving original order.
pub(super) fn filter_reviews(reviews: &[Review], filter: SentimentFilter) -> Vec<&Review> {
    reviews
        .iter()
        .filter(|review| filter.matches(review.sentiment))
        .collect()
}

/// Toggle expansion for one row id: expanding it, moving the single
/// expansion to it, or collapsing it when already expanded.
pub(super) fn toggle_expanded(expanded: &mut Option<String>, review_id: &str) {
    if expanded.as_deref() == Some(review_id) {
        *expanded = None;
    } else {
        *expanded = Some(review_id.to_string());
    }
}
