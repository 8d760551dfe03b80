//! Helpers to convert domain data into egui-facing view structs.

use time::macros::format_description;

use crate::api::{ChurnRisk, Review, SentimentLabel, SentimentScores};

/// Number of key-phrase chips shown on a collapsed row.
const MAX_PHRASE_CHIPS: usize = 3;

/// Display data for one collapsed table row.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRow {
    pub id: String,
    pub customer: String,
    pub date_label: String,
    pub sentiment: SentimentLabel,
    pub churn: ChurnRisk,
    /// Negative-confidence share in `[0, 1]` driving the meter width.
    pub negative_fraction: f32,
    pub negative_label: String,
    pub phrases: Vec<String>,
}

/// Convert a review into a table row.
pub fn review_row(review: &Review) -> ReviewRow {
    ReviewRow {
        id: review.review_id.clone(),
        customer: review.customer_name.clone(),
        date_label: format_review_date(&review.date),
        sentiment: review.sentiment,
        churn: review.churn_risk,
        negative_fraction: review.negative_score.clamp(0.0, 1.0) as f32,
        negative_label: score_percent(review.negative_score),
        phrases: review
            .key_phrases
            .iter()
            .take(MAX_PHRASE_CHIPS)
            .cloned()
            .collect(),
    }
}

/// The four confidence percentages shown in an expanded row.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreBreakdown {
    pub positive: String,
    pub negative: String,
    pub neutral: String,
    pub mixed: String,
}

/// Convert a score distribution into display percentages.
pub fn score_breakdown(scores: &SentimentScores) -> ScoreBreakdown {
    ScoreBreakdown {
        positive: score_percent(scores.positive),
        negative: score_percent(scores.negative),
        neutral: score_percent(scores.neutral),
        mixed: score_percent(scores.mixed),
    }
}

/// Integer percentage string for a `[0, 1]` score, e.g. `42%`.
pub fn score_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Format an ISO date (or datetime) as e.g. `Mar 5, 2025`.
///
/// Unparseable dates fall back to the raw payload string rather than hiding
/// the row.
pub fn format_review_date(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    let parsed = time::Date::parse(date_part, format_description!("[year]-[month]-[day]"));
    match parsed {
        Ok(date) => date
            .format(format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

/// Human-readable file size for the drop zone, e.g. `12.3 KB`.
pub fn file_size_label(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::demo;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_review_date("2025-03-05"), "Mar 5, 2025");
        assert_eq!(format_review_date("2024-12-31"), "Dec 31, 2024");
        assert_eq!(format_review_date("2025-03-05T12:30:00Z"), "Mar 5, 2025");
    }

    #[test]
    fn unparseable_dates_fall_back_to_raw() {
        assert_eq!(format_review_date("last tuesday"), "last tuesday");
        assert_eq!(format_review_date(""), "");
    }

    #[test]
    fn rows_cap_phrases_at_three() {
        let mut review = demo::mock_reviews().remove(0);
        review.key_phrases = vec![
            "one".into(),
            "two".into(),
            "three".into(),
            "four".into(),
        ];
        let row = review_row(&review);
        assert_eq!(row.phrases, ["one", "two", "three"]);
    }

    #[test]
    fn negative_meter_tracks_score() {
        let mut review = demo::mock_reviews().remove(1);
        review.negative_score = 0.91;
        let row = review_row(&review);
        assert!((row.negative_fraction - 0.91).abs() < 1e-6);
        assert_eq!(row.negative_label, "91%");
    }

    #[test]
    fn breakdown_renders_integer_percentages() {
        let scores = SentimentScores {
            positive: 0.31,
            negative: 0.42,
            neutral: 0.12,
            mixed: 0.15,
        };
        let breakdown = score_breakdown(&scores);
        assert_eq!(breakdown.positive, "31%");
        assert_eq!(breakdown.negative, "42%");
    }

    #[test]
    fn file_sizes_render_in_kib() {
        assert_eq!(file_size_label(1024), "1.0 KB");
        assert_eq!(file_size_label(12_595), "12.3 KB");
    }
}
