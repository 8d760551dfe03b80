//! Wire types shared with the backend API.
//!
//! Field names follow the JSON payloads verbatim (camelCase object keys,
//! capitalized score keys, uppercase label strings). Everything here is a
//! read-only snapshot: parsed once, replaced wholesale on the next load,
//! never mutated in place.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentiment classification assigned to a review upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl SentimentLabel {
    /// All labels in display order.
    pub const ALL: [SentimentLabel; 4] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Mixed,
    ];

    /// Uppercase wire spelling, e.g. `POSITIVE`.
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Mixed => "MIXED",
        }
    }

    /// Human spelling for buttons and badges, e.g. `Positive`.
    pub fn display_name(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse churn-risk bucket attached to a review upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChurnRisk {
    High,
    Medium,
    Low,
}

impl ChurnRisk {
    /// Every bucket in display order.
    pub const ALL: [ChurnRisk; 3] = [ChurnRisk::High, ChurnRisk::Medium, ChurnRisk::Low];

    /// Uppercase wire spelling, e.g. `HIGH`.
    pub fn as_str(self) -> &'static str {
        match self {
            ChurnRisk::High => "HIGH",
            ChurnRisk::Medium => "MEDIUM",
            ChurnRisk::Low => "LOW",
        }
    }

    /// Human spelling for badges and axis labels, e.g. `High`.
    pub fn display_name(self) -> &'static str {
        match self {
            ChurnRisk::High => "High",
            ChurnRisk::Medium => "Medium",
            ChurnRisk::Low => "Low",
        }
    }
}

impl fmt::Display for ChurnRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-way confidence distribution, each component in `[0, 1]`.
///
/// The components nominally sum to 1; the client trusts the payload and does
/// not renormalize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub mixed: f64,
}

/// One processed customer review as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: String,
    pub customer_name: String,
    pub review_text: String,
    /// ISO date (or datetime) string as delivered; formatting happens in the UI.
    pub date: String,
    pub sentiment: SentimentLabel,
    pub sentiment_scores: SentimentScores,
    pub key_phrases: Vec<String>,
    pub churn_risk: ChurnRisk,
    /// Negative-confidence scalar in `[0, 1]`, shown as the table meter.
    pub negative_score: f64,
    /// Name of the CSV the review came from.
    pub source_file: String,
    pub processed_at: String,
}

/// Aggregate metrics for the whole review corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_reviews: u64,
    #[serde(default)]
    pub sentiment_distribution: BTreeMap<SentimentLabel, u64>,
    #[serde(default)]
    pub average_scores: SentimentScores,
    #[serde(default)]
    pub churn_risk_distribution: BTreeMap<ChurnRisk, u64>,
}

impl MetricsSnapshot {
    /// Count for one sentiment label, zero when absent.
    pub fn sentiment_count(&self, label: SentimentLabel) -> u64 {
        self.sentiment_distribution.get(&label).copied().unwrap_or(0)
    }

    /// Count for one churn-risk bucket, zero when absent.
    pub fn churn_count(&self, risk: ChurnRisk) -> u64 {
        self.churn_risk_distribution.get(&risk).copied().unwrap_or(0)
    }
}

/// One page of reviews plus the server-reported count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewsPage {
    pub reviews: Vec<Review>,
    pub count: u64,
}

/// Pre-signed upload destination for one CSV file.
///
/// An empty `upload_url` means no real destination exists and the upload
/// should be simulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDestination {
    pub upload_url: String,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_review_shape() {
        let json = r#"
        {
          "reviewId": "rev-001",
          "customerName": "Dana Whitfield",
          "reviewText": "Shipping was slow but support fixed it.",
          "date": "2025-03-05",
          "sentiment": "MIXED",
          "sentimentScores": { "Positive": 0.31, "Negative": 0.42, "Neutral": 0.12, "Mixed": 0.15 },
          "keyPhrases": ["slow shipping", "helpful support"],
          "churnRisk": "MEDIUM",
          "negativeScore": 0.42,
          "sourceFile": "march_batch.csv",
          "processedAt": "2025-03-06T08:12:44Z"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.review_id, "rev-001");
        assert_eq!(review.sentiment, SentimentLabel::Mixed);
        assert_eq!(review.churn_risk, ChurnRisk::Medium);
        assert_eq!(review.key_phrases.len(), 2);
        assert!((review.sentiment_scores.negative - 0.42).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_metrics_shape() {
        let json = r#"
        {
          "totalReviews": 200,
          "sentimentDistribution": { "POSITIVE": 120, "NEGATIVE": 30, "NEUTRAL": 40, "MIXED": 10 },
          "averageScores": { "Positive": 0.72, "Negative": 0.11, "Neutral": 0.13, "Mixed": 0.04 },
          "churnRiskDistribution": { "HIGH": 18, "MEDIUM": 54, "LOW": 128 }
        }"#;
        let metrics: MetricsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.total_reviews, 200);
        assert_eq!(metrics.sentiment_count(SentimentLabel::Negative), 30);
        assert_eq!(metrics.churn_count(ChurnRisk::High), 18);
    }

    #[test]
    fn metrics_counts_default_to_zero_for_missing_entries() {
        let metrics: MetricsSnapshot = serde_json::from_str(r#"{ "totalReviews": 0 }"#).unwrap();
        assert_eq!(metrics.sentiment_count(SentimentLabel::Positive), 0);
        assert_eq!(metrics.churn_count(ChurnRisk::Low), 0);
    }

    #[test]
    fn label_strings_round_trip() {
        for label in SentimentLabel::ALL {
            let encoded = serde_json::to_string(&label).unwrap();
            assert_eq!(encoded, format!("\"{}\"", label.as_str()));
        }
        assert_eq!(ChurnRisk::High.to_string(), "HIGH");
    }
}
