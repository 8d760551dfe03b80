//! Fixed demo-mode data and the provider that serves it.
//!
//! Demo mode is a deliberate operating mode, not an error path: with no
//! backend configured the dashboard renders this data and the upload widget
//! simulates its transfer.

use super::models::{
    ChurnRisk, MetricsSnapshot, Review, ReviewsPage, SentimentLabel, SentimentScores,
    UploadDestination,
};
use super::provider::DataProvider;
use super::ApiError;

/// Provider used when no backend endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoProvider;

impl DataProvider for DemoProvider {
    fn fetch_metrics(&self) -> MetricsSnapshot {
        mock_metrics()
    }

    fn fetch_reviews(&self, sentiment: Option<SentimentLabel>, limit: usize) -> ReviewsPage {
        let reviews: Vec<Review> = mock_reviews()
            .into_iter()
            .filter(|review| sentiment.is_none_or(|label| review.sentiment == label))
            .take(limit)
            .collect();
        let count = reviews.len() as u64;
        ReviewsPage { reviews, count }
    }

    fn upload_destination(&self, filename: &str) -> Result<UploadDestination, ApiError> {
        Ok(UploadDestination {
            upload_url: String::new(),
            key: format!("uploads/{filename}"),
        })
    }
}

/// Aggregate metrics shown in demo mode and substituted on live failures.
pub fn mock_metrics() -> MetricsSnapshot {
    MetricsSnapshot {
        total_reviews: 200,
        sentiment_distribution: [
            (SentimentLabel::Positive, 120),
            (SentimentLabel::Negative, 30),
            (SentimentLabel::Neutral, 40),
            (SentimentLabel::Mixed, 10),
        ]
        .into_iter()
        .collect(),
        average_scores: SentimentScores {
            positive: 0.72,
            negative: 0.11,
            neutral: 0.13,
            mixed: 0.04,
        },
        churn_risk_distribution: [
            (ChurnRisk::High, 18),
            (ChurnRisk::Medium, 54),
            (ChurnRisk::Low, 128),
        ]
        .into_iter()
        .collect(),
    }
}

/// Review list shown in demo mode and substituted on live failures.
pub fn mock_reviews() -> Vec<Review> {
    vec![
        review(
            "rev-001",
            "Amelia Hart",
            "The onboarding was painless and the reporting features saved our team hours every week.",
            "2025-03-12",
            SentimentLabel::Positive,
            scores(0.94, 0.01, 0.04, 0.01),
            &["painless onboarding", "reporting features", "saved hours"],
            ChurnRisk::Low,
            0.01,
        ),
        review(
            "rev-002",
            "Marcus Bell",
            "Billing charged us twice this month and support took four days to answer. We are evaluating alternatives.",
            "2025-03-10",
            SentimentLabel::Negative,
            scores(0.02, 0.91, 0.04, 0.03),
            &["charged twice", "slow support", "evaluating alternatives"],
            ChurnRisk::High,
            0.91,
        ),
        review(
            "rev-003",
            "Priya Raman",
            "Does what it says. Nothing spectacular, nothing broken.",
            "2025-03-08",
            SentimentLabel::Neutral,
            scores(0.12, 0.08, 0.76, 0.04),
            &["does what it says"],
            ChurnRisk::Low,
            0.08,
        ),
        review(
            "rev-004",
            "Dana Whitfield",
            "Shipping on the hardware kit was slow, but the support engineer who helped us was fantastic.",
            "2025-03-05",
            SentimentLabel::Mixed,
            scores(0.31, 0.42, 0.12, 0.15),
            &["slow shipping", "fantastic support"],
            ChurnRisk::Medium,
            0.42,
        ),
        review(
            "rev-005",
            "Tomás Rivera",
            "The new dashboard charts are exactly what our account managers asked for.",
            "2025-03-02",
            SentimentLabel::Positive,
            scores(0.89, 0.02, 0.07, 0.02),
            &["dashboard charts", "account managers"],
            ChurnRisk::Low,
            0.02,
        ),
        review(
            "rev-006",
            "Lena Okafor",
            "Export to CSV silently drops rows with commas in the customer name. This has corrupted two monthly reports.",
            "2025-02-27",
            SentimentLabel::Negative,
            scores(0.03, 0.88, 0.05, 0.04),
            &["csv export", "drops rows", "corrupted reports"],
            ChurnRisk::High,
            0.88,
        ),
        review(
            "rev-007",
            "Victor Shaw",
            "Price went up, quality stayed the same. I like the product but the renewal conversation will be harder this year.",
            "2025-02-21",
            SentimentLabel::Mixed,
            scores(0.38, 0.35, 0.14, 0.13),
            &["price increase", "renewal"],
            ChurnRisk::Medium,
            0.35,
        ),
        review(
            "rev-008",
            "Hana Suzuki",
            "Average experience overall. Documentation could use more examples.",
            "2025-02-14",
            SentimentLabel::Neutral,
            scores(0.18, 0.11, 0.65, 0.06),
            &["documentation", "more examples"],
            ChurnRisk::Low,
            0.11,
        ),
    ]
}

fn scores(positive: f64, negative: f64, neutral: f64, mixed: f64) -> SentimentScores {
    SentimentScores {
        positive,
        negative,
        neutral,
        mixed,
    }
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    customer: &str,
    text: &str,
    date: &str,
    sentiment: SentimentLabel,
    sentiment_scores: SentimentScores,
    key_phrases: &[&str],
    churn_risk: ChurnRisk,
    negative_score: f64,
) -> Review {
    Review {
        review_id: id.to_string(),
        customer_name: customer.to_string(),
        review_text: text.to_string(),
        date: date.to_string(),
        sentiment,
        sentiment_scores,
        key_phrases: key_phrases.iter().map(|p| p.to_string()).collect(),
        churn_risk,
        negative_score,
        source_file: "demo_reviews.csv".to_string(),
        processed_at: format!("{date}T09:00:00Z"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_reviews_filter_and_limit() {
        let provider = DemoProvider;
        let all = provider.fetch_reviews(None, 50);
        assert_eq!(all.count as usize, all.reviews.len());
        assert_eq!(all.reviews.len(), mock_reviews().len());

        let negative = provider.fetch_reviews(Some(SentimentLabel::Negative), 50);
        assert!(negative
            .reviews
            .iter()
            .all(|r| r.sentiment == SentimentLabel::Negative));
        assert_eq!(negative.reviews.len(), 2);

        let limited = provider.fetch_reviews(None, 3);
        assert_eq!(limited.reviews.len(), 3);
    }

    #[test]
    fn demo_upload_destination_is_simulated() {
        let provider = DemoProvider;
        let dest = provider.upload_destination("reviews.csv").unwrap();
        assert!(dest.upload_url.is_empty());
        assert_eq!(dest.key, "uploads/reviews.csv");
    }

    #[test]
    fn mock_metrics_counts_sum_to_total() {
        let metrics = mock_metrics();
        let sentiment_sum: u64 = metrics.sentiment_distribution.values().sum();
        let churn_sum: u64 = metrics.churn_risk_distribution.values().sum();
        assert_eq!(sentiment_sum, metrics.total_reviews);
        assert_eq!(churn_sum, metrics.total_reviews);
    }
}
