//! Pure transforms from a [`MetricsSnapshot`] to the card strings.
//!
//! Stateless by design: every value is recomputed from the latest snapshot on
//! each render, and all divisions guard against a zero total.

use crate::api::{ChurnRisk, MetricsSnapshot, SentimentLabel};

/// Share of negative reviews as a percentage with one decimal, e.g. `15.0`.
///
/// Renders `0` when the snapshot is empty so a fresh corpus never divides by
/// zero.
pub fn negative_percent(snapshot: &MetricsSnapshot) -> String {
    if snapshot.total_reviews == 0 {
        return "0".to_string();
    }
    let negative = snapshot.sentiment_count(SentimentLabel::Negative) as f64;
    format!(
        "{:.1}",
        negative / snapshot.total_reviews as f64 * 100.0
    )
}

/// Count of negative reviews for the card subtitle.
pub fn negative_count(snapshot: &MetricsSnapshot) -> u64 {
    snapshot.sentiment_count(SentimentLabel::Negative)
}

/// Average positive confidence as an integer percentage, e.g. `72`.
pub fn positive_score_percent(snapshot: &MetricsSnapshot) -> String {
    format!("{:.0}", snapshot.average_scores.positive * 100.0)
}

/// Direct pass-through of the HIGH churn bucket.
pub fn high_churn_count(snapshot: &MetricsSnapshot) -> u64 {
    snapshot.churn_count(ChurnRisk::High)
}

/// Group a count with comma separators, e.g. `12,847`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
