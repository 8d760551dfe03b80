//! Live provider backed by the configured HTTP endpoint.

use serde::de::DeserializeOwned;
use url::Url;

use crate::http_client;

use super::demo;
use super::models::{MetricsSnapshot, ReviewsPage, SentimentLabel, UploadDestination};
use super::provider::DataProvider;
use super::ApiError;

/// Upper bound for any single API response body.
const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Provider that performs one HTTP GET per call against the backend.
///
/// Fetch failures of any kind are logged and replaced with the demo payloads
/// so the dashboard always renders; only `upload_destination` propagates its
/// error, which the upload widget maps to a status message.
#[derive(Debug, Clone)]
pub struct LiveProvider {
    /// Base endpoint with any trailing slash removed.
    base: String,
}

impl LiveProvider {
    /// Validate the base URL and build a provider bound to it.
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let trimmed = base.trim_end_matches('/');
        Url::parse(trimmed).map_err(|source| ApiError::BaseUrl {
            url: base.to_string(),
            source,
        })?;
        Ok(Self {
            base: trimmed.to_string(),
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base, path);
        let mut url = Url::parse(&raw).map_err(|source| ApiError::BaseUrl {
            url: raw.clone(),
            source,
        })?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, params)?;
        let response =
            http_client::agent()
                .get(url.as_str())
                .call()
                .map_err(|err| ApiError::Request {
                    url: url.to_string(),
                    detail: err.to_string(),
                })?;
        let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES).map_err(
            |source| ApiError::Read {
                url: url.to_string(),
                source,
            },
        )?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl DataProvider for LiveProvider {
    fn fetch_metrics(&self) -> MetricsSnapshot {
        match self.get_json("/api/metrics", &[]) {
            Ok(metrics) => metrics,
            Err(err) => {
                tracing::warn!("Metrics fetch failed, substituting demo data: {err}");
                demo::mock_metrics()
            }
        }
    }

    fn fetch_reviews(&self, sentiment: Option<SentimentLabel>, limit: usize) -> ReviewsPage {
        let limit = limit.to_string();
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(label) = sentiment {
            params.push(("sentiment", label.as_str()));
        }
        params.push(("limit", limit.as_str()));
        match self.get_json("/api/reviews", &params) {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!("Reviews fetch failed, substituting demo data: {err}");
                let reviews = demo::mock_reviews();
                let count = reviews.len() as u64;
                ReviewsPage { reviews, count }
            }
        }
    }

    fn upload_destination(&self, filename: &str) -> Result<UploadDestination, ApiError> {
        self.get_json("/api/upload-url", &[("filename", filename)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    fn serve_json_once(body: &str) -> (String, mpsc::Receiver<String>) {
        serve_once(&format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ))
    }

    fn serve_once(response: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = response.to_string();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let read = stream.read(&mut buf).unwrap_or(0);
                let _ = tx.send(String::from_utf8_lossy(&buf[..read]).to_string());
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{}", addr), rx)
    }

    #[test]
    fn fetches_and_decodes_metrics() {
        let body = r#"{
            "totalReviews": 3,
            "sentimentDistribution": { "POSITIVE": 2, "NEGATIVE": 1 },
            "averageScores": { "Positive": 0.8, "Negative": 0.1, "Neutral": 0.07, "Mixed": 0.03 },
            "churnRiskDistribution": { "HIGH": 1, "LOW": 2 }
        }"#;
        let (base, requests) = serve_json_once(body);
        let provider = LiveProvider::new(&base).unwrap();
        let metrics = provider.fetch_metrics();
        assert_eq!(metrics.total_reviews, 3);
        assert_eq!(metrics.sentiment_count(SentimentLabel::Positive), 2);
        let request = requests.recv().unwrap();
        assert!(request.starts_with("GET /api/metrics"));
    }

    #[test]
    fn failed_metrics_fetch_substitutes_demo_data() {
        let (base, _requests) =
            serve_once("HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\n\r\n");
        let provider = LiveProvider::new(&base).unwrap();
        let metrics = provider.fetch_metrics();
        assert_eq!(metrics, demo::mock_metrics());
    }

    #[test]
    fn undecodable_reviews_fetch_substitutes_demo_data() {
        let (base, _requests) = serve_json_once("not json");
        let provider = LiveProvider::new(&base).unwrap();
        let page = provider.fetch_reviews(None, 50);
        assert_eq!(page.reviews, demo::mock_reviews());
    }

    #[test]
    fn reviews_request_carries_filter_and_limit() {
        let body = r#"{ "reviews": [], "count": 0 }"#;
        let (base, requests) = serve_json_once(body);
        let provider = LiveProvider::new(&base).unwrap();
        let page = provider.fetch_reviews(Some(SentimentLabel::Negative), 25);
        assert!(page.reviews.is_empty());
        let request = requests.recv().unwrap();
        assert!(request.starts_with("GET /api/reviews?sentiment=NEGATIVE&limit=25"));
    }

    #[test]
    fn upload_destination_encodes_filename() {
        let body = r#"{ "uploadUrl": "https://bucket.example/key", "key": "uploads/march report.csv" }"#;
        let (base, requests) = serve_json_once(body);
        let provider = LiveProvider::new(&base).unwrap();
        let dest = provider.upload_destination("march report.csv").unwrap();
        assert_eq!(dest.upload_url, "https://bucket.example/key");
        let request = requests.recv().unwrap();
        assert!(request.starts_with("GET /api/upload-url?filename=march+report.csv"));
    }

    #[test]
    fn upload_destination_propagates_transport_failure() {
        let (base, _requests) =
            serve_once("HTTP/1.1 502 Bad Gateway\r\nContent-Length: 0\r\n\r\n");
        let provider = LiveProvider::new(&base).unwrap();
        let err = provider.upload_destination("a.csv").unwrap_err();
        assert!(matches!(err, ApiError::Request { .. }));
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let provider = LiveProvider::new("http://example.invalid/").unwrap();
        let url = provider.endpoint("/api/metrics", &[]).unwrap();
        assert_eq!(url.as_str(), "http://example.invalid/api/metrics");
    }
}
