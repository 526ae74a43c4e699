use crate::error::MeasureError;
use crate::models::app::Config;
use crate::models::comparison::{MeasurementOutcome, MeasurementResult, Variant};
use crate::models::lighthouse::{ApiErrorBody, AuditId, LighthouseResult, PsiResponse};
use log::{error, info, warn};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Anything that can take one performance measurement of a URL.
///
/// Implementations never fail: every problem is reported as
/// [`MeasurementOutcome::Failed`].
pub trait Measure {
    fn measure(
        &self,
        url: &str,
        variant: Variant,
    ) -> impl Future<Output = MeasurementOutcome> + Send;
}

/// PageSpeed Insights client. Runs Lighthouse remotely with the mobile
/// strategy.
#[derive(Debug, Clone)]
pub struct PageSpeedClient {
    http: Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl PageSpeedClient {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout: Duration) -> Self {
        PageSpeedClient {
            http: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_key, &config.endpoint, config.timeout)
    }

    async fn fetch(&self, url: &str) -> Result<MeasurementResult, MeasureError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("url", url),
                ("strategy", "mobile"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|body| body.error.message)
                .unwrap_or(body);
            return Err(MeasureError::Status { status, message });
        }

        let psi: PsiResponse = response.json().await?;
        extract_result(url, &psi.lighthouse_result)
    }
}

impl Measure for PageSpeedClient {
    async fn measure(&self, url: &str, variant: Variant) -> MeasurementOutcome {
        info!("⏳ Analyzing [{}]: {}", variant, url);

        let result = match tokio::time::timeout(self.timeout, self.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(MeasureError::Timeout(self.timeout)),
        };

        match result {
            Ok(result) => {
                info!(
                    "✅ Completed [{}]: {} - Performance: {:.0}",
                    variant, url, result.performance
                );
                MeasurementOutcome::Success(result)
            }
            Err(e) => {
                error!("❌ Failed [{}]: {} - {}", variant, url, e);
                MeasurementOutcome::failed(url)
            }
        }
    }
}

/// Pulls the performance score and the four headline audits out of a
/// Lighthouse result. Only the score is mandatory.
pub fn extract_result(
    url: &str,
    lighthouse: &LighthouseResult,
) -> Result<MeasurementResult, MeasureError> {
    let score = lighthouse
        .performance_score()
        .ok_or(MeasureError::MissingField("categories.performance.score"))?;

    Ok(MeasurementResult {
        url: url.to_string(),
        performance: scale_score(url, score),
        fcp: lighthouse.display_value(AuditId::FirstContentfulPaint),
        lcp: lighthouse.display_value(AuditId::LargestContentfulPaint),
        cls: lighthouse.display_value(AuditId::CumulativeLayoutShift),
        tbt: lighthouse.display_value(AuditId::TotalBlockingTime),
    })
}

// PSI scores are 0..=1; anything outside is clamped after scaling
fn scale_score(url: &str, score: f64) -> f64 {
    let scaled = score * 100.0;
    if !(0.0..=100.0).contains(&scaled) {
        warn!(
            "⚠️  Performance score {} for {} is out of range, clamping",
            score, url
        );
    }
    scaled.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lighthouse(value: serde_json::Value) -> LighthouseResult {
        serde_json::from_value::<PsiResponse>(value)
            .unwrap()
            .lighthouse_result
    }

    #[test]
    fn extracts_score_and_audits() {
        let lh = lighthouse(json!({
            "lighthouseResult": {
                "categories": { "performance": { "score": 0.87 } },
                "audits": {
                    "first-contentful-paint": { "displayValue": "1.2 s", "score": 0.9 },
                    "largest-contentful-paint": { "displayValue": "2.5 s" },
                    "cumulative-layout-shift": { "displayValue": "0.01" },
                    "total-blocking-time": { "displayValue": "120 ms" },
                    "speed-index": { "displayValue": "3.0 s" }
                }
            }
        }));

        let result = extract_result("https://a.dev/about", &lh).unwrap();
        assert_eq!(result.url, "https://a.dev/about");
        assert!((result.performance - 87.0).abs() < 1e-9);
        assert_eq!(result.fcp.as_deref(), Some("1.2 s"));
        assert_eq!(result.lcp.as_deref(), Some("2.5 s"));
        assert_eq!(result.cls.as_deref(), Some("0.01"));
        assert_eq!(result.tbt.as_deref(), Some("120 ms"));
    }

    #[test]
    fn missing_audits_are_absent_not_errors() {
        let lh = lighthouse(json!({
            "lighthouseResult": {
                "categories": { "performance": { "score": 0.5 } },
                "audits": {
                    "first-contentful-paint": { "score": 1.0 }
                }
            }
        }));

        let result = extract_result("u", &lh).unwrap();
        assert_eq!(result.fcp, None);
        assert_eq!(result.lcp, None);
        assert_eq!(result.cls, None);
        assert_eq!(result.tbt, None);
    }

    #[test]
    fn unrelated_audits_with_odd_shapes_are_ignored() {
        let lh = lighthouse(json!({
            "lighthouseResult": {
                "categories": { "performance": { "score": 0.7 } },
                "audits": {
                    "total-blocking-time": { "displayValue": "80 ms", "score": "n/a" },
                    "screenshot-thumbnails": { "details": { "items": [] }, "score": null },
                    "diagnostics": { "displayValue": 12, "score": { "weird": true } }
                }
            }
        }));

        let result = extract_result("u", &lh).unwrap();
        assert!((result.performance - 70.0).abs() < 1e-9);
        assert_eq!(result.tbt.as_deref(), Some("80 ms"));
        assert_eq!(result.fcp, None);
    }

    #[test]
    fn null_performance_score_is_an_error() {
        let lh = lighthouse(json!({
            "lighthouseResult": {
                "categories": { "performance": { "score": null } },
                "audits": {}
            }
        }));
        assert!(matches!(
            extract_result("u", &lh),
            Err(MeasureError::MissingField(_))
        ));

        let lh = lighthouse(json!({
            "lighthouseResult": { "categories": {}, "audits": {} }
        }));
        assert!(extract_result("u", &lh).is_err());
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(scale_score("u", 1.3), 100.0);
        assert_eq!(scale_score("u", -0.2), 0.0);
        assert_eq!(scale_score("u", 0.42), 42.0);
    }

    #[test]
    fn response_without_lighthouse_result_does_not_parse() {
        let parsed = serde_json::from_value::<PsiResponse>(json!({ "kind": "x" }));
        assert!(parsed.is_err());
    }
}
