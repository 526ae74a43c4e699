use serde::{Deserialize, Serialize};
use std::fmt;

/// Which deployment a measurement was taken against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Before,
    After,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Variant::Before => "BEFORE",
            Variant::After => "AFTER",
        };
        write!(f, "{}", label)
    }
}

/// Metrics pulled from one successful PSI run.
///
/// `performance` is the category score scaled to 0..=100 and left unrounded;
/// the metric fields are Lighthouse display strings such as `"1.2 s"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    pub url: String,
    pub performance: f64,
    pub fcp: Option<String>,
    pub lcp: Option<String>,
    pub cls: Option<String>,
    pub tbt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MeasurementOutcome {
    Success(MeasurementResult),
    Failed { url: String },
}

impl MeasurementOutcome {
    pub fn failed(url: impl Into<String>) -> Self {
        MeasurementOutcome::Failed { url: url.into() }
    }

    pub fn url(&self) -> &str {
        match self {
            MeasurementOutcome::Success(result) => &result.url,
            MeasurementOutcome::Failed { url } => url,
        }
    }

    pub fn result(&self) -> Option<&MeasurementResult> {
        match self {
            MeasurementOutcome::Success(result) => Some(result),
            MeasurementOutcome::Failed { .. } => None,
        }
    }

    pub fn performance(&self) -> Option<f64> {
        self.result().map(|r| r.performance)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, MeasurementOutcome::Failed { .. })
    }
}
