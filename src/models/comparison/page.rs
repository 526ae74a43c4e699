use crate::models::comparison::outcome::MeasurementOutcome;
use serde::{Deserialize, Serialize};

/// Before/after measurements for a single page slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageComparison {
    pub page_id: String,
    pub display_name: String,
    pub before: MeasurementOutcome,
    pub after: MeasurementOutcome,
}

impl PageComparison {
    /// Both scores, when both sides measured successfully.
    pub fn scores(&self) -> Option<(f64, f64)> {
        Some((self.before.performance()?, self.after.performance()?))
    }

    pub fn is_valid(&self) -> bool {
        self.scores().is_some()
    }

    pub fn diff(&self) -> Option<f64> {
        self.scores().map(|(before, after)| after - before)
    }

    pub fn failed_measurements(&self) -> usize {
        [&self.before, &self.after]
            .iter()
            .filter(|outcome| outcome.is_failed())
            .count()
    }
}
